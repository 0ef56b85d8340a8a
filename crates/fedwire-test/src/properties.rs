//! Property tests across both conventions and the envelope

use fedwire_codec::{Convention, EventEnvelope, ENVELOPE_HEADER_SIZE};
use fedwire_core::{PrimitiveKind, PrimitiveValue};
use proptest::prelude::*;

fn arb_ascii() -> impl Strategy<Value = String> {
    "[ -~]{0,32}"
}

/// Values every convention can carry
fn arb_portable_value() -> impl Strategy<Value = PrimitiveValue> {
    prop_oneof![
        any::<bool>().prop_map(PrimitiveValue::Boolean),
        any::<u8>().prop_map(PrimitiveValue::UnsignedByte),
        any::<i16>().prop_map(PrimitiveValue::Short),
        any::<i32>().prop_map(PrimitiveValue::Int),
        any::<i64>().prop_map(PrimitiveValue::Long),
        any::<f32>().prop_map(PrimitiveValue::Float),
        any::<f64>().prop_map(PrimitiveValue::Double),
        arb_ascii().prop_map(PrimitiveValue::String),
    ]
}

fn arb_convention() -> impl Strategy<Value = Convention> {
    prop_oneof![Just(Convention::MessageBuffer), Just(Convention::Standard)]
}

fn arb_kind() -> impl Strategy<Value = PrimitiveKind> {
    proptest::sample::select(PrimitiveKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn value_round_trips(convention in arb_convention(), value in arb_portable_value()) {
        let bytes = convention.encode_value(&value).unwrap();
        prop_assert_eq!(convention.decode(value.kind(), &bytes).unwrap(), value);
    }

    #[test]
    fn unicode_round_trips_under_message_buffer(text in any::<String>()) {
        let value = PrimitiveValue::String(text);
        let bytes = Convention::MessageBuffer.encode_value(&value).unwrap();
        prop_assert_eq!(Convention::MessageBuffer.decode(PrimitiveKind::String, &bytes).unwrap(), value);
    }

    #[test]
    fn sequence_round_trips(values in proptest::collection::vec(arb_portable_value(), 0..16)) {
        let kinds: Vec<_> = values.iter().map(PrimitiveValue::kind).collect();
        let bytes = Convention::MessageBuffer.encode_sequence(&values).unwrap();
        prop_assert_eq!(Convention::MessageBuffer.decode_sequence(&kinds, &bytes).unwrap(), values);
    }

    #[test]
    fn variable_array_round_trips(raw in proptest::collection::vec(any::<i16>(), 0..64)) {
        let values: Vec<_> = raw.into_iter().map(PrimitiveValue::Short).collect();
        let bytes = Convention::Standard.encode_variable_array(PrimitiveKind::Short, &values).unwrap();
        prop_assert_eq!(
            Convention::Standard.decode_variable_array(PrimitiveKind::Short, &bytes).unwrap(),
            values
        );
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(
        convention in arb_convention(),
        kind in arb_kind(),
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let _ = convention.decode(kind, &bytes);
    }

    #[test]
    fn truncated_envelope_fails_at_the_cut(
        logical_time in any::<f64>(),
        step in any::<i32>(),
        source_time in any::<f64>(),
        payload in proptest::collection::vec(any::<u8>(), 0..48),
        cut in any::<proptest::sample::Index>(),
    ) {
        let full = EventEnvelope::new(logical_time, step, source_time, &payload).unwrap();
        let bytes = full.to_bytes();
        let cut = cut.index(bytes.len());
        let env = EventEnvelope::from_bytes(&bytes[..cut]);

        prop_assert_eq!(env.logical_time().is_ok(), cut >= 8);
        prop_assert_eq!(env.step().is_ok(), cut >= 12);
        prop_assert_eq!(env.source_time().is_ok(), cut >= 20);
        prop_assert!(env.payload().unwrap_err().is_underrun());
        if cut >= 12 {
            prop_assert_eq!(env.step().unwrap(), step);
        }
    }

    #[test]
    fn envelope_accessors_repeatable(
        logical_time in any::<f64>(),
        step in any::<i32>(),
        payload in proptest::collection::vec(any::<u8>(), 0..48),
    ) {
        let env = EventEnvelope::new(logical_time, step, 0.0, &payload).unwrap();
        prop_assert_eq!(env.len(), ENVELOPE_HEADER_SIZE + payload.len());
        prop_assert_eq!(env.payload().unwrap(), &payload[..]);
        prop_assert_eq!(env.logical_time().unwrap().to_bits(), logical_time.to_bits());
        prop_assert_eq!(env.payload().unwrap(), &payload[..]);
        prop_assert_eq!(env.step().unwrap(), step);
    }
}
