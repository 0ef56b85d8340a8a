#![no_main]

use libfuzzer_sys::fuzz_target;

use fedwire_codec::Convention;
use fedwire_core::PrimitiveKind;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, bytes)) = data.split_first() else {
        return;
    };
    let kind = PrimitiveKind::ALL[usize::from(selector & 0x07)];
    let convention = if selector & 0x80 == 0 {
        Convention::MessageBuffer
    } else {
        Convention::Standard
    };

    // Anything that decodes must re-encode to the bytes it consumed
    if let Ok(value) = convention.decode(kind, bytes) {
        let encoded = match convention.encode(kind, &value) {
            Ok(encoded) => encoded,
            Err(e) => panic!("decoded {:?} but cannot re-encode: {}", value, e),
        };
        if kind != PrimitiveKind::Boolean {
            assert_eq!(&bytes[..encoded.len()], &encoded[..]);
        }
    }
});
