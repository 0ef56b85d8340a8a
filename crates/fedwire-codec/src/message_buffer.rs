//! Message buffer convention
//!
//! Every primitive goes through a [`ByteCursorBuffer`] at its natural
//! big-endian width. Strings are an i32 length prefix plus UTF-8 bytes.
//! Several values may be packed back to back into one buffer.

use bytes::Bytes;
use fedwire_core::{FedError, FedResult, PrimitiveKind, PrimitiveValue};

use crate::buffer::{ByteCursorBuffer, ByteReader, Endianness};

fn check_kind(kind: PrimitiveKind, value: &PrimitiveValue) -> FedResult<()> {
    if value.kind() != kind {
        return Err(FedError::KindMismatch {
            expected: kind,
            actual: value.kind(),
        });
    }
    Ok(())
}

/// Append one value. The buffer is untouched on failure.
pub(crate) fn write(buf: &mut ByteCursorBuffer, kind: PrimitiveKind, value: &PrimitiveValue) -> FedResult<()> {
    check_kind(kind, value)?;
    match value {
        PrimitiveValue::Boolean(v) => buf.append_byte(u8::from(*v)),
        PrimitiveValue::UnsignedByte(v) => buf.append_byte(*v),
        PrimitiveValue::Short(v) => buf.append_int16(*v),
        PrimitiveValue::Int(v) => buf.append_int32(*v),
        PrimitiveValue::Long(v) => buf.append_int64(*v),
        PrimitiveValue::Float(v) => buf.append_float32(*v),
        PrimitiveValue::Double(v) => buf.append_float64(*v),
        PrimitiveValue::String(s) => buf.append_length_prefixed_bytes(s.as_bytes())?,
    }
    Ok(())
}

/// Read one value of the expected kind
pub(crate) fn read(reader: &mut ByteReader<'_>, kind: PrimitiveKind) -> FedResult<PrimitiveValue> {
    Ok(match kind {
        PrimitiveKind::Boolean => PrimitiveValue::Boolean(reader.read_byte()? != 0),
        PrimitiveKind::UnsignedByte => PrimitiveValue::UnsignedByte(reader.read_byte()?),
        PrimitiveKind::Short => PrimitiveValue::Short(reader.read_int16(Endianness::Big)?),
        PrimitiveKind::Int => PrimitiveValue::Int(reader.read_int32(Endianness::Big)?),
        PrimitiveKind::Long => PrimitiveValue::Long(reader.read_int64(Endianness::Big)?),
        PrimitiveKind::Float => PrimitiveValue::Float(reader.read_float32(Endianness::Big)?),
        PrimitiveKind::Double => PrimitiveValue::Double(reader.read_float64(Endianness::Big)?),
        PrimitiveKind::String => {
            let raw = reader.read_length_prefixed_bytes()?;
            let text = std::str::from_utf8(raw).map_err(|_| FedError::InvalidUtf8)?;
            PrimitiveValue::String(text.to_owned())
        }
    })
}

pub fn encode(kind: PrimitiveKind, value: &PrimitiveValue) -> FedResult<Bytes> {
    let mut buf = ByteCursorBuffer::new();
    write(&mut buf, kind, value)?;
    Ok(buf.to_bytes())
}

pub fn decode(kind: PrimitiveKind, bytes: &[u8]) -> FedResult<PrimitiveValue> {
    read(&mut ByteReader::new(bytes), kind)
}

/// Pack several values into one buffer, in order
pub fn encode_sequence(values: &[PrimitiveValue]) -> FedResult<Bytes> {
    let mut buf = ByteCursorBuffer::new();
    for value in values {
        write(&mut buf, value.kind(), value)?;
    }
    Ok(buf.to_bytes())
}

/// Unpack values in the order of `kinds`
pub fn decode_sequence(kinds: &[PrimitiveKind], bytes: &[u8]) -> FedResult<Vec<PrimitiveValue>> {
    let mut reader = ByteReader::new(bytes);
    kinds.iter().map(|kind| read(&mut reader, *kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_widths() {
        let cases = [
            (PrimitiveValue::Boolean(true), vec![1]),
            (PrimitiveValue::UnsignedByte(0xAB), vec![0xAB]),
            (PrimitiveValue::Short(-2), vec![0xFF, 0xFE]),
            (PrimitiveValue::Int(42), vec![0, 0, 0, 42]),
            (PrimitiveValue::Long(1), vec![0, 0, 0, 0, 0, 0, 0, 1]),
            (PrimitiveValue::Float(1.0), 1.0f32.to_be_bytes().to_vec()),
            (PrimitiveValue::Double(-2.5), (-2.5f64).to_be_bytes().to_vec()),
        ];
        for (value, expected) in cases {
            let bytes = encode(value.kind(), &value).unwrap();
            assert_eq!(bytes.to_vec(), expected, "{:?}", value);
            assert_eq!(bytes.len(), value.kind().fixed_width().unwrap());
            assert_eq!(decode(value.kind(), &bytes).unwrap(), value);
        }
    }

    #[test]
    fn test_string_layout() {
        let bytes = encode(PrimitiveKind::String, &"hi".into()).unwrap();
        assert_eq!(&bytes[..], &[0, 0, 0, 2, b'h', b'i']);
        assert_eq!(decode(PrimitiveKind::String, &bytes).unwrap(), PrimitiveValue::from("hi"));
    }

    #[test]
    fn test_utf8_string() {
        let value = PrimitiveValue::from("héllo ✓");
        let bytes = encode(PrimitiveKind::String, &value).unwrap();
        assert_eq!(decode(PrimitiveKind::String, &bytes).unwrap(), value);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = decode(PrimitiveKind::String, &[0, 0, 0, 1, 0xFF]).unwrap_err();
        assert_eq!(err, FedError::InvalidUtf8);
    }

    #[test]
    fn test_kind_mismatch() {
        let err = encode(PrimitiveKind::Int, &PrimitiveValue::Double(1.0)).unwrap_err();
        assert_eq!(
            err,
            FedError::KindMismatch {
                expected: PrimitiveKind::Int,
                actual: PrimitiveKind::Double
            }
        );
    }

    #[test]
    fn test_nonzero_byte_is_true() {
        assert_eq!(
            decode(PrimitiveKind::Boolean, &[0x7F]).unwrap(),
            PrimitiveValue::Boolean(true)
        );
        assert_eq!(
            decode(PrimitiveKind::Boolean, &[0]).unwrap(),
            PrimitiveValue::Boolean(false)
        );
    }

    #[test]
    fn test_short_input_underruns() {
        assert!(matches!(
            decode(PrimitiveKind::Long, &[0, 0, 0]),
            Err(FedError::BufferUnderrun {
                requested: 8,
                remaining: 3
            })
        ));
        assert!(decode(PrimitiveKind::String, &[0, 0, 0, 3, b'a']).unwrap_err().is_underrun());
    }

    #[test]
    fn test_sequence_roundtrip() {
        // Joystick-style update: five doubles then a label
        let values = vec![
            PrimitiveValue::Double(0.1),
            PrimitiveValue::Double(-0.2),
            PrimitiveValue::Double(0.0),
            PrimitiveValue::Double(0.75),
            PrimitiveValue::Double(0.75),
            PrimitiveValue::from("stick"),
        ];
        let kinds: Vec<_> = values.iter().map(PrimitiveValue::kind).collect();

        let bytes = encode_sequence(&values).unwrap();
        assert_eq!(bytes.len(), 5 * 8 + 4 + 5);
        assert_eq!(decode_sequence(&kinds, &bytes).unwrap(), values);
    }

    #[test]
    fn test_sequence_truncated() {
        let values = [PrimitiveValue::Int(1), PrimitiveValue::Int(2)];
        let bytes = encode_sequence(&values).unwrap();
        let kinds = [PrimitiveKind::Int, PrimitiveKind::Int];
        assert!(decode_sequence(&kinds, &bytes[..6]).is_err());
    }
}
