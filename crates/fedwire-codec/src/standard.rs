//! Standard HLA 1516e convention
//!
//! Basic data representations, all big-endian:
//! - HLAboolean, HLAbyte: 1 byte
//! - HLAinteger16BE / 32BE / 64BE: 2 / 4 / 8 bytes
//! - HLAfloat32BE / 64BE: 4 / 8 bytes IEEE-754
//! - HLAASCIIstring: i32 character count, one byte per ASCII character
//!
//! Plus the HLAvariableArray (count prefixed) and HLAfixedArray (length
//! agreed out of band) aggregates over a single element kind. This
//! convention does not pack several unrelated values into one buffer.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use fedwire_core::{FedError, FedResult, PrimitiveKind, PrimitiveValue};

/// HLA array element count size in bytes
pub const ELEMENT_COUNT_SIZE: usize = 4;

fn check_kind(kind: PrimitiveKind, value: &PrimitiveValue) -> FedResult<()> {
    if value.kind() != kind {
        return Err(FedError::KindMismatch {
            expected: kind,
            actual: value.kind(),
        });
    }
    Ok(())
}

fn ensure(buf: &[u8], n: usize) -> FedResult<()> {
    if buf.remaining() < n {
        return Err(FedError::BufferUnderrun {
            requested: n,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

fn encode_count(len: usize) -> FedResult<i32> {
    i32::try_from(len).map_err(|_| FedError::MalformedLength {
        length: len as i64,
        remaining: len,
    })
}

fn decode_count(buf: &mut &[u8]) -> FedResult<usize> {
    ensure(buf, ELEMENT_COUNT_SIZE)?;
    let count = buf.get_i32();
    usize::try_from(count).map_err(|_| FedError::MalformedLength {
        length: count as i64,
        remaining: buf.remaining(),
    })
}

/// Encoded size of one value
pub fn encoded_length(value: &PrimitiveValue) -> usize {
    match value {
        PrimitiveValue::String(s) => ELEMENT_COUNT_SIZE + s.len(),
        other => other.kind().fixed_width().unwrap_or_default(),
    }
}

pub(crate) fn write(out: &mut BytesMut, value: &PrimitiveValue) -> FedResult<()> {
    match value {
        PrimitiveValue::Boolean(v) => out.put_u8(u8::from(*v)),
        PrimitiveValue::UnsignedByte(v) => out.put_u8(*v),
        PrimitiveValue::Short(v) => out.put_i16(*v),
        PrimitiveValue::Int(v) => out.put_i32(*v),
        PrimitiveValue::Long(v) => out.put_i64(*v),
        PrimitiveValue::Float(v) => out.put_f32(*v),
        PrimitiveValue::Double(v) => out.put_f64(*v),
        PrimitiveValue::String(s) => {
            if !s.is_ascii() {
                return Err(FedError::NotRepresentable(format!(
                    "HLAASCIIstring cannot carry {:?}",
                    s
                )));
            }
            out.put_i32(encode_count(s.len())?);
            out.put_slice(s.as_bytes());
        }
    }
    Ok(())
}

pub(crate) fn read(buf: &mut &[u8], kind: PrimitiveKind) -> FedResult<PrimitiveValue> {
    if let Some(width) = kind.fixed_width() {
        ensure(buf, width)?;
    }
    Ok(match kind {
        PrimitiveKind::Boolean => PrimitiveValue::Boolean(buf.get_u8() != 0),
        PrimitiveKind::UnsignedByte => PrimitiveValue::UnsignedByte(buf.get_u8()),
        PrimitiveKind::Short => PrimitiveValue::Short(buf.get_i16()),
        PrimitiveKind::Int => PrimitiveValue::Int(buf.get_i32()),
        PrimitiveKind::Long => PrimitiveValue::Long(buf.get_i64()),
        PrimitiveKind::Float => PrimitiveValue::Float(buf.get_f32()),
        PrimitiveKind::Double => PrimitiveValue::Double(buf.get_f64()),
        PrimitiveKind::String => {
            let len = decode_count(buf)?;
            ensure(buf, len)?;
            let data: &[u8] = *buf;
            let (raw, rest) = data.split_at(len);
            if !raw.is_ascii() {
                return Err(FedError::NotRepresentable(
                    "HLAASCIIstring contains non-ASCII bytes".into(),
                ));
            }
            *buf = rest;
            // ASCII is always valid UTF-8
            PrimitiveValue::String(raw.iter().map(|&b| b as char).collect())
        }
    })
}

pub fn encode(kind: PrimitiveKind, value: &PrimitiveValue) -> FedResult<Bytes> {
    check_kind(kind, value)?;
    let mut out = BytesMut::with_capacity(encoded_length(value));
    write(&mut out, value)?;
    Ok(out.freeze())
}

pub fn decode(kind: PrimitiveKind, bytes: &[u8]) -> FedResult<PrimitiveValue> {
    let mut buf = bytes;
    read(&mut buf, kind)
}

fn write_elements(out: &mut BytesMut, kind: PrimitiveKind, values: &[PrimitiveValue]) -> FedResult<()> {
    for value in values {
        check_kind(kind, value)?;
        write(out, value)?;
    }
    Ok(())
}

fn read_elements(buf: &mut &[u8], kind: PrimitiveKind, count: usize) -> FedResult<Vec<PrimitiveValue>> {
    if let Some(width) = kind.fixed_width() {
        ensure(buf, count.saturating_mul(width))?;
    }
    // Every element takes at least one byte
    let mut values = Vec::with_capacity(count.min(buf.remaining()));
    for _ in 0..count {
        values.push(read(buf, kind)?);
    }
    Ok(values)
}

/// HLAvariableArray: element count, then the elements
pub fn encode_variable_array(kind: PrimitiveKind, values: &[PrimitiveValue]) -> FedResult<Bytes> {
    let size = ELEMENT_COUNT_SIZE + values.iter().map(encoded_length).sum::<usize>();
    let mut out = BytesMut::with_capacity(size);
    out.put_i32(encode_count(values.len())?);
    write_elements(&mut out, kind, values)?;
    Ok(out.freeze())
}

pub fn decode_variable_array(kind: PrimitiveKind, bytes: &[u8]) -> FedResult<Vec<PrimitiveValue>> {
    let mut buf = bytes;
    let count = decode_count(&mut buf)?;
    read_elements(&mut buf, kind, count)
}

/// HLAfixedArray: the elements only
pub fn encode_fixed_array(kind: PrimitiveKind, values: &[PrimitiveValue]) -> FedResult<Bytes> {
    let mut out = BytesMut::with_capacity(values.iter().map(encoded_length).sum());
    write_elements(&mut out, kind, values)?;
    Ok(out.freeze())
}

pub fn decode_fixed_array(kind: PrimitiveKind, len: usize, bytes: &[u8]) -> FedResult<Vec<PrimitiveValue>> {
    let mut buf = bytes;
    read_elements(&mut buf, kind, len)
}
