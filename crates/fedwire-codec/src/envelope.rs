//! Event envelope for the fedwire wire format
//!
//! Envelope layout (all big-endian):
//! - Bytes 0-7: Logical time (f64)
//! - Bytes 8-11: Step counter (i32)
//! - Bytes 12-19: Source time (f64)
//! - Bytes 20-23: Payload length N (i32)
//! - Bytes 24..24+N: Payload
//!
//! Field accessors are not cached. Each one starts a fresh read pass at
//! offset 0 and skips the fields before it, so every accessor can be
//! called in any order, any number of times, with the same result.

use bytes::Bytes;
use fedwire_core::FedResult;

use crate::buffer::{ByteCursorBuffer, ByteReader, Endianness, LENGTH_PREFIX_SIZE};

/// Logical time field size in bytes
pub const LOGICAL_TIME_SIZE: usize = 8;

/// Step counter field size in bytes
pub const STEP_SIZE: usize = 4;

/// Source time field size in bytes
pub const SOURCE_TIME_SIZE: usize = 8;

/// Offset of the step counter
pub const STEP_OFFSET: usize = LOGICAL_TIME_SIZE;

/// Offset of the source time
pub const SOURCE_TIME_OFFSET: usize = STEP_OFFSET + STEP_SIZE;

/// Offset of the payload length prefix
pub const PAYLOAD_OFFSET: usize = SOURCE_TIME_OFFSET + SOURCE_TIME_SIZE;

/// Envelope size with an empty payload
pub const ENVELOPE_HEADER_SIZE: usize = PAYLOAD_OFFSET + LENGTH_PREFIX_SIZE;

/// All four envelope fields, decoded in one pass
#[derive(Clone, Debug, PartialEq)]
pub struct EnvelopeFields {
    pub logical_time: f64,
    pub step: i32,
    pub source_time: f64,
    pub payload: Bytes,
}

/// Framed event: timing metadata plus an opaque payload
///
/// There are no write operations. An envelope built from received bytes
/// can only be read.
#[derive(Clone, Debug)]
pub struct EventEnvelope {
    buffer: ByteCursorBuffer,
}

impl EventEnvelope {
    /// Frame the four fields in wire order.
    /// Fails only if the payload length does not fit the i32 prefix.
    pub fn new(logical_time: f64, step: i32, source_time: f64, payload: &[u8]) -> FedResult<Self> {
        let mut buffer = ByteCursorBuffer::with_capacity(ENVELOPE_HEADER_SIZE + payload.len());
        buffer.append_float64(logical_time);
        buffer.append_int32(step);
        buffer.append_float64(source_time);
        buffer.append_length_prefixed_bytes(payload)?;
        Ok(EventEnvelope { buffer })
    }

    /// Wrap bytes received from a transport. Nothing is validated until a
    /// field accessor runs.
    pub fn from_bytes(raw: impl AsRef<[u8]>) -> Self {
        let raw = raw.as_ref();
        tracing::trace!("wrapping {} received envelope bytes", raw.len());
        EventEnvelope {
            buffer: ByteCursorBuffer::from_bytes(raw),
        }
    }

    fn pass(&self) -> ByteReader<'_> {
        self.buffer.reader()
    }

    pub fn logical_time(&self) -> FedResult<f64> {
        self.pass().read_float64(Endianness::Big)
    }

    pub fn step(&self) -> FedResult<i32> {
        let mut pass = self.pass();
        pass.skip(LOGICAL_TIME_SIZE)?;
        pass.read_int32(Endianness::Big)
    }

    pub fn source_time(&self) -> FedResult<f64> {
        let mut pass = self.pass();
        pass.skip(LOGICAL_TIME_SIZE + STEP_SIZE)?;
        pass.read_float64(Endianness::Big)
    }

    pub fn payload(&self) -> FedResult<&[u8]> {
        let mut pass = self.pass();
        pass.skip(LOGICAL_TIME_SIZE + STEP_SIZE + SOURCE_TIME_SIZE)?;
        pass.read_length_prefixed_bytes()
    }

    /// Decode all fields in a single pass
    pub fn fields(&self) -> FedResult<EnvelopeFields> {
        let mut pass = self.pass();
        let logical_time = pass.read_float64(Endianness::Big)?;
        let step = pass.read_int32(Endianness::Big)?;
        let source_time = pass.read_float64(Endianness::Big)?;
        let payload = Bytes::copy_from_slice(pass.read_length_prefixed_bytes()?);
        Ok(EnvelopeFields {
            logical_time,
            step,
            source_time,
            payload,
        })
    }

    /// Framed bytes for the transport
    pub fn to_bytes(&self) -> Bytes {
        self.buffer.to_bytes()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl PartialEq for EventEnvelope {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for EventEnvelope {}
