//! Sequential byte buffer with a read cursor
//!
//! Writes always append in big-endian. Reads take an explicit endianness
//! so buffers produced by other implementations can still be parsed.
//! A failed read leaves the cursor where it was.

use bytes::{BufMut, Bytes, BytesMut};
use fedwire_core::{FedError, FedResult};

/// Length prefix size in bytes
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Byte order for multi-byte reads
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endianness {
    /// Most significant byte first (the write order)
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

/// Read pass over a byte slice
///
/// The position only moves forward. Start a new reader to re-parse.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf, position: 0 }
    }

    fn at(buf: &'a [u8], position: usize) -> Self {
        ByteReader { buf, position }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, n: usize) -> FedResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(FedError::BufferUnderrun {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.position..self.position + n];
        self.position += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> FedResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Advance past `n` bytes without decoding them
    pub fn skip(&mut self, n: usize) -> FedResult<()> {
        self.take(n).map(|_| ())
    }

    pub fn read_byte(&mut self) -> FedResult<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_bytes(&mut self, n: usize) -> FedResult<&'a [u8]> {
        self.take(n)
    }

    pub fn read_int16(&mut self, endianness: Endianness) -> FedResult<i16> {
        let b = self.take_array::<2>()?;
        Ok(match endianness {
            Endianness::Big => i16::from_be_bytes(b),
            Endianness::Little => i16::from_le_bytes(b),
        })
    }

    pub fn read_int32(&mut self, endianness: Endianness) -> FedResult<i32> {
        let b = self.take_array::<4>()?;
        Ok(match endianness {
            Endianness::Big => i32::from_be_bytes(b),
            Endianness::Little => i32::from_le_bytes(b),
        })
    }

    pub fn read_int64(&mut self, endianness: Endianness) -> FedResult<i64> {
        let b = self.take_array::<8>()?;
        Ok(match endianness {
            Endianness::Big => i64::from_be_bytes(b),
            Endianness::Little => i64::from_le_bytes(b),
        })
    }

    pub fn read_float32(&mut self, endianness: Endianness) -> FedResult<f32> {
        let bits = self.read_int32(endianness)?;
        Ok(f32::from_bits(bits as u32))
    }

    pub fn read_float64(&mut self, endianness: Endianness) -> FedResult<f64> {
        let bits = self.read_int64(endianness)?;
        Ok(f64::from_bits(bits as u64))
    }

    /// Read a big-endian i32 length `n`, then exactly `n` bytes
    pub fn read_length_prefixed_bytes(&mut self) -> FedResult<&'a [u8]> {
        let start = self.position;
        let length = self.read_int32(Endianness::Big)?;
        if length < 0 {
            let remaining = self.remaining();
            self.position = start;
            return Err(FedError::MalformedLength {
                length: length as i64,
                remaining,
            });
        }
        self.take(length as usize).map_err(|e| {
            self.position = start;
            e
        })
    }
}

/// Growable append-only byte sequence with a sequential read cursor
#[derive(Clone, Debug, Default)]
pub struct ByteCursorBuffer {
    data: BytesMut,
    position: usize,
}

impl ByteCursorBuffer {
    /// Create an empty write target
    pub fn new() -> Self {
        ByteCursorBuffer::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ByteCursorBuffer {
            data: BytesMut::with_capacity(capacity),
            position: 0,
        }
    }

    /// Create a read target over received bytes, cursor at 0
    pub fn from_bytes(raw: impl AsRef<[u8]>) -> Self {
        ByteCursorBuffer {
            data: BytesMut::from(raw.as_ref()),
            position: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    // Writes

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.data.put_slice(bytes);
    }

    pub fn append_byte(&mut self, v: u8) {
        self.data.put_u8(v);
    }

    pub fn append_int16(&mut self, v: i16) {
        self.data.put_i16(v);
    }

    pub fn append_int32(&mut self, v: i32) {
        self.data.put_i32(v);
    }

    pub fn append_int64(&mut self, v: i64) {
        self.data.put_i64(v);
    }

    pub fn append_float32(&mut self, v: f32) {
        self.append_int32(v.to_bits() as i32);
    }

    pub fn append_float64(&mut self, v: f64) {
        self.append_int64(v.to_bits() as i64);
    }

    /// Append an i32 length prefix followed by the bytes.
    /// Nothing is written if the length does not fit in an i32.
    pub fn append_length_prefixed_bytes(&mut self, bytes: &[u8]) -> FedResult<()> {
        let length = i32::try_from(bytes.len()).map_err(|_| FedError::MalformedLength {
            length: bytes.len() as i64,
            remaining: bytes.len(),
        })?;
        self.append_int32(length);
        self.append_bytes(bytes);
        Ok(())
    }

    // Reads

    fn read_with<T>(&mut self, f: impl FnOnce(&mut ByteReader<'_>) -> FedResult<T>) -> FedResult<T> {
        let mut reader = ByteReader::at(&self.data, self.position);
        let value = f(&mut reader)?;
        self.position = reader.position();
        Ok(value)
    }

    pub fn read_byte(&mut self) -> FedResult<u8> {
        self.read_with(|r| r.read_byte())
    }

    pub fn read_bytes(&mut self, n: usize) -> FedResult<Vec<u8>> {
        self.read_with(|r| r.read_bytes(n).map(<[u8]>::to_vec))
    }

    pub fn read_int16(&mut self, endianness: Endianness) -> FedResult<i16> {
        self.read_with(|r| r.read_int16(endianness))
    }

    pub fn read_int32(&mut self, endianness: Endianness) -> FedResult<i32> {
        self.read_with(|r| r.read_int32(endianness))
    }

    pub fn read_int64(&mut self, endianness: Endianness) -> FedResult<i64> {
        self.read_with(|r| r.read_int64(endianness))
    }

    pub fn read_float32(&mut self, endianness: Endianness) -> FedResult<f32> {
        self.read_with(|r| r.read_float32(endianness))
    }

    pub fn read_float64(&mut self, endianness: Endianness) -> FedResult<f64> {
        self.read_with(|r| r.read_float64(endianness))
    }

    pub fn read_length_prefixed_bytes(&mut self) -> FedResult<Vec<u8>> {
        self.read_with(|r| r.read_length_prefixed_bytes().map(<[u8]>::to_vec))
    }

    /// Fresh read pass from offset 0, independent of the buffer's own cursor
    pub fn reader(&self) -> ByteReader<'_> {
        ByteReader::new(&self.data)
    }

    // Lifecycle

    /// Move the read cursor back to the start. Content is untouched.
    pub fn reset_cursor(&mut self) {
        self.position = 0;
    }

    /// Drop all content and return to the just-constructed state
    pub fn clear(&mut self) {
        self.data.clear();
        self.position = 0;
    }

    /// Immutable snapshot of the current content
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.data)
    }
}
