//! Little-endian wire primitives
//!
//! Every record codec is composed from these. Multi-byte integers are always
//! written little-endian, one field at a time, so no native struct padding
//! ever reaches the wire.
//!
//! Strings are a `u16` byte length followed by the raw bytes:
//!
//! ```text
//! +----------------+------------------+
//! | Length (u16 LE)| Bytes (Length)   |
//! +----------------+------------------+
//! ```
//!
//! No terminator is stored; the caller's [`Terminator`] only tells the
//! writer where the logical string ends.

use crate::error::{CodecError, CodecResult};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use respak_core::{Terminator, MAX_STRING_LEN};
use std::io::Read;

/// Append-only little-endian payload buffer
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        WireWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a `u8`
    pub fn put_u8(&mut self, value: u8) -> CodecResult<()> {
        self.buf.write_u8(value)?;
        Ok(())
    }

    /// Write an `i8`
    pub fn put_i8(&mut self, value: i8) -> CodecResult<()> {
        self.buf.write_i8(value)?;
        Ok(())
    }

    /// Write a `u16` LE
    pub fn put_u16(&mut self, value: u16) -> CodecResult<()> {
        self.buf.write_u16::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write a `u32` LE
    pub fn put_u32(&mut self, value: u32) -> CodecResult<()> {
        self.buf.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write raw bytes
    pub fn put_bytes(&mut self, bytes: &[u8]) -> CodecResult<()> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Write a `u16` element count
    pub fn put_count(&mut self, what: &'static str, count: usize) -> CodecResult<()> {
        let count = u16::try_from(count).map_err(|_| CodecError::TooMany { what, count })?;
        self.put_u16(count)
    }

    /// Write a length-prefixed string
    ///
    /// `bytes` is scanned up to `terminator` (or taken whole if it has none);
    /// only the scanned bytes are written.
    pub fn put_string(&mut self, bytes: &[u8], terminator: Terminator) -> CodecResult<()> {
        let len = terminator.scan(bytes);
        if len > MAX_STRING_LEN {
            return Err(CodecError::TooLong {
                len,
                max: MAX_STRING_LEN,
            });
        }
        self.put_u16(len as u16)?;
        self.put_bytes(&bytes[..len])
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the written bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer, returning the payload
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Little-endian reader over any byte stream
///
/// A short read surfaces as [`CodecError::Truncated`].
pub struct WireReader<'a> {
    inner: &'a mut dyn Read,
}

impl<'a> WireReader<'a> {
    /// Wrap a stream
    pub fn new(inner: &'a mut dyn Read) -> Self {
        WireReader { inner }
    }

    /// Read a `u8`
    pub fn get_u8(&mut self) -> CodecResult<u8> {
        self.inner
            .read_u8()
            .map_err(|e| CodecError::from_read(e, 1))
    }

    /// Read an `i8`
    pub fn get_i8(&mut self) -> CodecResult<i8> {
        self.inner
            .read_i8()
            .map_err(|e| CodecError::from_read(e, 1))
    }

    /// Read a `u16` LE
    pub fn get_u16(&mut self) -> CodecResult<u16> {
        self.inner
            .read_u16::<LittleEndian>()
            .map_err(|e| CodecError::from_read(e, 2))
    }

    /// Read a `u32` LE
    pub fn get_u32(&mut self) -> CodecResult<u32> {
        self.inner
            .read_u32::<LittleEndian>()
            .map_err(|e| CodecError::from_read(e, 4))
    }

    /// Fill a fixed-size array
    pub fn get_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut out = [0u8; N];
        self.inner
            .read_exact(&mut out)
            .map_err(|e| CodecError::from_read(e, N))?;
        Ok(out)
    }

    /// Read exactly `len` bytes
    pub fn get_bytes(&mut self, len: usize) -> CodecResult<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.inner
            .read_exact(&mut out)
            .map_err(|e| CodecError::from_read(e, len))?;
        Ok(out)
    }

    /// Read a `u16` element count
    pub fn get_count(&mut self) -> CodecResult<usize> {
        Ok(self.get_u16()? as usize)
    }

    /// Read a length-prefixed string's logical bytes
    pub fn get_string(&mut self) -> CodecResult<Vec<u8>> {
        let len = self.get_u16()? as usize;
        self.get_bytes(len)
    }

    /// Whether the stream is exhausted
    ///
    /// Consumes one byte if it is not.
    pub fn at_end(&mut self) -> CodecResult<bool> {
        let mut probe = [0u8; 1];
        loop {
            match self.inner.read(&mut probe) {
                Ok(0) => return Ok(true),
                Ok(_) => return Ok(false),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CodecError::Io(e)),
            }
        }
    }
}

/// A value with a fixed little-endian wire layout
pub trait WireRecord: Sized {
    /// Append this value to the payload
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()>;

    /// Read one value from the stream
    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self>;
}

impl WireRecord for u8 {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u8(*self)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        r.get_u8()
    }
}

impl WireRecord for u16 {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u16(*self)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        r.get_u16()
    }
}

impl WireRecord for u32 {
    fn encode(&self, w: &mut WireWriter) -> CodecResult<()> {
        w.put_u32(*self)
    }

    fn decode(r: &mut WireReader<'_>) -> CodecResult<Self> {
        r.get_u32()
    }
}

/// Write a `u16` count followed by each record
pub fn put_records<T: WireRecord>(
    w: &mut WireWriter,
    what: &'static str,
    records: &[T],
) -> CodecResult<()> {
    w.put_count(what, records.len())?;
    for record in records {
        record.encode(w)?;
    }
    Ok(())
}

/// Read a `u16` count followed by that many records
///
/// The allocation is sized from the in-stream count.
pub fn get_records<T: WireRecord>(r: &mut WireReader<'_>) -> CodecResult<Vec<T>> {
    let count = r.get_count()?;
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(T::decode(r)?);
    }
    Ok(records)
}
