//! src/codec/data.rs
//! Big-endian structured primitives over the plaintext stream
//!
//! Byte-compatible with the JVM `DataOutput` / `DataInput` encoding, including the
//! "modified UTF-8" used for strings:
//!
//! - U+0000 is written as `C0 80`, never as a raw zero byte
//! - characters above U+FFFF are written as a UTF-16 surrogate pair, each half as a
//!   3-byte sequence
//! - the encoded length is a `u16` prefix, so at most 65 535 bytes per string

use crate::consts::MAX_UTF_LEN;
use crate::error::{PbeError, Result};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io::{Read, Write};

/// Structured writer handed to [`Codec::encode`](crate::Codec::encode).
pub struct DataWriter<'a> {
    inner: &'a mut dyn Write,
    written: u64,
}

impl<'a> DataWriter<'a> {
    pub fn new(inner: &'a mut dyn Write) -> Self {
        Self { inner, written: 0 }
    }

    /// Plaintext bytes written through this writer.
    #[must_use]
    pub const fn bytes_written(&self) -> u64 {
        self.written
    }

    #[inline]
    fn count(&mut self, n: usize) -> Result<()> {
        self.written += n as u64;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.inner.write_u8(value)?;
        self.count(1)
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.inner.write_i8(value)?;
        self.count(1)
    }

    /// One byte: `1` for true, `0` for false.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.inner.write_u16::<BigEndian>(value)?;
        self.count(2)
    }

    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.inner.write_i16::<BigEndian>(value)?;
        self.count(2)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.inner.write_u32::<BigEndian>(value)?;
        self.count(4)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.inner.write_i32::<BigEndian>(value)?;
        self.count(4)
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.inner.write_u64::<BigEndian>(value)?;
        self.count(8)
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.inner.write_i64::<BigEndian>(value)?;
        self.count(8)
    }

    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.inner.write_f32::<BigEndian>(value)?;
        self.count(4)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.inner.write_f64::<BigEndian>(value)?;
        self.count(8)
    }

    /// Raw bytes, no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.count(bytes.len())
    }

    /// Length-prefixed modified UTF-8 string.
    ///
    /// # Errors
    ///
    /// [`PbeError::Encode`] when the encoded form exceeds 65 535 bytes. Nothing is
    /// written in that case.
    pub fn write_utf(&mut self, value: &str) -> Result<()> {
        let encoded = encode_modified_utf8(value);
        let len = u16::try_from(encoded.len()).map_err(|_| {
            PbeError::Encode(format!(
                "encoded string is {} bytes, limit is {MAX_UTF_LEN}",
                encoded.len()
            ))
        })?;
        self.write_u16(len)?;
        self.write_bytes(&encoded)
    }
}

impl fmt::Debug for DataWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataWriter")
            .field("bytes_written", &self.written)
            .finish_non_exhaustive()
    }
}

/// Structured reader handed to [`Codec::decode`](crate::Codec::decode).
///
/// Every short read is reported as [`PbeError::Decode`].
pub struct DataReader<'a> {
    inner: &'a mut dyn Read,
    read: u64,
}

impl<'a> DataReader<'a> {
    pub fn new(inner: &'a mut dyn Read) -> Self {
        Self { inner, read: 0 }
    }

    /// Plaintext bytes consumed through this reader.
    #[must_use]
    pub const fn bytes_read(&self) -> u64 {
        self.read
    }

    #[inline]
    fn count<T>(&mut self, n: usize, value: T) -> Result<T> {
        self.read += n as u64;
        Ok(value)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let v = self.inner.read_u8().map_err(PbeError::from_stream)?;
        self.count(1, v)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let v = self.inner.read_i8().map_err(PbeError::from_stream)?;
        self.count(1, v)
    }

    /// Any non-zero byte reads as true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let v = self
            .inner
            .read_u16::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(2, v)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let v = self
            .inner
            .read_i16::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(2, v)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let v = self
            .inner
            .read_u32::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(4, v)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let v = self
            .inner
            .read_i32::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(4, v)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let v = self
            .inner
            .read_u64::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(8, v)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let v = self
            .inner
            .read_i64::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(8, v)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let v = self
            .inner
            .read_f32::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(4, v)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let v = self
            .inner
            .read_f64::<BigEndian>()
            .map_err(PbeError::from_stream)?;
        self.count(8, v)
    }

    /// Fill `buf` completely.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf).map_err(PbeError::from_stream)?;
        self.count(buf.len(), ())
    }

    /// Length-prefixed modified UTF-8 string.
    pub fn read_utf(&mut self) -> Result<String> {
        let len = usize::from(self.read_u16()?);
        let mut encoded = vec![0u8; len];
        self.read_bytes(&mut encoded)?;
        decode_modified_utf8(&encoded)
    }

    /// Drain the rest of the plaintext into `out`; returns bytes appended.
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let n = self.inner.read_to_end(out).map_err(PbeError::from_stream)?;
        self.count(n, n)
    }
}

impl fmt::Debug for DataReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataReader")
            .field("bytes_read", &self.read)
            .finish_non_exhaustive()
    }
}

fn encode_modified_utf8(value: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len());
    let mut units = [0u16; 2];

    for ch in value.chars() {
        for &unit in ch.encode_utf16(&mut units).iter() {
            match unit {
                0x0001..=0x007F => out.push(unit as u8),
                0x0000 | 0x0080..=0x07FF => {
                    out.push(0xC0 | (unit >> 6) as u8);
                    out.push(0x80 | (unit & 0x3F) as u8);
                }
                _ => {
                    out.push(0xE0 | (unit >> 12) as u8);
                    out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                    out.push(0x80 | (unit & 0x3F) as u8);
                }
            }
        }
    }
    out
}

fn decode_modified_utf8(bytes: &[u8]) -> Result<String> {
    let malformed = |at: usize| PbeError::Decode(format!("malformed modified UTF-8 at byte {at}"));
    let continuation = |at: usize| -> Result<u16> {
        match bytes.get(at) {
            Some(&b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
            _ => Err(malformed(at)),
        }
    };

    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b >> 4 {
            0x0..=0x7 => {
                units.push(u16::from(b));
                i += 1;
            }
            0xC | 0xD => {
                units.push((u16::from(b & 0x1F) << 6) | continuation(i + 1)?);
                i += 2;
            }
            0xE => {
                units.push(
                    (u16::from(b & 0x0F) << 12) | (continuation(i + 1)? << 6) | continuation(i + 2)?,
                );
                i += 3;
            }
            _ => return Err(malformed(i)),
        }
    }

    String::from_utf16(&units)
        .map_err(|_| PbeError::Decode("unpaired surrogate in string".into()))
}
