//! src/decryptor/read.rs
//! Framed header field readers
//!
//! Short reads surface as `Decode`: a header that ends early is a malformed file,
//! not an I/O failure.

use crate::consts::{FORMAT_VERSION, HEADER_MAGIC, MAX_ITERATIONS, MIN_ITERATIONS};
use crate::error::{PbeError, Result};
use crate::Algorithm;
use std::io::Read;

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
#[inline(always)]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N]>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(PbeError::from_stream)?;
    Ok(buf)
}

/// Validate the `"PBE"` magic and return the format version byte.
#[inline(always)]
pub fn read_format_version<R>(reader: &mut R) -> Result<u8>
where
    R: Read,
{
    let header = read_exact_span::<_, 4>(reader)?;
    if header[..3] != HEADER_MAGIC {
        return Err(PbeError::Decode(
            "invalid magic header (expected 'PBE')".into(),
        ));
    }
    let version = header[3];
    if version != FORMAT_VERSION {
        return Err(PbeError::Decode(format!(
            "unsupported framed format version {version}"
        )));
    }
    Ok(version)
}

/// Read the length-prefixed algorithm identifier and resolve it in the registry.
#[inline(always)]
pub fn read_algorithm_id<R>(reader: &mut R) -> Result<Algorithm>
where
    R: Read,
{
    let [len] = read_exact_span::<_, 1>(reader)?;
    let mut id = vec![0u8; usize::from(len)];
    reader.read_exact(&mut id).map_err(PbeError::from_stream)?;

    let id = String::from_utf8(id)
        .map_err(|_| PbeError::Decode("algorithm identifier is not valid UTF-8".into()))?;
    id.parse()
}

/// Read the big-endian iteration count and check it is in range.
#[inline(always)]
pub fn read_iterations<R>(reader: &mut R) -> Result<u32>
where
    R: Read,
{
    let iterations = u32::from_be_bytes(read_exact_span::<_, 4>(reader)?);
    if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&iterations) {
        return Err(PbeError::InvalidCipherParameters(format!(
            "iteration count {iterations} outside {MIN_ITERATIONS}..={MAX_ITERATIONS}"
        )));
    }
    Ok(iterations)
}
