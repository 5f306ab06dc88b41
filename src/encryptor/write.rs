//! src/encryptor/write.rs
//! Plaintext header writers for the framed file format

use crate::consts::{FORMAT_VERSION, HEADER_MAGIC, MAX_ITERATIONS, MIN_ITERATIONS};
use crate::error::{PbeError, Result};
use crate::header::FileHeader;
use crate::Algorithm;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    writer.write_all(data).map_err(PbeError::Io)
}

#[inline]
pub fn write_magic<W: Write>(writer: &mut W, version: u8) -> Result<()> {
    if version != FORMAT_VERSION {
        return Err(PbeError::Encode(format!(
            "cannot write framed format version {version}"
        )));
    }
    write_octets(writer, &HEADER_MAGIC)?;
    write_octets(writer, &[version])
}

#[inline]
pub fn write_algorithm_id<W: Write>(writer: &mut W, algorithm: Algorithm) -> Result<()> {
    let id = algorithm.identifier().as_bytes();
    let len = u8::try_from(id.len())
        .map_err(|_| PbeError::Encode(format!("algorithm identifier too long: {algorithm}")))?;
    write_octets(writer, &[len])?;
    write_octets(writer, id)
}

#[inline]
pub fn write_iterations<W: Write>(writer: &mut W, iterations: u32) -> Result<()> {
    if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&iterations) {
        return Err(PbeError::InvalidCipherParameters(format!(
            "iteration count {iterations} outside {MIN_ITERATIONS}..={MAX_ITERATIONS}"
        )));
    }
    write_octets(writer, &iterations.to_be_bytes())
}

/// Write the complete framed header: magic, version, algorithm id, iterations.
#[inline]
pub fn write_header<W: Write>(writer: &mut W, header: &FileHeader) -> Result<()> {
    write_magic(writer, header.version)?;
    write_algorithm_id(writer, header.algorithm)?;
    write_iterations(writer, header.iterations)
}
