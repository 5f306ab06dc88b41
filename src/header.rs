//! # Framed Header
//!
//! Optional plaintext header written in front of the ciphertext when a session uses
//! [`FileFormat::Framed`](crate::FileFormat::Framed). Raw files carry no header at all.
//!
//! # Layout
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 3    | magic `"PBE"`                           |
//! | 3      | 1    | format version (`1`)                    |
//! | 4      | 1    | algorithm identifier length `n`         |
//! | 5      | n    | algorithm identifier (ASCII)            |
//! | 5 + n  | 4    | iteration count, big-endian             |
//!
//! The seed and password are never stored, so a header alone is not enough to
//! decrypt a file.

use crate::consts::FORMAT_VERSION;
use crate::decryptor::read::{read_algorithm_id, read_format_version, read_iterations};
use crate::error::{PbeError, Result};
use crate::Algorithm;
use std::io::Read;

/// Parsed framed-file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub version: u8,
    pub algorithm: Algorithm,
    pub iterations: u32,
}

impl FileHeader {
    /// Header for the current format version.
    #[must_use]
    pub const fn new(algorithm: Algorithm, iterations: u32) -> Self {
        Self {
            version: FORMAT_VERSION,
            algorithm,
            iterations,
        }
    }

    /// Number of bytes this header occupies on disk.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        3 + 1 + 1 + self.algorithm.identifier().len() + 4
    }

    /// Check the header against what the session is configured for.
    ///
    /// # Errors
    ///
    /// - [`PbeError::UnsupportedAlgorithm`] - the file names a different algorithm
    /// - [`PbeError::InvalidCipherParameters`] - the file uses a different iteration count
    pub fn ensure_matches(&self, algorithm: Algorithm, iterations: u32) -> Result<()> {
        if self.algorithm != algorithm {
            return Err(PbeError::UnsupportedAlgorithm(format!(
                "file was written with {}, session expects {algorithm}",
                self.algorithm
            )));
        }
        if self.iterations != iterations {
            return Err(PbeError::InvalidCipherParameters(format!(
                "file was written with {} iterations, session expects {iterations}",
                self.iterations
            )));
        }
        Ok(())
    }
}

/// Read and validate a framed header without decrypting anything.
///
/// Leaves `reader` positioned at the first ciphertext byte. Thread-safe and pure, so
/// it is suitable for inspecting many files in parallel.
///
/// # Errors
///
/// - [`PbeError::Decode`] - bad magic, unknown format version, or truncated header
/// - [`PbeError::UnsupportedAlgorithm`] - identifier not in the registry
/// - [`PbeError::InvalidCipherParameters`] - iteration count out of range
///
/// # Example
///
/// ```
/// use pbecrypt_rs::{read_header, Algorithm};
/// use std::io::Cursor;
///
/// let mut bytes = b"PBE\x01\x10PBEWithMD5AndDES".to_vec();
/// bytes.extend_from_slice(&5u32.to_be_bytes());
///
/// let header = read_header(Cursor::new(bytes))?;
/// assert_eq!(header.algorithm, Algorithm::PbeWithMd5AndDes);
/// assert_eq!(header.iterations, 5);
/// # Ok::<(), pbecrypt_rs::PbeError>(())
/// ```
pub fn read_header<R: Read>(mut reader: R) -> Result<FileHeader> {
    let version = read_format_version(&mut reader)?;
    let algorithm = read_algorithm_id(&mut reader)?;
    let iterations = read_iterations(&mut reader)?;

    Ok(FileHeader {
        version,
        algorithm,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryptor::write::write_header;

    #[test]
    fn write_then_read_every_algorithm() {
        for alg in Algorithm::ALL {
            let header = FileHeader::new(alg, 1_000);
            let mut bytes = Vec::new();
            write_header(&mut bytes, &header).unwrap();
            bytes.extend_from_slice(b"ciphertext follows");

            let mut cursor = bytes.as_slice();
            assert_eq!(read_header(&mut cursor).unwrap(), header);
            assert_eq!(cursor, b"ciphertext follows");
        }
    }

    #[test]
    fn mismatch_is_reported() {
        let header = FileHeader::new(Algorithm::PbeWithMd5AndDes, 5);
        assert!(header.ensure_matches(Algorithm::PbeWithMd5AndDes, 5).is_ok());
        assert!(matches!(
            header.ensure_matches(Algorithm::PbeWithSha1AndDes, 5),
            Err(PbeError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            header.ensure_matches(Algorithm::PbeWithMd5AndDes, 6),
            Err(PbeError::InvalidCipherParameters(_))
        ));
    }

    #[test]
    fn truncated_header_is_decode_error() {
        let err = read_header(&b"PBE\x01\x10PBEWith"[..]).unwrap_err();
        assert!(matches!(err, PbeError::Decode(_)));
    }
}
