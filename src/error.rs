//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T>`](Result) so callers can tell which stage failed:
//! key derivation, file I/O, or the payload codec.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for PBE operations.
pub type Result<T> = std::result::Result<T, PbeError>;

/// The error type for all encrypt/decrypt operations.
#[derive(Error, Debug)]
pub enum PbeError {
    /// The algorithm identifier does not name a supported transform.
    ///
    /// Also returned when a framed file was written with a different algorithm
    /// than the session is configured for.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The password cannot be turned into key material.
    ///
    /// - Empty password
    /// - Characters the transform cannot encode (PBES1 accepts printable ASCII only)
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Derived parameters are unusable.
    ///
    /// - Iteration count out of range
    /// - Derived key or IV of the wrong length for the cipher
    /// - Cipher handle used in the wrong direction
    #[error("Invalid cipher parameters: {0}")]
    InvalidCipherParameters(String),

    /// The target path is empty, missing, or its directory does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error occurred while reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The codec could not serialize its state.
    #[error("Encode error: {0}")]
    Encode(String),

    /// The plaintext stream ended early or carried a malformed value.
    ///
    /// A wrong password or seed usually surfaces here, as bad padding or garbage fields.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// The pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Derivation,
    Io,
    Codec,
}

impl PbeError {
    /// Which stage produced this error.
    #[must_use]
    pub const fn stage(&self) -> ErrorStage {
        match self {
            Self::UnsupportedAlgorithm(_)
            | Self::InvalidKeyMaterial(_)
            | Self::InvalidCipherParameters(_) => ErrorStage::Derivation,
            Self::FileNotFound(_) | Self::Io(_) => ErrorStage::Io,
            Self::Encode(_) | Self::Decode(_) => ErrorStage::Codec,
        }
    }

    /// Only raw I/O failures may be transient; everything else is misconfiguration
    /// or corrupt data and retrying cannot help.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Classify an I/O error raised inside the plaintext stream.
    ///
    /// Running out of bytes or a padding failure from the cipher layer means the
    /// payload is malformed (`Decode`); anything else is a genuine I/O failure.
    pub(crate) fn from_stream(err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::UnexpectedEof | ErrorKind::InvalidData => Self::Decode(err.to_string()),
            _ => Self::Io(err),
        }
    }
}
