//! # Codec Contract
//!
//! A codec is any caller-owned value that can write its state to, and rebuild it from,
//! the plaintext side of an encrypted stream. The session owns the file and the cipher;
//! the codec only ever sees a [`DataWriter`] or [`DataReader`].
//!
//! - [`data`] - big-endian structured primitives (`DataOutput`/`DataInput` wire format)
//! - [`string_list`] - ordered list of strings
//! - [`version`] - fixed 4-byte version tuple
//! - [`raw`] - opaque byte payload, used by re-encryption
//!
//! # Footgun
//!
//! `decode` must read exactly the fields `encode` wrote, in the same order and with
//! the same widths. Nothing on the wire describes the fields, so a mismatched order is
//! a programming error that usually cannot be detected at runtime: it yields garbage
//! values or a [`PbeError::Decode`] somewhere downstream.

pub mod data;
pub mod raw;
pub mod string_list;
pub mod version;

pub use data::{DataReader, DataWriter};
pub use raw::RawPayload;
pub use string_list::StringListCodec;
pub use version::{VersionCodec, VersionTuple};

use crate::error::PbeError;

/// Ordered binary encode/decode of a value's state.
///
/// Implementations must satisfy the round-trip law: `encode` followed by `decode`
/// into a fresh instance reproduces equivalent observable state.
///
/// # Example
///
/// ```
/// use pbecrypt_rs::{Codec, DataReader, DataWriter, PbeError};
///
/// #[derive(Default)]
/// struct Score {
///     player: String,
///     points: u32,
/// }
///
/// impl Codec for Score {
///     fn encode(&self, writer: &mut DataWriter<'_>) -> Result<(), PbeError> {
///         writer.write_utf(&self.player)?;
///         writer.write_u32(self.points)
///     }
///
///     fn decode(&mut self, reader: &mut DataReader<'_>) -> Result<(), PbeError> {
///         self.player = reader.read_utf()?;
///         self.points = reader.read_u32()?;
///         Ok(())
///     }
/// }
/// ```
pub trait Codec {
    /// Serialize state in a fixed order.
    ///
    /// # Errors
    ///
    /// [`PbeError::Encode`] when a value cannot be represented on the wire,
    /// [`PbeError::Io`] when the underlying stream fails.
    fn encode(&self, writer: &mut DataWriter<'_>) -> Result<(), PbeError>;

    /// Replace state with the fields read from `reader`.
    ///
    /// # Errors
    ///
    /// [`PbeError::Decode`] on premature end of stream or a malformed value.
    fn decode(&mut self, reader: &mut DataReader<'_>) -> Result<(), PbeError>;
}

impl<C: Codec + ?Sized> Codec for &mut C {
    fn encode(&self, writer: &mut DataWriter<'_>) -> Result<(), PbeError> {
        (**self).encode(writer)
    }

    fn decode(&mut self, reader: &mut DataReader<'_>) -> Result<(), PbeError> {
        (**self).decode(reader)
    }
}
