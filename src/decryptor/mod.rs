// src/decryptor/mod.rs

//! Decryption side of the pipeline.
//!
//! Core API: `decrypt_payload(&mut codec, input, handle)?` rebuilds codec state from
//! ciphertext. [`CipherReader`] is the CBC layer; `read_*` helpers parse the framed header.

pub(crate) mod decrypt;
pub(crate) mod read;
pub mod stream;

pub use decrypt::decrypt_payload;
pub use read::{read_algorithm_id, read_exact_span, read_format_version, read_iterations};
pub use stream::CipherReader;
