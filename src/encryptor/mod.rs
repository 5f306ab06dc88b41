// src/encryptor/mod.rs

//! Encryption side of the pipeline.
//!
//! Core API: `encrypt_payload(&codec, output, handle, header)?` drives a codec into
//! ciphertext. [`CipherWriter`] is the CBC layer; `write_*` helpers emit the framed header.

pub(crate) mod encrypt;
pub mod stream;
pub(crate) mod write;

pub use encrypt::encrypt_payload;
pub use stream::CipherWriter;
pub use write::{write_algorithm_id, write_header, write_iterations, write_magic, write_octets};
