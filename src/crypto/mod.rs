// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`rng`] - seeded salt generator
//! - [`kdf`] - PBKDF1 / PBKDF2 password-to-key transforms
//! - [`algorithm`] - registry of supported PBE identifiers
//! - `block` - DES / AES block engines used by the CBC stream layers
//! - [`cipher`] - the derived [`CipherHandle`](cipher::CipherHandle)

pub mod algorithm;
pub(crate) mod block;
pub mod cipher;
pub mod kdf;
pub mod rng;
