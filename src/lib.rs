// src/lib.rs

//! Seeded password-based file encryption driven by pluggable binary codecs.
//!
//! A caller-owned [`Codec`] writes its state through a [`DataWriter`]; the library
//! derives a cipher from (seed, password, algorithm), encrypts the stream and stores
//! it in a file. Decryption regenerates the same salt from the same seed, so nothing
//! but ciphertext (and, with [`FileFormat::Framed`], a small header) ever hits disk.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod codec;
pub mod consts;
pub mod convert;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod facade;
pub mod header;
pub mod session;
pub mod utils;

// High-level API: the two facade calls plus the codec contract
pub use codec::{Codec, DataReader, DataWriter};
pub use error::{ErrorStage, PbeError, Result};
pub use facade::{decrypt_file, encrypt_file, Cryptology, CRYPTOLOGY};
pub use session::{FileFormat, SessionOptions, StreamSession};

// Bundled codecs
pub use codec::{RawPayload, StringListCodec, VersionCodec, VersionTuple};

// Key derivation is public at the root for callers that drive their own streams
pub use builders::KeyDerivation;
pub use crypto::algorithm::Algorithm;
pub use crypto::cipher::{derive_cipher, CipherHandle, Direction};
pub use crypto::kdf::{derive_pbkdf1_key, derive_pbkdf2_key};
pub use decryptor::{decrypt_payload, CipherReader};
pub use encryptor::{encrypt_payload, CipherWriter};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};

pub use convert::{reencrypt_file, Credentials};
pub use header::{read_header, FileHeader};
