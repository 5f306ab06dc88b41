//! # Facade
//!
//! The two calls most users need. Each builds a default [`StreamSession`] for the
//! given seed and algorithm and runs one file operation; nothing is kept between calls.
//!
//! # Example
//!
//! ```no_run
//! use pbecrypt_rs::aliases::PasswordString;
//! use pbecrypt_rs::codec::StringListCodec;
//! use pbecrypt_rs::{decrypt_file, encrypt_file};
//!
//! let password = PasswordString::new("s3cr3t".to_string());
//! let names: StringListCodec = ["alpha", "beta"].into_iter().collect();
//! encrypt_file(42, &names, "PBEWithMD5AndDES", "names.bin", &password)?;
//!
//! let mut restored = StringListCodec::default();
//! decrypt_file(42, &mut restored, "PBEWithMD5AndDES", "names.bin", &password)?;
//! assert_eq!(restored, names);
//! # Ok::<(), pbecrypt_rs::PbeError>(())
//! ```

use crate::aliases::PasswordString;
use crate::codec::Codec;
use crate::error::Result;
use crate::session::StreamSession;
use std::path::Path;

/// Encrypt `codec`'s state to `path` under (seed, algorithm, password).
///
/// See [`StreamSession::perform_encrypting`] for the error contract.
pub fn encrypt_file<C, P>(
    seed: u64,
    codec: &C,
    algorithm: &str,
    path: P,
    password: &PasswordString,
) -> Result<()>
where
    C: Codec + ?Sized,
    P: AsRef<Path>,
{
    StreamSession::new(seed, algorithm)?.perform_encrypting(codec, path, password)
}

/// Rebuild `codec`'s state from `path` under (seed, algorithm, password).
///
/// See [`StreamSession::perform_decrypting`] for the error contract.
pub fn decrypt_file<C, P>(
    seed: u64,
    codec: &mut C,
    algorithm: &str,
    path: P,
    password: &PasswordString,
) -> Result<()>
where
    C: Codec + ?Sized,
    P: AsRef<Path>,
{
    StreamSession::new(seed, algorithm)?.perform_decrypting(codec, path, password)
}

/// Stateless access point for call sites that prefer a value over free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cryptology;

/// The one [`Cryptology`] value; it carries no state, so sharing it is free.
pub const CRYPTOLOGY: Cryptology = Cryptology;

impl Cryptology {
    /// Same as [`encrypt_file`].
    pub fn encrypt<C, P>(
        &self,
        seed: u64,
        codec: &C,
        algorithm: &str,
        path: P,
        password: &PasswordString,
    ) -> Result<()>
    where
        C: Codec + ?Sized,
        P: AsRef<Path>,
    {
        encrypt_file(seed, codec, algorithm, path, password)
    }

    /// Same as [`decrypt_file`].
    pub fn decrypt<C, P>(
        &self,
        seed: u64,
        codec: &mut C,
        algorithm: &str,
        path: P,
        password: &PasswordString,
    ) -> Result<()>
    where
        C: Codec + ?Sized,
        P: AsRef<Path>,
    {
        decrypt_file(seed, codec, algorithm, path, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{VersionCodec, VersionTuple};
    use crate::error::PbeError;
    use tempfile::TempDir;

    #[test]
    fn unit_value_and_free_functions_agree() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        let password = PasswordString::new("s3cr3t".to_string());
        let codec = VersionCodec::new(VersionTuple::new(9, 8, 7, 6));

        encrypt_file(3, &codec, "PBEWithSHA1AndDES", &a, &password).unwrap();
        CRYPTOLOGY
            .encrypt(3, &codec, "PBEWithSHA1AndDES", &b, &password)
            .unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());

        let mut decoded = VersionCodec::default();
        Cryptology
            .decrypt(3, &mut decoded, "PBEWithSHA1AndDES", &a, &password)
            .unwrap();
        assert_eq!(decoded, codec);
    }

    #[test]
    fn unknown_algorithm_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.bin");
        let password = PasswordString::new("s3cr3t".to_string());

        let err = encrypt_file(1, &VersionCodec::default(), "AES/GCM", &path, &password).unwrap_err();
        assert!(matches!(err, PbeError::UnsupportedAlgorithm(_)));
        assert!(!path.exists());
    }
}
