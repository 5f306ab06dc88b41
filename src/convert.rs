//! src/convert.rs
//! Re-encryption between credential sets
//!
//! Moves an encrypted file to a new seed, password, algorithm, iteration count or
//! file format without knowing anything about the codec that wrote it.

use crate::aliases::PasswordString;
use crate::codec::RawPayload;
use crate::crypto::algorithm::Algorithm;
use crate::error::Result;
use crate::session::{SessionOptions, StreamSession};
use std::fmt;
use std::path::Path;

/// Everything needed to open one side of a re-encryption.
pub struct Credentials {
    seed: u64,
    algorithm: Algorithm,
    password: PasswordString,
    options: SessionOptions,
}

impl Credentials {
    /// Credentials with default [`SessionOptions`].
    #[must_use]
    pub fn new(seed: u64, algorithm: Algorithm, password: PasswordString) -> Self {
        Self {
            seed,
            algorithm,
            password,
            options: SessionOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn session(&self) -> StreamSession {
        StreamSession::for_algorithm(self.seed, self.algorithm, self.options)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("seed", &self.seed)
            .field("algorithm", &self.algorithm)
            .field("password", &"[REDACTED]")
            .field("options", &self.options)
            .finish()
    }
}

/// Decrypt `src` with `from`, then encrypt the same plaintext to `dst` with `to`.
///
/// The plaintext is held in memory between the two steps, and `dst` is written only
/// after `src` has fully decrypted with valid padding. With atomic writes (the
/// default) `src` and `dst` may be the same path.
///
/// Returns the plaintext length.
///
/// # Errors
///
/// Any error of [`StreamSession::perform_decrypting`] for `src`, then of
/// [`StreamSession::perform_encrypting`] for `dst`.
pub fn reencrypt_file<S, D>(src: S, dst: D, from: &Credentials, to: &Credentials) -> Result<u64>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let mut payload = RawPayload::default();
    from.session()
        .perform_decrypting(&mut payload, src.as_ref(), &from.password)?;

    to.session()
        .perform_encrypting(&payload, dst.as_ref(), &to.password)?;

    tracing::debug!(
        from = %from.algorithm,
        to = %to.algorithm,
        plaintext_len = payload.len(),
        "file re-encrypted"
    );
    Ok(payload.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{StringListCodec, VersionCodec, VersionTuple};
    use crate::error::PbeError;
    use crate::session::FileFormat;
    use tempfile::TempDir;

    fn creds(seed: u64, algorithm: Algorithm, password: &str) -> Credentials {
        Credentials::new(seed, algorithm, PasswordString::new(password.to_string()))
    }

    #[test]
    fn moves_between_algorithms_and_formats() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("old.bin");
        let dst = dir.path().join("new.bin");

        let from = creds(42, Algorithm::PbeWithMd5AndDes, "s3cr3t");
        let to = creds(99, Algorithm::PbeWithHmacSha512AndAes256, "n3w-pässword").with_options(
            SessionOptions::new()
                .with_iterations(1_000)
                .with_format(FileFormat::Framed),
        );

        let codec: StringListCodec = ["alpha", "beta"].into_iter().collect();
        from.session()
            .perform_encrypting(&codec, &src, &from.password)
            .unwrap();

        assert_eq!(reencrypt_file(&src, &dst, &from, &to).unwrap(), 14);

        let mut decoded = StringListCodec::default();
        to.session()
            .perform_decrypting(&mut decoded, &dst, &to.password)
            .unwrap();
        assert_eq!(decoded, codec);
    }

    #[test]
    fn in_place_rotation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("v.bin");
        let from = creds(7, Algorithm::PbeWithMd5AndDes, "s3cr3t");
        let to = creds(8, Algorithm::PbeWithHmacSha256AndAes128, "rotated");

        let codec = VersionCodec::new(VersionTuple::new(1, 2, 3, 4));
        from.session()
            .perform_encrypting(&codec, &path, &from.password)
            .unwrap();
        reencrypt_file(&path, &path, &from, &to).unwrap();

        let mut decoded = VersionCodec::default();
        to.session()
            .perform_decrypting(&mut decoded, &path, &to.password)
            .unwrap();
        assert_eq!(decoded, codec);
    }

    #[test]
    fn missing_source_leaves_destination_alone() {
        let dir = TempDir::new().unwrap();
        let dst = dir.path().join("dst.bin");
        std::fs::write(&dst, b"keep me").unwrap();

        let c = creds(1, Algorithm::PbeWithMd5AndDes, "s3cr3t");
        let err = reencrypt_file(dir.path().join("absent.bin"), &dst, &c, &c).unwrap_err();
        assert!(matches!(err, PbeError::FileNotFound(_)));
        assert_eq!(std::fs::read(&dst).unwrap(), b"keep me");
    }

    #[test]
    fn debug_hides_password() {
        let c = creds(1, Algorithm::PbeWithMd5AndDes, "hunter2");
        assert!(!format!("{c:?}").contains("hunter2"));
    }
}
