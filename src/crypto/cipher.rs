//! src/crypto/cipher.rs
//! Seeded key derivation and the single-use cipher handle it produces
//!
//! The salt is never written anywhere: both sides regenerate it from the shared seed,
//! so the same (seed, password, algorithm, iterations) always yields the same key.

use crate::aliases::{Aes128Key16, Aes256Key32, Block16, DesKey8, Iv16, Iv8, PasswordString, Salt8};
use crate::consts::{MAX_ITERATIONS, MIN_ITERATIONS};
use crate::crypto::algorithm::{Algorithm, BlockCipherKind, Scheme};
use crate::crypto::block::BlockEngine;
use crate::crypto::kdf::{derive_pbkdf1_key, derive_pbkdf2_key};
use crate::crypto::rng::SeedRng;
use crate::decryptor::stream::CipherReader;
use crate::encryptor::stream::CipherWriter;
use crate::error::{PbeError, Result};

use rand::{RngCore, SeedableRng};
use std::fmt;
use std::io::{Read, Write};

/// Which way a cipher handle transforms bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Derived symmetric key, sized for its cipher.
enum SecretKey {
    Des(DesKey8),
    Aes128(Aes128Key16),
    Aes256(Aes256Key32),
}

impl SecretKey {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Des(k) => k.expose_secret(),
            Self::Aes128(k) => k.expose_secret(),
            Self::Aes256(k) => k.expose_secret(),
        }
    }
}

/// CBC initialization vector, sized for its cipher.
enum InitVector {
    Des(Iv8),
    Aes(Iv16),
}

impl InitVector {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Des(iv) => iv.expose_secret(),
            Self::Aes(iv) => iv.expose_secret(),
        }
    }
}

/// An initialized cipher: key, IV, salt, iteration count and direction.
///
/// Created per file operation and consumed by [`into_writer`](Self::into_writer) /
/// [`into_reader`](Self::into_reader); it is never cached or shared.
pub struct CipherHandle {
    algorithm: Algorithm,
    direction: Direction,
    iterations: u32,
    salt: Salt8,
    key: SecretKey,
    iv: InitVector,
}

impl CipherHandle {
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn salt(&self) -> &[u8; 8] {
        self.salt.expose_secret()
    }

    /// Raw derived key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Exposed for determinism checks and
    /// known-answer tests.
    #[must_use]
    pub fn key_material(&self) -> &[u8] {
        self.key.as_bytes()
    }

    /// CBC initialization vector (8 bytes for DES, 16 for AES).
    #[must_use]
    pub fn iv(&self) -> &[u8] {
        self.iv.as_bytes()
    }

    fn engine(&self) -> Result<BlockEngine> {
        BlockEngine::new(self.algorithm.cipher(), self.key.as_bytes())
    }

    fn expect_direction(&self, wanted: Direction) -> Result<()> {
        if self.direction == wanted {
            Ok(())
        } else {
            Err(PbeError::InvalidCipherParameters(format!(
                "cipher handle was derived for {:?}, not {wanted:?}",
                self.direction
            )))
        }
    }

    /// Wrap `output` in an encrypting stream. The handle must be `Direction::Encrypt`.
    pub fn into_writer<W: Write>(self, output: W) -> Result<CipherWriter<W>> {
        self.expect_direction(Direction::Encrypt)?;
        let engine = self.engine()?;
        Ok(CipherWriter::new(output, engine, self.iv.as_bytes()))
    }

    /// Wrap `input` in a decrypting stream. The handle must be `Direction::Decrypt`.
    pub fn into_reader<R: Read>(self, input: R) -> Result<CipherReader<R>> {
        self.expect_direction(Direction::Decrypt)?;
        let engine = self.engine()?;
        Ok(CipherReader::new(input, engine, self.iv.as_bytes()))
    }
}

impl fmt::Debug for CipherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherHandle")
            .field("algorithm", &self.algorithm)
            .field("direction", &self.direction)
            .field("iterations", &self.iterations)
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Derive a cipher handle from (seed, direction, password, algorithm, iterations).
///
/// 1. Seed [`SeedRng`] with `seed` and draw 8 bytes of salt.
/// 2. Build key material from the password with the algorithm's KDF.
/// 3. PBES1: split the 16-byte PBKDF1 output into key and IV.
///    PBES2: draw the IV from the same generator, right after the salt.
///
/// # Errors
///
/// - [`PbeError::InvalidKeyMaterial`] - empty password, or non-ASCII for PBES1
/// - [`PbeError::InvalidCipherParameters`] - iterations outside `1..=5_000_000`
pub fn derive_cipher(
    seed: u64,
    direction: Direction,
    password: &PasswordString,
    algorithm: Algorithm,
    iterations: u32,
) -> Result<CipherHandle> {
    if password.expose_secret().is_empty() {
        return Err(PbeError::InvalidKeyMaterial("empty password".into()));
    }
    if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&iterations) {
        return Err(PbeError::InvalidCipherParameters(format!(
            "iteration count {iterations} outside {MIN_ITERATIONS}..={MAX_ITERATIONS}"
        )));
    }

    let mut rng = SeedRng::seed_from_u64(seed);
    let mut salt = Salt8::new([0u8; 8]);
    rng.fill_bytes(salt.expose_secret_mut());

    let (key, iv) = match algorithm.scheme() {
        Scheme::Pbes1(digest) => {
            let mut derived = Block16::new([0u8; 16]);
            derive_pbkdf1_key(password, &salt, iterations, digest, &mut derived)?;

            let mut key = DesKey8::new([0u8; 8]);
            let mut iv = Iv8::new([0u8; 8]);
            key.expose_secret_mut()
                .copy_from_slice(&derived.expose_secret()[..8]);
            iv.expose_secret_mut()
                .copy_from_slice(&derived.expose_secret()[8..]);
            (SecretKey::Des(key), InitVector::Des(iv))
        }
        Scheme::Pbes2(prf) => {
            let key = match algorithm.cipher() {
                BlockCipherKind::Aes128 => {
                    let mut key = Aes128Key16::new([0u8; 16]);
                    derive_pbkdf2_key(password, &salt, iterations, prf, key.expose_secret_mut())?;
                    SecretKey::Aes128(key)
                }
                BlockCipherKind::Aes256 => {
                    let mut key = Aes256Key32::new([0u8; 32]);
                    derive_pbkdf2_key(password, &salt, iterations, prf, key.expose_secret_mut())?;
                    SecretKey::Aes256(key)
                }
                BlockCipherKind::Des => {
                    return Err(PbeError::InvalidCipherParameters(format!(
                        "{algorithm} pairs PBKDF2 with DES"
                    )))
                }
            };

            let mut iv = Iv16::new([0u8; 16]);
            rng.fill_bytes(iv.expose_secret_mut());
            (key, InitVector::Aes(iv))
        }
    };

    Ok(CipherHandle {
        algorithm,
        direction,
        iterations,
        salt,
        key,
        iv,
    })
}
