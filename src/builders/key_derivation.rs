//! src/builders/key_derivation.rs
//! Seeded cipher-handle builder

use crate::aliases::PasswordString;
use crate::consts::DEFAULT_ITERATIONS;
use crate::crypto::algorithm::Algorithm;
use crate::crypto::cipher::{derive_cipher, CipherHandle, Direction};
use crate::error::Result;

/// Key derivation builder
///
/// Default: [`Algorithm::PbeWithMd5AndDes`] with [`DEFAULT_ITERATIONS`] (5) iterations.
/// The salt is not configurable: it is always regenerated from the seed passed to
/// [`derive`](Self::derive).
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`) and `Copy`. All operations are pure.
///
/// # Example
///
/// ```
/// use pbecrypt_rs::aliases::PasswordString;
/// use pbecrypt_rs::{Algorithm, Direction, KeyDerivation};
///
/// let password = PasswordString::new("s3cr3t".to_string());
/// let handle = KeyDerivation::new()
///     .with_algorithm(Algorithm::PbeWithHmacSha256AndAes128)
///     .with_iterations(1_000)
///     .derive(42, Direction::Encrypt, &password)?;
///
/// assert_eq!(handle.key_material().len(), 16);
/// # Ok::<(), pbecrypt_rs::PbeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDerivation {
    algorithm: Algorithm,
    iterations: u32,
}

impl KeyDerivation {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            algorithm: Algorithm::PbeWithMd5AndDes,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set custom iteration count. Validated at [`derive`](Self::derive) time.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive a single-use cipher handle for `direction`.
    #[inline(always)]
    pub fn derive(
        &self,
        seed: u64,
        direction: Direction,
        password: &PasswordString,
    ) -> Result<CipherHandle> {
        derive_cipher(seed, direction, password, self.algorithm, self.iterations)
    }
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self::new()
    }
}
