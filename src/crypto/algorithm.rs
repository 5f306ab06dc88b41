//! src/crypto/algorithm.rs
//! Registry of supported password-based-encryption identifiers

use crate::error::PbeError;
use std::fmt;
use std::str::FromStr;

/// Digest used by a PBES1 (PBKDF1) transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbes1Digest {
    Md5,
    Sha1,
}

/// PRF used by a PBES2 (PBKDF2) transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbes2Prf {
    HmacSha256,
    HmacSha512,
}

/// How key material is built for an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// PBKDF1: one digest output split into key and IV.
    Pbes1(Pbes1Digest),
    /// PBKDF2: key from the KDF, IV drawn from the seeded generator after the salt.
    Pbes2(Pbes2Prf),
}

/// Block cipher run in CBC mode with PKCS#5 padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCipherKind {
    Des,
    Aes128,
    Aes256,
}

impl BlockCipherKind {
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Des => 8,
            Self::Aes128 | Self::Aes256 => 16,
        }
    }

    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Des => 8,
            Self::Aes128 => 16,
            Self::Aes256 => 32,
        }
    }
}

/// A supported PBE transform, named by its conventional identifier.
///
/// | Identifier                    | KDF                | Cipher      |
/// |-------------------------------|--------------------|-------------|
/// | `PBEWithMD5AndDES`            | PBKDF1-MD5         | DES-CBC     |
/// | `PBEWithSHA1AndDES`           | PBKDF1-SHA1        | DES-CBC     |
/// | `PBEWithHmacSHA256AndAES_128` | PBKDF2-HMAC-SHA256 | AES-128-CBC |
/// | `PBEWithHmacSHA256AndAES_256` | PBKDF2-HMAC-SHA256 | AES-256-CBC |
/// | `PBEWithHmacSHA512AndAES_256` | PBKDF2-HMAC-SHA512 | AES-256-CBC |
///
/// Parsing ignores ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    PbeWithMd5AndDes,
    PbeWithSha1AndDes,
    PbeWithHmacSha256AndAes128,
    PbeWithHmacSha256AndAes256,
    PbeWithHmacSha512AndAes256,
}

impl Algorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [Self; 5] = [
        Self::PbeWithMd5AndDes,
        Self::PbeWithSha1AndDes,
        Self::PbeWithHmacSha256AndAes128,
        Self::PbeWithHmacSha256AndAes256,
        Self::PbeWithHmacSha512AndAes256,
    ];

    /// Canonical identifier string.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::PbeWithMd5AndDes => "PBEWithMD5AndDES",
            Self::PbeWithSha1AndDes => "PBEWithSHA1AndDES",
            Self::PbeWithHmacSha256AndAes128 => "PBEWithHmacSHA256AndAES_128",
            Self::PbeWithHmacSha256AndAes256 => "PBEWithHmacSHA256AndAES_256",
            Self::PbeWithHmacSha512AndAes256 => "PBEWithHmacSHA512AndAES_256",
        }
    }

    #[must_use]
    pub const fn scheme(self) -> Scheme {
        match self {
            Self::PbeWithMd5AndDes => Scheme::Pbes1(Pbes1Digest::Md5),
            Self::PbeWithSha1AndDes => Scheme::Pbes1(Pbes1Digest::Sha1),
            Self::PbeWithHmacSha256AndAes128 | Self::PbeWithHmacSha256AndAes256 => {
                Scheme::Pbes2(Pbes2Prf::HmacSha256)
            }
            Self::PbeWithHmacSha512AndAes256 => Scheme::Pbes2(Pbes2Prf::HmacSha512),
        }
    }

    #[must_use]
    pub const fn cipher(self) -> BlockCipherKind {
        match self {
            Self::PbeWithMd5AndDes | Self::PbeWithSha1AndDes => BlockCipherKind::Des,
            Self::PbeWithHmacSha256AndAes128 => BlockCipherKind::Aes128,
            Self::PbeWithHmacSha256AndAes256 | Self::PbeWithHmacSha512AndAes256 => {
                BlockCipherKind::Aes256
            }
        }
    }

    #[must_use]
    pub const fn block_size(self) -> usize {
        self.cipher().block_size()
    }

    #[must_use]
    pub const fn key_len(self) -> usize {
        self.cipher().key_len()
    }
}

impl FromStr for Algorithm {
    type Err = PbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.identifier().eq_ignore_ascii_case(s))
            .ok_or_else(|| PbeError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
