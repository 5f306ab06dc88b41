//! # Key Derivation Functions (KDF)
//!
//! Password-to-key transforms behind the supported algorithms.
//!
//! - [`pbkdf1`] - PKCS#5 PBKDF1 over MD5 or SHA-1 (PBES1 algorithms)
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256/512 (PBES2 algorithms)
//!
//! For most use cases go through [`derive_cipher`](crate::derive_cipher) or the
//! facade; these functions are exposed for known-answer testing and custom flows.

pub mod pbkdf1;
pub mod pbkdf2;

pub use self::pbkdf1::derive_pbkdf1_key;
pub use self::pbkdf2::derive_pbkdf2_key;
