//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{PasswordString, Salt8};
use crate::crypto::algorithm::Pbes2Prf;
use crate::error::{PbeError, Result};

use hmac::Hmac;
use ::pbkdf2::pbkdf2;
use sha2::{Sha256, Sha512};

/// Derive PBKDF2-HMAC-SHA256/512 output directly into the caller's key buffer.
///
/// The password is used as UTF-8 bytes. `out_key` may be any length the cipher needs
/// (16 or 32 bytes here).
#[inline(always)]
pub fn derive_pbkdf2_key(
    password: &PasswordString,
    salt: &Salt8,
    iterations: u32,
    prf: Pbes2Prf,
    out_key: &mut [u8],
) -> Result<()> {
    if password.expose_secret().is_empty() {
        return Err(PbeError::InvalidKeyMaterial("empty password".into()));
    }
    if iterations == 0 {
        return Err(PbeError::InvalidCipherParameters(
            "PBKDF2 iterations must be ≥1".into(),
        ));
    }

    let password = password.expose_secret().as_bytes();
    let salt = salt.expose_secret();

    let derived = match prf {
        Pbes2Prf::HmacSha256 => pbkdf2::<Hmac<Sha256>>(password, salt, iterations, out_key),
        Pbes2Prf::HmacSha512 => pbkdf2::<Hmac<Sha512>>(password, salt, iterations, out_key),
    };
    derived.map_err(|e| PbeError::InvalidCipherParameters(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}
