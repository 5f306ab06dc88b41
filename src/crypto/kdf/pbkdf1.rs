//! src/crypto/kdf/pbkdf1.rs

use crate::aliases::{Block16, PasswordString, Salt8};
use crate::crypto::algorithm::Pbes1Digest;
use crate::error::{PbeError, Result};
use crate::utils::is_printable_ascii;

use md5::Md5;
use sha1::Sha1;
use sha2::Digest;

/// Derive 16 bytes of PBKDF1 output (DES key in `[..8]`, CBC IV in `[8..]`).
///
/// `T_1 = H(password || salt)`, `T_i = H(T_{i-1})`, output is the prefix of `T_iterations`.
///
/// The password must be printable ASCII; anything else is rejected instead of being
/// silently narrowed to bytes.
#[inline]
pub fn derive_pbkdf1_key(
    password: &PasswordString,
    salt: &Salt8,
    iterations: u32,
    digest: Pbes1Digest,
    out: &mut Block16,
) -> Result<()> {
    let password = password.expose_secret();
    if password.is_empty() {
        return Err(PbeError::InvalidKeyMaterial("empty password".into()));
    }
    if !is_printable_ascii(password) {
        return Err(PbeError::InvalidKeyMaterial(
            "PBES1 passwords must be printable ASCII".into(),
        ));
    }
    if iterations == 0 {
        return Err(PbeError::InvalidCipherParameters(
            "PBKDF1 iterations must be ≥1".into(),
        ));
    }

    match digest {
        Pbes1Digest::Md5 => {
            pbkdf1::<Md5>(password.as_bytes(), salt.expose_secret(), iterations, out)
        }
        Pbes1Digest::Sha1 => {
            pbkdf1::<Sha1>(password.as_bytes(), salt.expose_secret(), iterations, out)
        }
    }
}

fn pbkdf1<D: Digest>(password: &[u8], salt: &[u8], iterations: u32, out: &mut Block16) -> Result<()> {
    let mut hasher = D::new();
    hasher.update(password);
    hasher.update(salt);
    let mut digest = hasher.finalize();

    for _ in 1..iterations {
        digest = D::digest(digest.as_slice());
    }

    let out = out.expose_secret_mut();
    let needed = out.len();
    if digest.len() < needed {
        return Err(PbeError::InvalidCipherParameters(format!(
            "digest yields {} bytes, {needed} required",
            digest.len()
        )));
    }
    out.copy_from_slice(&digest[..needed]);
    Ok(())
}
