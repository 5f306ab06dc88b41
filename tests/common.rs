//! tests/common.rs
//! Common constants and utilities shared across test files

use pbecrypt_rs::aliases::PasswordString;
use std::path::PathBuf;
use tempfile::TempDir;

/// Default iteration count; anything else is exercised explicitly.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Password behind every known-answer vector in this suite
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "s3cr3t";

#[allow(dead_code)] // Used across multiple test files
pub const MD5_DES: &str = "PBEWithMD5AndDES";

/// `["alpha", "beta"]`, seed 42, `PBEWithMD5AndDES`, `TEST_PASSWORD`
#[allow(dead_code)] // Used across multiple test files
pub const ALPHA_BETA_SEED42_HEX: &str = "fb646d3e042618fb989045672805b130";

/// `(1, 2, 3, 4)`, seed 7, `PBEWithMD5AndDES`, `TEST_PASSWORD`
#[allow(dead_code)] // Used across multiple test files
pub const VERSION_1234_SEED7_HEX: &str = "a46dfae67ebf4fee";

#[allow(dead_code)] // Used across multiple test files
pub fn password() -> PasswordString {
    PasswordString::new(TEST_PASSWORD.to_string())
}

#[allow(dead_code)] // Used across multiple test files
pub fn password_of(s: &str) -> PasswordString {
    PasswordString::new(s.to_string())
}

/// Scratch directory plus a file path inside it. Keep the `TempDir` alive.
#[allow(dead_code)] // Used across multiple test files
pub fn scratch(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    (dir, path)
}
