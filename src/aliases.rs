//! # Secure-Gate Type Aliases
//!
//! Secret-bearing buffers used across the crate. Every type here requires an explicit
//! `.expose_secret()` / `.expose_secret_mut()` to reach the bytes, so key material never
//! leaks through `Debug` or accidental copies.
//!
//! ## Type Categories
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//! - [`Block8`] / [`Block16`] - one DES / AES block of scratch space
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - Secure password string wrapper
//!
//! ### Fixed-Size Secrets
//! - [`Aes128Key16`] - 16-byte AES-128 key
//! - [`Aes256Key32`] - 32-byte AES-256 key
//! - [`DesKey8`] - 8-byte DES key
//! - [`Iv8`] - 8-byte CBC initialization vector (DES)
//! - [`Iv16`] - 16-byte CBC initialization vector (AES)
//! - [`Salt8`] - 8-byte seeded salt

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block8 = SpanBuffer<8>; // one DES block
pub type Block16 = SpanBuffer<16>; // one AES block, also PBKDF1 key+IV output

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(PasswordString, String);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(Aes128Key16, 16);
fixed_alias!(Aes256Key32, 32);
fixed_alias!(DesKey8, 8);
fixed_alias!(Iv8, 8);
fixed_alias!(Iv16, 16);
fixed_alias!(Salt8, 8); // regenerated from the seed, never stored
