// src/crypto/rng.rs
//! Seeded salt generator
//!
//! A 48-bit linear congruential generator (multiplier `0x5DEECE66D`, increment `0xB`)
//! whose output matches the classic JVM `java.util.Random`, so salts derived here are
//! identical to the ones an existing PBE file was written with.
//!
//! This is **not** a cryptographic RNG. Its only job is to regenerate the same salt from
//! the same seed on both sides of a file.

use rand::{RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// Deterministic generator driving salt (and PBES2 IV) generation.
#[derive(Debug, Clone)]
pub struct SeedRng {
    state: u64,
}

impl SeedRng {
    /// Create a generator from a 64-bit seed. Only the low 48 bits survive scrambling.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advance the state and return its top `bits` bits.
    #[inline(always)]
    fn next_bits(&mut self, bits: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & MASK;
        (self.state >> (48 - bits)) as u32
    }
}

impl RngCore for SeedRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // JVM nextLong: high word shifted, low word sign-extended and added
        let high = i64::from(self.next_bits(32) as i32) << 32;
        let low = i64::from(self.next_bits(32) as i32);
        high.wrapping_add(low) as u64
    }

    /// One 32-bit draw per four output bytes, least significant byte first.
    /// Bytes left over from the last draw are discarded.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeedRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
