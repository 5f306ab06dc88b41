// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs `block_a` with `block_b` into `output`, over `output.len()` bytes.
///
/// Used by the CBC chaining in both stream directions, for 8-byte DES and
/// 16-byte AES blocks alike.
///
/// # Panics (by contract)
///
/// Panics if either input is shorter than `output`. Callers always pass slices of
/// one cipher block.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < output.len() {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// XORs `other` into `block` in place.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8], other: &[u8]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// True when every byte is printable ASCII (`0x20..=0x7E`).
///
/// PBES1 transforms only accept such passwords; multi-byte UTF-8 sequences are
/// rejected because every byte of them is `>= 0x80`.
#[inline]
pub fn is_printable_ascii(input: &str) -> bool {
    input.bytes().all(|b| (0x20..=0x7E).contains(&b))
}
