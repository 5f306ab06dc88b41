//! # Constants
//!
//! Key-derivation parameters, stream sizes and framed-format markers used throughout
//! the library.

/// Iteration count applied to every derivation unless a caller overrides it.
///
/// Fixed at `5` so files stay readable by any implementation of the same scheme.
pub const DEFAULT_ITERATIONS: u32 = 5;

/// Minimum allowed iteration count.
pub const MIN_ITERATIONS: u32 = 1;

/// Maximum allowed iteration count.
///
/// Guards against configuration typos that would stall a derivation for minutes.
pub const MAX_ITERATIONS: u32 = 5_000_000;

/// Salt length drawn from the seeded generator.
pub const SALT_LEN: usize = 8;

/// Largest block size of any supported cipher (AES).
pub const MAX_BLOCK_SIZE: usize = 16;

/// Default capacity of the buffered file layer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Magic bytes opening a framed file.
pub const HEADER_MAGIC: [u8; 3] = *b"PBE";

/// The only framed format version produced and accepted.
pub const FORMAT_VERSION: u8 = 1;

/// Longest encoded string a `utf` field can carry (u16 length prefix).
pub const MAX_UTF_LEN: usize = u16::MAX as usize;

/// Most entries a string list can carry (one-byte count prefix).
pub const MAX_STRING_LIST_LEN: usize = u8::MAX as usize;
