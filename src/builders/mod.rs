//! # Builders
//!
//! This module provides builder patterns for constructing cryptographic operations.
//!
//! ## Modules
//!
//! - [`key_derivation`] - Builder for seeded cipher-handle derivation
//!
//! ## Usage
//!
//! Builders provide a fluent API for configuring cryptographic operations with
//! sensible defaults and optional customization.

pub mod key_derivation;

pub use key_derivation::KeyDerivation;
