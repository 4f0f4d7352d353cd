//! Core PASETO types and operations.
//!
//! This module provides the fundamental building blocks for PASETO:
//!
//! - [`version`] - Protocol versions (v1, v2) and their token operations
//! - [`error`] - Error types for PASETO operations
//! - [`keys`] - Typed key material (symmetric, private, public)
//! - [`operations`] - Per-version cryptographic constructions
//!
//! The remaining modules are internal plumbing: pre-authentication
//! encoding, constant-time comparison, key derivation, and the token
//! text codec.

pub mod error;
pub mod keys;
pub(crate) mod operations;
pub mod version;

mod codec;
mod compare;
mod kdf;
mod pae;

// Re-export commonly used items
pub use error::{PasetoError, PasetoResult};
pub use keys::{PrivateKey, PublicKey, SymmetricKey};
pub use version::{Purpose, Version};
