//! Platform-Agnostic Security Tokens (PASETO), versions 1 and 2.
//!
//! PASETO is a secure-by-default token format: every token is bound to a
//! protocol version and purpose, and each version fixes one cryptographic
//! suite with no algorithm negotiation. This crate implements the v1 and
//! v2 protocols for issuing and validating tokens.
//!
//! # Quick Start
//!
//! ```rust
//! use paseto::{SymmetricKey, Version};
//!
//! // Generate a key and encrypt a local token
//! let key = SymmetricKey::generate(Version::V2);
//! let token = Version::V2.encrypt(b"top secret", &key, b"")?;
//! assert!(token.starts_with("v2.local."));
//!
//! // Decrypt it back
//! let message = Version::V2.decrypt(&token, &key, b"")?;
//! assert_eq!(message, "top secret");
//! # Ok::<(), paseto::PasetoError>(())
//! ```
//!
//! # Token Types
//!
//! PASETO defines two token purposes:
//!
//! | Purpose | Format | Description |
//! |---------|--------|-------------|
//! | `local` | `v{n}.local.{data}` | Symmetric authenticated encryption |
//! | `public` | `v{n}.public.{data}` | Asymmetric signature over cleartext |
//!
//! Either form may carry an optional footer segment, which is
//! authenticated but never encrypted.
//!
//! # Versions
//!
//! This crate supports two protocol versions:
//!
//! - **V1**: NIST Compatibility (AES-256-CTR + HMAC-SHA-384, RSA-PSS)
//! - **V2**: Sodium (XChaCha20-Poly1305, Ed25519) - **Recommended**
//!
//! # Security
//!
//! This crate follows security best practices:
//!
//! - Key material is zeroized on drop
//! - Debug output redacts sensitive key material
//! - Constant-time comparison for headers, footers, and MACs
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations

pub mod core;

// Re-export commonly used items at crate root
pub use core::error::{PasetoError, PasetoResult};
pub use core::keys::{PrivateKey, PublicKey, SymmetricKey};
pub use core::version::{Purpose, Version};
