//! Key material types.
//!
//! Each key owns its raw material and is tagged with the [`Version`] it
//! belongs to; operations reject keys tagged for a different version
//! before touching any cryptography.
//!
//! - [`SymmetricKey`]: 32 bytes, used by `local` tokens.
//! - [`PrivateKey`]: signing key for `public` tokens (v1: RSA PEM,
//!   v2: Ed25519 keypair bytes).
//! - [`PublicKey`]: verification key for `public` tokens (v1: RSA PEM,
//!   v2: 32 Ed25519 point bytes).
//!
//! [`Version`]: crate::core::version::Version

mod private;
mod public;
mod symmetric;

pub use private::PrivateKey;
pub use public::PublicKey;
pub use symmetric::SymmetricKey;

pub(crate) use private::rsa_private_from_pem;
pub(crate) use public::rsa_public_from_pem;
