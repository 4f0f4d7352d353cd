//! Protocol versions and the token operations they expose.
//!
//! [`Version`] is the protocol descriptor: it carries the header literals
//! and key sizes for one version of the token format, and its methods are
//! the four engine operations (encrypt/decrypt for `local` tokens,
//! sign/verify for `public` tokens). Every operation checks that the key
//! is tagged for the same version before any cryptographic work.

use core::fmt::{self, Display};

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{PrivateKey, PublicKey, SymmetricKey};
use crate::core::operations::{local, public};

/// A protocol version.
///
/// - [`Version::V1`]: the NIST suite — AES-256-CTR + HMAC-SHA-384 for
///   `local`, RSA-PSS (SHA-384) for `public`. Provided for
///   interoperability with existing deployments.
/// - [`Version::V2`]: the Sodium suite — XChaCha20-Poly1305 for `local`,
///   Ed25519 for `public`. Recommended for new tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// Version 1: NIST legacy suite.
    V1,
    /// Version 2: Sodium modern suite.
    V2,
}

/// A token purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// Symmetric encryption (`local` tokens).
    Local,
    /// Asymmetric signing (`public` tokens).
    Public,
}

impl Version {
    /// The symmetric key length in bytes.
    #[must_use]
    pub const fn symmetric_key_length(self) -> usize {
        32
    }

    /// The length of the random seed fed to the nonce derivation hash.
    pub(crate) const fn nonce_seed_length(self) -> usize {
        match self {
            Self::V1 => 32,
            Self::V2 => 24,
        }
    }

    /// Returns the fixed header literal for this version and purpose.
    #[must_use]
    pub const fn header(self, purpose: Purpose) -> &'static str {
        match (self, purpose) {
            (Self::V1, Purpose::Local) => "v1.local.",
            (Self::V1, Purpose::Public) => "v1.public.",
            (Self::V2, Purpose::Local) => "v2.local.",
            (Self::V2, Purpose::Public) => "v2.public.",
        }
    }

    /// Encrypts a message into a `local` token.
    ///
    /// # Arguments
    ///
    /// * `message` - The plaintext to encrypt
    /// * `key` - A symmetric key tagged for this version
    /// * `footer` - Authenticated but unencrypted trailing data; empty for
    ///   none
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidVersion` if the key is tagged for a
    /// different version, or `PasetoError::Encoding` if the message cannot
    /// be encoded.
    pub fn encrypt(
        self,
        message: &[u8],
        key: &SymmetricKey,
        footer: &[u8],
    ) -> PasetoResult<String> {
        use rand_core::{OsRng, RngCore};

        self.check_key_version(key.version())?;

        let mut seed = vec![0u8; self.nonce_seed_length()];
        OsRng.fill_bytes(&mut seed);
        let token = self.encrypt_seeded(message, key, footer, &seed);
        zeroize::Zeroize::zeroize(&mut seed);
        token
    }

    /// Encrypts with a caller-supplied nonce seed.
    ///
    /// Deterministic variant of [`Version::encrypt`] used to reproduce
    /// published test vectors. Not part of the supported API.
    #[doc(hidden)]
    pub fn encrypt_with_nonce(
        self,
        message: &[u8],
        key: &SymmetricKey,
        footer: &[u8],
        nonce_seed: &[u8],
    ) -> PasetoResult<String> {
        self.check_key_version(key.version())?;
        self.encrypt_seeded(message, key, footer, nonce_seed)
    }

    fn encrypt_seeded(
        self,
        message: &[u8],
        key: &SymmetricKey,
        footer: &[u8],
        seed: &[u8],
    ) -> PasetoResult<String> {
        let header = self.header(Purpose::Local);
        match self {
            Self::V1 => {
                let seed: &[u8; 32] =
                    seed.try_into().map_err(|_| PasetoError::InvalidKeyMaterial)?;
                local::encrypt_v1(message, key.as_bytes(), footer, seed, header)
            }
            Self::V2 => {
                let seed: &[u8; 24] =
                    seed.try_into().map_err(|_| PasetoError::InvalidKeyMaterial)?;
                local::encrypt_v2(message, key.as_bytes(), footer, seed, header)
            }
        }
    }

    /// Decrypts a `local` token and returns the plaintext.
    ///
    /// # Arguments
    ///
    /// * `token` - The full token text
    /// * `key` - A symmetric key tagged for this version
    /// * `footer` - The expected footer; empty to accept whatever footer
    ///   the token embeds
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidVersion` on a key/version mismatch,
    /// `PasetoError::MalformedToken` or `PasetoError::Encoding` when the
    /// token cannot be parsed, and `PasetoError::SecurityViolation` when
    /// the footer, MAC, or AEAD tag does not validate.
    pub fn decrypt(self, token: &str, key: &SymmetricKey, footer: &[u8]) -> PasetoResult<String> {
        self.check_key_version(key.version())?;

        let header = self.header(Purpose::Local);
        match self {
            Self::V1 => local::decrypt_v1(token, key.as_bytes(), footer, header),
            Self::V2 => local::decrypt_v2(token, key.as_bytes(), footer, header),
        }
    }

    /// Signs a message into a `public` token.
    ///
    /// The message is carried in clear text inside the token; only its
    /// authenticity is protected.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidVersion` on a key/version mismatch, or
    /// `PasetoError::InvalidKeyMaterial` if the private key cannot be used
    /// for this suite.
    pub fn sign(self, message: &[u8], key: &PrivateKey, footer: &[u8]) -> PasetoResult<String> {
        self.check_key_version(key.version())?;

        let header = self.header(Purpose::Public);
        match self {
            Self::V1 => public::sign_v1(message, key.pem()?, footer, header),
            Self::V2 => public::sign_v2(message, key.as_bytes(), footer, header),
        }
    }

    /// Verifies a `public` token and returns the signed message.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidVersion` on a key/version mismatch,
    /// `PasetoError::MalformedToken` or `PasetoError::Encoding` when the
    /// token cannot be parsed, and `PasetoError::SecurityViolation` when
    /// the footer or signature does not validate.
    pub fn verify(self, token: &str, key: &PublicKey, footer: &[u8]) -> PasetoResult<String> {
        self.check_key_version(key.version())?;

        let header = self.header(Purpose::Public);
        match self {
            Self::V1 => public::verify_v1(token, key.pem()?, footer, header),
            Self::V2 => public::verify_v2(token, key.as_bytes(), footer, header),
        }
    }

    fn check_key_version(self, key_version: Version) -> PasetoResult<()> {
        if key_version == self {
            Ok(())
        } else {
            Err(PasetoError::InvalidVersion)
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

impl Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Public => write!(f, "public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        assert_eq!(Version::V1.header(Purpose::Local), "v1.local.");
        assert_eq!(Version::V1.header(Purpose::Public), "v1.public.");
        assert_eq!(Version::V2.header(Purpose::Local), "v2.local.");
        assert_eq!(Version::V2.header(Purpose::Public), "v2.public.");
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::V1.to_string(), "v1");
        assert_eq!(Version::V2.to_string(), "v2");
        assert_eq!(Purpose::Local.to_string(), "local");
        assert_eq!(Purpose::Public.to_string(), "public");
    }

    #[test]
    fn test_key_lengths() {
        assert_eq!(Version::V1.symmetric_key_length(), 32);
        assert_eq!(Version::V2.symmetric_key_length(), 32);
        assert_eq!(Version::V1.nonce_seed_length(), 32);
        assert_eq!(Version::V2.nonce_seed_length(), 24);
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let key = SymmetricKey::generate(Version::V1);
        let result = Version::V2.encrypt(b"message", &key, b"");
        assert!(matches!(result, Err(PasetoError::InvalidVersion)));

        let result = Version::V2.decrypt("v2.local.xyz", &key, b"");
        assert!(matches!(result, Err(PasetoError::InvalidVersion)));
    }

    #[test]
    fn test_wrong_seed_length_rejected() {
        let key = SymmetricKey::generate(Version::V2);
        let result = Version::V2.encrypt_with_nonce(b"message", &key, b"", &[0u8; 32]);
        assert!(matches!(result, Err(PasetoError::InvalidKeyMaterial)));
    }
}
