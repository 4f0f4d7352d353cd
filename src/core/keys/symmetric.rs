//! `SymmetricKey` - shared-secret key material for `local` tokens.

use core::fmt::{self, Debug};

use base64::prelude::*;
use zeroize::Zeroize;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::version::Version;

/// A 32-byte symmetric key for encrypting and decrypting `local` tokens.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use paseto::{SymmetricKey, Version};
///
/// let key = SymmetricKey::generate(Version::V2);
/// let token = Version::V2.encrypt(b"top secret", &key, b"")?;
/// let message = Version::V2.decrypt(&token, &key, b"")?;
/// assert_eq!(message, "top secret");
/// # Ok::<(), paseto::PasetoError>(())
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SymmetricKey {
    key: [u8; 32],
    #[zeroize(skip)]
    version: Version,
}

impl SymmetricKey {
    /// Generates a fresh key from the operating system CSPRNG.
    #[must_use]
    pub fn generate(version: Version) -> Self {
        use rand_core::{OsRng, RngCore};

        let mut key = [0u8; 32];
        OsRng.fill_bytes(&mut key);
        Self { key, version }
    }

    /// Creates a key from externally supplied raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidKeyMaterial` unless `bytes` is exactly
    /// 32 bytes long.
    pub fn from_bytes(version: Version, bytes: &[u8]) -> PasetoResult<Self> {
        let key: [u8; 32] = bytes
            .try_into()
            .map_err(|_| PasetoError::InvalidKeyMaterial)?;
        Ok(Self { key, version })
    }

    /// Creates a key from a hex-encoded string.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::Encoding` for malformed hex and
    /// `PasetoError::InvalidKeyMaterial` for a decoded length other
    /// than 32.
    pub fn from_hex(version: Version, hex_str: &str) -> PasetoResult<Self> {
        let mut bytes = hex::decode(hex_str).map_err(|_| PasetoError::Encoding)?;
        let key = Self::from_bytes(version, &bytes);
        bytes.zeroize();
        key
    }

    /// Creates a key from a base64url (no padding) string.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::Encoding` for malformed base64 and
    /// `PasetoError::InvalidKeyMaterial` for a decoded length other
    /// than 32.
    pub fn from_base64(version: Version, encoded: &str) -> PasetoResult<Self> {
        let mut bytes = BASE64_URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| PasetoError::Encoding)?;
        let key = Self::from_bytes(version, &bytes);
        bytes.zeroize();
        key
    }

    /// Returns the raw key bytes hex-encoded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.key)
    }

    /// Returns the raw key bytes base64url-encoded without padding.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_URL_SAFE_NO_PAD.encode(self.key)
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }

    /// Returns the protocol version this key is tagged for.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("version", &self.version)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        let key_equal: bool = self.key.ct_eq(&other.key).into();
        self.version == other.version && key_equal
    }
}

impl Eq for SymmetricKey {}
