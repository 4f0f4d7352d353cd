//! `PublicKey` - verification key material for `public` tokens.

use core::fmt::{self, Debug};

use base64::prelude::*;

use crate::core::error::{PasetoError, PasetoResult};
use crate::core::version::Version;

/// A public verification key for checking `public` tokens.
///
/// The stored material is version specific:
///
/// - **v1**: RSA public key as PEM text, either SPKI (`BEGIN PUBLIC KEY`)
///   or PKCS#1 (`BEGIN RSA PUBLIC KEY`).
/// - **v2**: the 32-byte compressed Ed25519 point, validated on
///   construction.
///
/// Public keys are public data: they are not zeroized and their `Debug`
/// output is not redacted.
#[derive(Clone)]
pub struct PublicKey {
    material: Vec<u8>,
    version: Version,
}

impl PublicKey {
    /// Creates a public key from externally supplied material.
    ///
    /// # Arguments
    ///
    /// * `version` - The protocol version the key will be used with
    /// * `bytes` - v1: PEM text bytes; v2: the 32-byte compressed point
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::InvalidKeyMaterial` if the material does not
    /// parse for the given version, including a v2 encoding that is not a
    /// valid curve point.
    pub fn from_bytes(version: Version, bytes: &[u8]) -> PasetoResult<Self> {
        match version {
            Version::V1 => {
                let pem = core::str::from_utf8(bytes)
                    .map_err(|_| PasetoError::InvalidKeyMaterial)?;
                rsa_public_from_pem(pem)?;
                Ok(Self {
                    material: bytes.to_vec(),
                    version,
                })
            }
            Version::V2 => {
                let point: [u8; 32] = bytes
                    .try_into()
                    .map_err(|_| PasetoError::InvalidKeyMaterial)?;
                ed25519_dalek::VerifyingKey::from_bytes(&point)
                    .map_err(|_| PasetoError::InvalidKeyMaterial)?;
                Ok(Self {
                    material: bytes.to_vec(),
                    version,
                })
            }
        }
    }

    /// Creates a public key from hex-encoded material.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::Encoding` for malformed hex, otherwise as
    /// [`PublicKey::from_bytes`].
    pub fn from_hex(version: Version, hex_str: &str) -> PasetoResult<Self> {
        let bytes = hex::decode(hex_str).map_err(|_| PasetoError::Encoding)?;
        Self::from_bytes(version, &bytes)
    }

    /// Creates a public key from base64url (no padding) material.
    ///
    /// # Errors
    ///
    /// Returns `PasetoError::Encoding` for malformed base64, otherwise as
    /// [`PublicKey::from_bytes`].
    pub fn from_base64(version: Version, encoded: &str) -> PasetoResult<Self> {
        let bytes = BASE64_URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| PasetoError::Encoding)?;
        Self::from_bytes(version, &bytes)
    }

    /// Returns the raw key material hex-encoded.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.material)
    }

    /// Returns the raw key material base64url-encoded without padding.
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64_URL_SAFE_NO_PAD.encode(&self.material)
    }

    /// Returns a reference to the raw key material.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.material
    }

    /// Returns the protocol version this key is tagged for.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Views v1 material as PEM text.
    pub(crate) fn pem(&self) -> PasetoResult<&str> {
        core::str::from_utf8(&self.material).map_err(|_| PasetoError::InvalidKeyMaterial)
    }
}

/// Parses an RSA public key from PKCS#1 or SPKI PEM text.
pub(crate) fn rsa_public_from_pem(pem: &str) -> PasetoResult<rsa::RsaPublicKey> {
    use rsa::pkcs1::DecodeRsaPublicKey;
    use rsa::pkcs8::DecodePublicKey;

    if pem.contains("BEGIN RSA PUBLIC KEY") {
        rsa::RsaPublicKey::from_pkcs1_pem(pem).map_err(|_| PasetoError::InvalidKeyMaterial)
    } else if pem.contains("BEGIN PUBLIC KEY") {
        rsa::RsaPublicKey::from_public_key_pem(pem).map_err(|_| PasetoError::InvalidKeyMaterial)
    } else {
        Err(PasetoError::InvalidKeyMaterial)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("version", &self.version)
            .field("key_len", &self.material.len())
            .finish()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        // Public keys don't need constant-time comparison
        self.version == other.version && self.material == other.material
    }
}

impl Eq for PublicKey {}
