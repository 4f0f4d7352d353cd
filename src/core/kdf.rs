//! Key derivation for the v1 suite.
//!
//! v1 splits the 32-byte symmetric key into an encryption sub-key and an
//! authentication sub-key via HKDF-SHA-384, salted with the first half of
//! the token nonce and domain-separated by fixed info labels.

use hkdf::Hkdf;
use sha2::Sha384;

use crate::core::error::{PasetoError, PasetoResult};

/// Info label for the encryption sub-key.
const ENCRYPTION_KEY_INFO: &[u8] = b"paseto-encryption-key";

/// Info label for the authentication sub-key.
const AUTH_KEY_INFO: &[u8] = b"paseto-auth-key-for-aead";

/// Derives `len` bytes from `key` and `salt` with HKDF-SHA-384.
///
/// Deterministic: the same (key, salt, info) always yields the same output.
///
/// # Errors
///
/// Returns `PasetoError::InvalidKeyMaterial` if `len` exceeds the HKDF
/// expansion limit for SHA-384 (255 × 48 bytes).
pub fn derive_key(key: &[u8], salt: &[u8], len: usize, info: &[u8]) -> PasetoResult<Vec<u8>> {
    let hk = Hkdf::<Sha384>::new(Some(salt), key);
    let mut okm = vec![0u8; len];
    hk.expand(info, &mut okm)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    Ok(okm)
}

/// Splits a v1 symmetric key into its encryption and authentication
/// sub-keys.
pub fn split_symmetric_key(key: &[u8; 32], salt: &[u8]) -> PasetoResult<([u8; 32], [u8; 32])> {
    let ek_bytes = derive_key(key, salt, 32, ENCRYPTION_KEY_INFO)?;
    let ak_bytes = derive_key(key, salt, 32, AUTH_KEY_INFO)?;

    let mut ek = [0u8; 32];
    ek.copy_from_slice(&ek_bytes);
    let mut ak = [0u8; 32];
    ak.copy_from_slice(&ak_bytes);

    Ok((ek, ak))
}
