//! `public` token operations - asymmetric signatures over cleartext
//! payloads.
//!
//! - v1: RSA-PSS with SHA-384 digest and MGF1-SHA-384, 2048-bit modulus
//! - v2: Ed25519
//!
//! The signed message travels in clear text inside the token body with
//! the signature appended as a fixed-size suffix.

use crate::core::codec;
use crate::core::error::{PasetoError, PasetoResult};
use crate::core::keys::{rsa_private_from_pem, rsa_public_from_pem};
use crate::core::pae::pae;

/// Signature size for v1 public tokens (256 bytes, RSA-2048).
pub const V1_SIGNATURE_SIZE: usize = 256;

/// Signature size for v2 public tokens (64 bytes, Ed25519).
pub const V2_SIGNATURE_SIZE: usize = 64;

/// Signs a message into a v1 public token.
///
/// # Arguments
///
/// * `message` - The cleartext message to sign
/// * `pem` - The RSA private key as PKCS#8 or PKCS#1 PEM text
/// * `footer` - Authenticated but unencrypted trailing data
/// * `header` - The token header (`"v1.public."`)
pub fn sign_v1(message: &[u8], pem: &str, footer: &[u8], header: &str) -> PasetoResult<String> {
    use rand_core::OsRng;
    use rsa::pss::BlindedSigningKey;
    use rsa::signature::{RandomizedSigner, SignatureEncoding};
    use rsa::traits::PublicKeyParts;
    use sha2::Sha384;

    let private = rsa_private_from_pem(pem)?;

    // Verify the private key has a 2048-bit modulus
    if private.n().bits() != 2048 {
        return Err(PasetoError::InvalidKeyMaterial);
    }

    let pre_auth = pae(&[header.as_bytes(), message, footer])?;

    // sig = RSA-PSS(sk, PAE(h, m, f)); the PSS salt length defaults to
    // the digest size, 48 bytes for SHA-384
    let signing_key = BlindedSigningKey::<Sha384>::new(private);
    let signature = signing_key
        .try_sign_with_rng(&mut OsRng, &pre_auth)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    let signature_bytes = signature.to_bytes();

    // body = m || sig
    let mut body = Vec::with_capacity(message.len() + V1_SIGNATURE_SIZE);
    body.extend_from_slice(message);
    body.extend_from_slice(&signature_bytes);

    Ok(codec::assemble(header, &body, footer))
}

/// Verifies a v1 public token and returns the signed message.
pub fn verify_v1(token: &str, pem: &str, footer: &[u8], header: &str) -> PasetoResult<String> {
    use rsa::pss::{Signature, VerifyingKey};
    use rsa::signature::Verifier;
    use rsa::traits::PublicKeyParts;
    use sha2::Sha384;

    let public = rsa_public_from_pem(pem)?;

    // Verify the public key has a 2048-bit modulus
    if public.n().bits() != 2048 {
        return Err(PasetoError::InvalidKeyMaterial);
    }

    let (payload, token_footer) = codec::decapsulate(token, header, footer)?;
    if payload.len() < V1_SIGNATURE_SIZE {
        return Err(PasetoError::MalformedToken);
    }
    let (message, signature_bytes) = payload.split_at(payload.len() - V1_SIGNATURE_SIZE);

    let pre_auth = pae(&[header.as_bytes(), message, &token_footer])?;

    let verifying_key = VerifyingKey::<Sha384>::new(public);
    let signature =
        Signature::try_from(signature_bytes).map_err(|_| PasetoError::SecurityViolation)?;
    verifying_key
        .verify(&pre_auth, &signature)
        .map_err(|_| PasetoError::SecurityViolation)?;

    String::from_utf8(message.to_vec()).map_err(|_| PasetoError::Encoding)
}

/// Signs a message into a v2 public token.
///
/// # Arguments
///
/// * `message` - The cleartext message to sign
/// * `key` - The 64-byte Ed25519 keypair (secret seed followed by the
///   public point)
/// * `footer` - Authenticated but unencrypted trailing data
/// * `header` - The token header (`"v2.public."`)
pub fn sign_v2(message: &[u8], key: &[u8], footer: &[u8], header: &str) -> PasetoResult<String> {
    use ed25519_dalek::{Signer, SigningKey};

    let keypair: &[u8; 64] = key
        .try_into()
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    let signing_key = SigningKey::from_keypair_bytes(keypair)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;

    // sig = Ed25519-sign(sk, PAE(h, m, f))
    let pre_auth = pae(&[header.as_bytes(), message, footer])?;
    let signature = signing_key
        .try_sign(&pre_auth)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;

    // body = m || sig
    let mut body = Vec::with_capacity(message.len() + V2_SIGNATURE_SIZE);
    body.extend_from_slice(message);
    body.extend_from_slice(&signature.to_bytes());

    Ok(codec::assemble(header, &body, footer))
}

/// Verifies a v2 public token and returns the signed message.
pub fn verify_v2(token: &str, key: &[u8], footer: &[u8], header: &str) -> PasetoResult<String> {
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};

    let point: [u8; 32] = key
        .try_into()
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    let verifying_key =
        VerifyingKey::from_bytes(&point).map_err(|_| PasetoError::InvalidKeyMaterial)?;

    let (payload, token_footer) = codec::decapsulate(token, header, footer)?;
    if payload.len() < V2_SIGNATURE_SIZE {
        return Err(PasetoError::MalformedToken);
    }
    let (message, signature_bytes) = payload.split_at(payload.len() - V2_SIGNATURE_SIZE);

    let signature_array: [u8; 64] = signature_bytes
        .try_into()
        .map_err(|_| PasetoError::SecurityViolation)?;
    let signature = Signature::from_bytes(&signature_array);

    let pre_auth = pae(&[header.as_bytes(), message, &token_footer])?;
    verifying_key
        .verify(&pre_auth, &signature)
        .map_err(|_| PasetoError::SecurityViolation)?;

    String::from_utf8(message.to_vec()).map_err(|_| PasetoError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::prelude::*;

    const SEED: [u8; 32] = [0x21u8; 32];

    fn v2_keypair() -> [u8; 64] {
        ed25519_dalek::SigningKey::from_bytes(&SEED).to_keypair_bytes()
    }

    fn v2_public() -> [u8; 32] {
        ed25519_dalek::SigningKey::from_bytes(&SEED)
            .verifying_key()
            .to_bytes()
    }

    #[test]
    fn test_v2_roundtrip() -> Result<(), PasetoError> {
        let token = sign_v2(b"signed message", &v2_keypair(), b"", "v2.public.")?;
        assert!(token.starts_with("v2.public."));

        let message = verify_v2(&token, &v2_public(), b"", "v2.public.")?;
        assert_eq!(message, "signed message");
        Ok(())
    }

    #[test]
    fn test_v2_roundtrip_with_footer() -> Result<(), PasetoError> {
        let token = sign_v2(b"signed message", &v2_keypair(), b"key-id-1", "v2.public.")?;
        assert_eq!(token.split('.').count(), 4);

        let message = verify_v2(&token, &v2_public(), b"key-id-1", "v2.public.")?;
        assert_eq!(message, "signed message");
        Ok(())
    }

    #[test]
    fn test_v2_message_is_cleartext() -> Result<(), PasetoError> {
        let token = sign_v2(b"signed message", &v2_keypair(), b"", "v2.public.")?;
        let body = BASE64_URL_SAFE_NO_PAD
            .decode(token.trim_start_matches("v2.public."))
            .map_err(|_| PasetoError::Encoding)?;
        assert_eq!(&body[..body.len() - V2_SIGNATURE_SIZE], b"signed message");
        Ok(())
    }

    #[test]
    fn test_v2_tampered_message() -> Result<(), PasetoError> {
        let token = sign_v2(b"signed message", &v2_keypair(), b"", "v2.public.")?;
        let mut body = BASE64_URL_SAFE_NO_PAD
            .decode(token.trim_start_matches("v2.public."))
            .map_err(|_| PasetoError::Encoding)?;
        body[0] ^= 0xff;
        let tampered = format!("v2.public.{}", BASE64_URL_SAFE_NO_PAD.encode(&body));

        let result = verify_v2(&tampered, &v2_public(), b"", "v2.public.");
        assert!(matches!(result, Err(PasetoError::SecurityViolation)));
        Ok(())
    }

    #[test]
    fn test_v2_wrong_public_key() -> Result<(), PasetoError> {
        let token = sign_v2(b"signed message", &v2_keypair(), b"", "v2.public.")?;
        let other = ed25519_dalek::SigningKey::from_bytes(&[0x22u8; 32])
            .verifying_key()
            .to_bytes();
        let result = verify_v2(&token, &other, b"", "v2.public.");
        assert!(matches!(result, Err(PasetoError::SecurityViolation)));
        Ok(())
    }

    #[test]
    fn test_v2_wrong_footer() -> Result<(), PasetoError> {
        let token = sign_v2(b"signed message", &v2_keypair(), b"key-id-1", "v2.public.")?;
        let result = verify_v2(&token, &v2_public(), b"key-id-2", "v2.public.");
        assert!(matches!(result, Err(PasetoError::SecurityViolation)));
        Ok(())
    }

    #[test]
    fn test_v2_payload_shorter_than_signature() {
        let short = format!("v2.public.{}", BASE64_URL_SAFE_NO_PAD.encode([0u8; 63]));
        let result = verify_v2(&short, &v2_public(), b"", "v2.public.");
        assert!(matches!(result, Err(PasetoError::MalformedToken)));
    }

    #[test]
    fn test_v2_bad_keypair_length() {
        let result = sign_v2(b"signed message", &[0u8; 32], b"", "v2.public.");
        assert!(matches!(result, Err(PasetoError::InvalidKeyMaterial)));
    }

    #[test]
    fn test_v1_roundtrip() -> Result<(), PasetoError> {
        use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};

        // RSA keygen dominates this test's runtime
        let private = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 2048)
            .map_err(|_| PasetoError::InvalidKeyMaterial)?;
        let private_pem = private
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|_| PasetoError::InvalidKeyMaterial)?;
        let public_pem = private
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .map_err(|_| PasetoError::InvalidKeyMaterial)?;

        let token = sign_v1(b"signed message", &private_pem, b"key-id-1", "v1.public.")?;
        assert!(token.starts_with("v1.public."));

        let message = verify_v1(&token, &public_pem, b"key-id-1", "v1.public.")?;
        assert_eq!(message, "signed message");

        // Tampering with the cleartext message invalidates the signature
        let segments: Vec<&str> = token.split('.').collect();
        let mut body = BASE64_URL_SAFE_NO_PAD.decode(segments[2]).unwrap();
        body[0] ^= 0xff;
        let tampered = format!(
            "v1.public.{}.{}",
            BASE64_URL_SAFE_NO_PAD.encode(&body),
            segments[3]
        );
        let result = verify_v1(&tampered, &public_pem, b"key-id-1", "v1.public.");
        assert!(matches!(result, Err(PasetoError::SecurityViolation)));
        Ok(())
    }

    #[test]
    fn test_v1_rejects_small_modulus() -> Result<(), PasetoError> {
        use rsa::pkcs8::{EncodePrivateKey, LineEnding};

        let private = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 1024)
            .map_err(|_| PasetoError::InvalidKeyMaterial)?;
        let private_pem = private
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|_| PasetoError::InvalidKeyMaterial)?;

        let result = sign_v1(b"signed message", &private_pem, b"", "v1.public.");
        assert!(matches!(result, Err(PasetoError::InvalidKeyMaterial)));
        Ok(())
    }
}
