//! `local` token operations - symmetric authenticated encryption.
//!
//! - v1: AES-256-CTR + HMAC-SHA-384, encrypt-then-MAC
//! - v2: XChaCha20-Poly1305
//!
//! Both versions derive the nonce from the message under a fresh random
//! seed, so re-running an encryption never reuses a (key, nonce) pair
//! even with a faulty RNG.

use crate::core::codec;
use crate::core::compare::constant_time_equals;
use crate::core::error::{PasetoError, PasetoResult};
use crate::core::kdf;
use crate::core::pae::pae;

/// Nonce size for v1 local tokens (32 bytes).
pub const V1_NONCE_SIZE: usize = 32;

/// MAC size for v1 local tokens (48 bytes, HMAC-SHA-384).
pub const V1_MAC_SIZE: usize = 48;

/// Nonce size for v2 local tokens (24 bytes).
pub const V2_NONCE_SIZE: usize = 24;

/// Tag size for v2 local tokens (16 bytes, Poly1305).
pub const V2_TAG_SIZE: usize = 16;

/// Encrypts a message into a v1 local token.
///
/// # Arguments
///
/// * `message` - The plaintext to encrypt
/// * `key` - The 32-byte symmetric key
/// * `footer` - Authenticated but unencrypted trailing data
/// * `seed` - The 32-byte random seed for nonce derivation
/// * `header` - The token header (`"v1.local."`)
pub fn encrypt_v1(
    message: &[u8],
    key: &[u8; 32],
    footer: &[u8],
    seed: &[u8; 32],
    header: &str,
) -> PasetoResult<String> {
    use aes::cipher::{KeyIvInit, StreamCipher};
    use hmac::{Hmac, Mac};
    use sha2::Sha384;

    type HmacSha384 = Hmac<Sha384>;
    type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

    // n = HMAC-SHA-384(key=seed, msg=message), truncated to 32 bytes
    let mut nonce_mac = <HmacSha384 as Mac>::new_from_slice(seed)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    nonce_mac.update(message);
    let nonce_full = nonce_mac.finalize().into_bytes();
    let mut nonce = [0u8; V1_NONCE_SIZE];
    nonce.copy_from_slice(&nonce_full[..V1_NONCE_SIZE]);

    // Ek, Ak = HKDF-SHA-384(key, salt=n[0..16])
    let (mut encryption_key, mut auth_key) = kdf::split_symmetric_key(key, &nonce[..16])?;

    // c = AES-256-CTR(key=Ek, iv=n[16..32], msg=message)
    let mut iv = [0u8; 16];
    iv.copy_from_slice(&nonce[16..32]);
    let mut ciphertext = message.to_vec();
    let mut cipher = Aes256Ctr::new(&encryption_key.into(), &iv.into());
    cipher.apply_keystream(&mut ciphertext);

    // t = HMAC-SHA-384(key=Ak, msg=PAE(h, n, c, f))
    let pre_auth = pae(&[header.as_bytes(), &nonce, &ciphertext, footer])?;
    let mut tag_mac = <HmacSha384 as Mac>::new_from_slice(&auth_key)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    tag_mac.update(&pre_auth);
    let tag = tag_mac.finalize().into_bytes();

    zeroize::Zeroize::zeroize(&mut encryption_key);
    zeroize::Zeroize::zeroize(&mut auth_key);

    // body = n || c || t
    let mut body = Vec::with_capacity(V1_NONCE_SIZE + ciphertext.len() + V1_MAC_SIZE);
    body.extend_from_slice(&nonce);
    body.extend_from_slice(&ciphertext);
    body.extend_from_slice(&tag);

    Ok(codec::assemble(header, &body, footer))
}

/// Decrypts a v1 local token and returns the plaintext.
pub fn decrypt_v1(
    token: &str,
    key: &[u8; 32],
    footer: &[u8],
    header: &str,
) -> PasetoResult<String> {
    use aes::cipher::{KeyIvInit, StreamCipher};
    use hmac::{Hmac, Mac};
    use sha2::Sha384;

    type HmacSha384 = Hmac<Sha384>;
    type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

    let (payload, token_footer) = codec::decapsulate(token, header, footer)?;
    if payload.len() < V1_NONCE_SIZE + V1_MAC_SIZE {
        return Err(PasetoError::MalformedToken);
    }

    let nonce = &payload[..V1_NONCE_SIZE];
    let ciphertext = &payload[V1_NONCE_SIZE..payload.len() - V1_MAC_SIZE];
    let tag = &payload[payload.len() - V1_MAC_SIZE..];

    let (mut encryption_key, mut auth_key) = kdf::split_symmetric_key(key, &nonce[..16])?;

    // t2 = HMAC-SHA-384(key=Ak, msg=PAE(h, n, c, f))
    let pre_auth = pae(&[header.as_bytes(), nonce, ciphertext, &token_footer])?;
    let mut tag_mac = <HmacSha384 as Mac>::new_from_slice(&auth_key)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    tag_mac.update(&pre_auth);
    let computed_tag = tag_mac.finalize().into_bytes();

    // Constant-time tag comparison before any decryption
    if !constant_time_equals(&computed_tag, tag) {
        zeroize::Zeroize::zeroize(&mut encryption_key);
        zeroize::Zeroize::zeroize(&mut auth_key);
        return Err(PasetoError::SecurityViolation);
    }

    let mut iv = [0u8; 16];
    iv.copy_from_slice(&nonce[16..32]);
    let mut plaintext = ciphertext.to_vec();
    let mut cipher = Aes256Ctr::new(&encryption_key.into(), &iv.into());
    cipher.apply_keystream(&mut plaintext);

    zeroize::Zeroize::zeroize(&mut encryption_key);
    zeroize::Zeroize::zeroize(&mut auth_key);

    String::from_utf8(plaintext).map_err(|_| PasetoError::Encoding)
}

/// Encrypts a message into a v2 local token.
///
/// # Arguments
///
/// * `message` - The plaintext to encrypt
/// * `key` - The 32-byte symmetric key
/// * `footer` - Authenticated but unencrypted trailing data
/// * `seed` - The 24-byte random seed for nonce derivation
/// * `header` - The token header (`"v2.local."`)
pub fn encrypt_v2(
    message: &[u8],
    key: &[u8; 32],
    footer: &[u8],
    seed: &[u8; 24],
    header: &str,
) -> PasetoResult<String> {
    use blake2::digest::{FixedOutput, KeyInit, Update};
    use blake2::Blake2bMac;
    use chacha20poly1305::aead::{Aead, Payload};
    use chacha20poly1305::XChaCha20Poly1305;

    type Blake2bMac24 = Blake2bMac<blake2::digest::consts::U24>;

    // n = BLAKE2b-MAC(key=seed, msg=message, len=24)
    let mut nonce_mac = <Blake2bMac24 as KeyInit>::new_from_slice(seed)
        .map_err(|_| PasetoError::InvalidKeyMaterial)?;
    <Blake2bMac24 as Update>::update(&mut nonce_mac, message);
    let nonce: [u8; V2_NONCE_SIZE] =
        <Blake2bMac24 as FixedOutput>::finalize_fixed(nonce_mac).into();

    // c = XChaCha20-Poly1305(key, nonce, message, ad=PAE(h, n, f))
    let pre_auth = pae(&[header.as_bytes(), &nonce, footer])?;
    let cipher = XChaCha20Poly1305::new(key.into());
    let ciphertext = cipher
        .encrypt(
            (&nonce).into(),
            Payload {
                msg: message,
                aad: &pre_auth,
            },
        )
        .map_err(|_| PasetoError::Encoding)?;

    // body = n || c (the Poly1305 tag rides at the end of c)
    let mut body = Vec::with_capacity(V2_NONCE_SIZE + ciphertext.len());
    body.extend_from_slice(&nonce);
    body.extend_from_slice(&ciphertext);

    Ok(codec::assemble(header, &body, footer))
}

/// Decrypts a v2 local token and returns the plaintext.
pub fn decrypt_v2(
    token: &str,
    key: &[u8; 32],
    footer: &[u8],
    header: &str,
) -> PasetoResult<String> {
    use chacha20poly1305::aead::{Aead, Payload};
    use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};

    let (payload, token_footer) = codec::decapsulate(token, header, footer)?;
    if payload.len() < V2_NONCE_SIZE + V2_TAG_SIZE {
        return Err(PasetoError::MalformedToken);
    }

    let nonce = &payload[..V2_NONCE_SIZE];
    let ciphertext = &payload[V2_NONCE_SIZE..];

    let pre_auth = pae(&[header.as_bytes(), nonce, &token_footer])?;
    let cipher = XChaCha20Poly1305::new(key.into());
    let plaintext = cipher
        .decrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: &pre_auth,
            },
        )
        .map_err(|_| PasetoError::SecurityViolation)?;

    String::from_utf8(plaintext).map_err(|_| PasetoError::Encoding)
}
