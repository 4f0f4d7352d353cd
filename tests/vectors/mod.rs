//! Test vector types for PASETO token tests.
//!
//! These types deserialize the JSON vector suites under `tests/vectors/`.
//! Success vectors carry the key material, the expected token, and the
//! expected payload; failure vectors carry a token that a conforming
//! implementation must reject.

// Some fields document the vector schema and are not read by every test
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for `local` tokens (shared-key encryption).
#[derive(Debug, Deserialize)]
pub struct LocalTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded 32-byte symmetric key
    pub key: String,
    /// Hex-encoded nonce seed (absent for failure vectors)
    pub nonce: Option<String>,
    /// Full token text
    pub token: String,
    /// Expected plaintext (absent for failure vectors)
    pub payload: Option<String>,
    /// Expected footer; empty when the token has none
    #[serde(default)]
    pub footer: String,
}

/// Test vector for `public` tokens (signed cleartext).
#[derive(Debug, Deserialize)]
pub struct PublicTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Signing key: a hex-encoded Ed25519 keypair for v2 suites. Absent
    /// for failure vectors and for v1, whose PSS signatures are randomized
    /// and cannot be reproduced byte for byte.
    #[serde(rename = "secret-key")]
    pub secret_key: Option<String>,
    /// Verifying key: a PEM document for v1 suites, hex-encoded bytes for v2
    #[serde(rename = "public-key")]
    pub public_key: String,
    /// Full token text
    pub token: String,
    /// Expected cleartext message (absent for failure vectors)
    pub payload: Option<String>,
    /// Expected footer; empty when the token has none
    #[serde(default)]
    pub footer: String,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
