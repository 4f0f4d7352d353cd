//! Error types for PASETO operations.
//!
//! This module provides a unified error type for all token operations.
//! Error messages are intentionally vague for security-sensitive failures
//! to avoid leaking information that could aid attacks; callers performing
//! verification should treat [`PasetoError::SecurityViolation`] and
//! [`PasetoError::MalformedToken`] identically and simply reject the token.

use thiserror::Error;

/// Errors that can occur when building or validating PASETO tokens.
#[derive(Debug, Error)]
pub enum PasetoError {
    /// The key is tagged for a different protocol version than the
    /// operation it was used with.
    #[error("The given key is not intended for this version of PASETO")]
    InvalidVersion,

    /// Malformed base64/hex input, a payload that is not valid UTF-8, or
    /// a value whose length cannot be safely encoded.
    #[error("Invalid encoding detected")]
    Encoding,

    /// MAC or footer mismatch, invalid signature, or AEAD integrity failure.
    /// Intentionally vague for security.
    #[error("Token verification failed")]
    SecurityViolation,

    /// Wrong header, missing segments, or a truncated payload.
    #[error("Invalid token structure")]
    MalformedToken,

    /// The key material is invalid (wrong size, shape, or format).
    #[error("Invalid key material")]
    InvalidKeyMaterial,
}

/// Result type alias for PASETO operations.
pub type PasetoResult<T> = Result<T, PasetoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PasetoError::InvalidVersion;
        assert_eq!(
            err.to_string(),
            "The given key is not intended for this version of PASETO"
        );

        let err = PasetoError::Encoding;
        assert_eq!(err.to_string(), "Invalid encoding detected");

        let err = PasetoError::SecurityViolation;
        assert_eq!(err.to_string(), "Token verification failed");

        let err = PasetoError::MalformedToken;
        assert_eq!(err.to_string(), "Invalid token structure");

        let err = PasetoError::InvalidKeyMaterial;
        assert_eq!(err.to_string(), "Invalid key material");
    }

    #[test]
    fn test_error_debug() {
        let err = PasetoError::SecurityViolation;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("SecurityViolation"));
    }
}
