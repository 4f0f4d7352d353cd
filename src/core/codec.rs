//! Token encapsulation and decapsulation.
//!
//! Tokens follow the format `version.purpose.payload[.footer]` where the
//! payload and footer segments are base64url without padding. Assembly is
//! shared by every produce operation; [`decapsulate`] is the shared
//! parsing/validation entry point for every decrypt/verify operation.

use base64::prelude::*;

use crate::core::compare::constant_time_equals;
use crate::core::error::{PasetoError, PasetoResult};

/// Assembles the final token text from its parts.
///
/// The footer segment is appended only when the footer is non-empty.
#[must_use]
pub fn assemble(header: &str, body: &[u8], footer: &[u8]) -> String {
    let mut token = format!("{header}{}", BASE64_URL_SAFE_NO_PAD.encode(body));
    if !footer.is_empty() {
        token.push('.');
        token.push_str(&BASE64_URL_SAFE_NO_PAD.encode(footer));
    }
    token
}

/// Parses and validates a token, returning (payload, footer).
///
/// # Arguments
///
/// * `token` - The full token text
/// * `header` - The expected `version.purpose.` header literal
/// * `footer` - The caller-supplied footer, empty when none
///
/// Footer handling: when the caller supplies a non-empty footer, the
/// token's embedded footer is decoded and compared in constant time
/// (prefixed with `.` on both sides) and a mismatch is a security
/// violation; the supplied footer becomes authoritative. When the caller
/// supplies nothing, the embedded footer is extracted verbatim and
/// trusted. The header prefix is then validated in constant time and the
/// payload decoded.
///
/// # Errors
///
/// * `PasetoError::MalformedToken` - missing or excess segments, or a
///   header mismatch
/// * `PasetoError::SecurityViolation` - footer mismatch
/// * `PasetoError::Encoding` - malformed base64 in footer or payload
pub fn decapsulate(token: &str, header: &str, footer: &[u8]) -> PasetoResult<(Vec<u8>, Vec<u8>)> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() < 3 || segments.len() > 4 {
        return Err(PasetoError::MalformedToken);
    }

    let embedded = match segments.get(3) {
        Some(segment) => BASE64_URL_SAFE_NO_PAD
            .decode(segment)
            .map_err(|_| PasetoError::Encoding)?,
        None => Vec::new(),
    };

    let authoritative_footer = if footer.is_empty() {
        // Trust-on-first-use path: no compare, embedded footer is taken
        // verbatim.
        embedded
    } else {
        let mut expected = Vec::with_capacity(1 + footer.len());
        expected.push(b'.');
        expected.extend_from_slice(footer);

        let mut actual = Vec::with_capacity(1 + embedded.len());
        actual.push(b'.');
        actual.extend_from_slice(&embedded);

        if !constant_time_equals(&expected, &actual) {
            return Err(PasetoError::SecurityViolation);
        }
        footer.to_vec()
    };

    let stripped = match segments.len() {
        4 => &token[..token.len() - segments[3].len() - 1],
        _ => token,
    };

    if stripped.len() < header.len()
        || !constant_time_equals(&stripped.as_bytes()[..header.len()], header.as_bytes())
    {
        return Err(PasetoError::MalformedToken);
    }

    let payload = BASE64_URL_SAFE_NO_PAD
        .decode(&stripped[header.len()..])
        .map_err(|_| PasetoError::Encoding)?;

    Ok((payload, authoritative_footer))
}
