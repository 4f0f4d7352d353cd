//! Fixed-time byte comparison.
//!
//! Used for header-prefix validation, caller-supplied-footer validation,
//! and MAC validation in the v1 suite. The v2 AEAD and signature
//! primitives verify in constant time internally.

/// Compares two byte buffers in constant time.
///
/// Returns `true` iff the buffers are byte-for-byte equal. The comparison
/// time is independent of the buffers' contents and of the position of the
/// first difference. Differing lengths return `false` immediately; length
/// is not secret.
#[must_use]
pub fn constant_time_equals(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;

    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
