//! Pre-authentication encoding (PAE).
//!
//! PAE deterministically serializes an ordered list of byte strings into a
//! single unambiguous buffer: an 8-byte little-endian element count, then
//! for each element an 8-byte little-endian byte length followed by the raw
//! bytes. The buffer is used as associated/signed data and must be
//! reconstructed identically on the verifying side for a token to validate.

use crate::core::error::{PasetoError, PasetoResult};

/// Encodes an ordered list of byte strings with the PAE layout.
///
/// # Arguments
///
/// * `pieces` - The byte strings to serialize, in order
///
/// # Errors
///
/// Returns `PasetoError::Encoding` if a length cannot be represented as a
/// 64-bit unsigned integer.
pub fn pae(pieces: &[&[u8]]) -> PasetoResult<Vec<u8>> {
    let total: usize = pieces.iter().map(|p| 8 + p.len()).sum();
    let mut out = Vec::with_capacity(8 + total);

    out.extend_from_slice(&encode_length(pieces.len())?);
    for piece in pieces {
        out.extend_from_slice(&encode_length(piece.len())?);
        out.extend_from_slice(piece);
    }

    Ok(out)
}

/// Encodes a length as 8 little-endian bytes.
fn encode_length(len: usize) -> PasetoResult<[u8; 8]> {
    let len = u64::try_from(len).map_err(|_| PasetoError::Encoding)?;
    Ok(len.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pae_empty_list() -> Result<(), PasetoError> {
        assert_eq!(pae(&[])?, [0u8; 8]);
        Ok(())
    }

    #[test]
    fn test_pae_single_empty_piece() -> Result<(), PasetoError> {
        let mut expected = vec![1, 0, 0, 0, 0, 0, 0, 0];
        expected.extend_from_slice(&[0u8; 8]);
        assert_eq!(pae(&[b""])?, expected);
        Ok(())
    }

    #[test]
    fn test_pae_two_empty_pieces() -> Result<(), PasetoError> {
        let mut expected = vec![2, 0, 0, 0, 0, 0, 0, 0];
        expected.extend_from_slice(&[0u8; 8]);
        expected.extend_from_slice(&[0u8; 8]);
        assert_eq!(pae(&[b"", b""])?, expected);
        Ok(())
    }

    #[test]
    fn test_pae_known_value() -> Result<(), PasetoError> {
        let mut expected = vec![1, 0, 0, 0, 0, 0, 0, 0];
        expected.extend_from_slice(&[4, 0, 0, 0, 0, 0, 0, 0]);
        expected.extend_from_slice(b"test");
        assert_eq!(pae(&[b"test"])?, expected);
        Ok(())
    }

    #[test]
    fn test_pae_preserves_order() -> Result<(), PasetoError> {
        let ab = pae(&[b"a", b"b"])?;
        let ba = pae(&[b"b", b"a"])?;
        assert_ne!(ab, ba);
        Ok(())
    }

    #[test]
    fn test_pae_deterministic() -> Result<(), PasetoError> {
        let pieces: &[&[u8]] = &[b"v2.local.", &[0x11; 24], b"footer"];
        assert_eq!(pae(pieces)?, pae(pieces)?);
        Ok(())
    }

    #[test]
    fn test_pae_length_layout() -> Result<(), PasetoError> {
        // 300 bytes needs two length bytes: 0x2c 0x01 little-endian.
        let piece = vec![0xaa; 300];
        let encoded = pae(&[&piece])?;
        assert_eq!(&encoded[..8], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&encoded[8..16], &[0x2c, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&encoded[16..], piece.as_slice());
        Ok(())
    }
}
