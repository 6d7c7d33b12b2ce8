use crate::errors::ClassicCryptoError;
use crate::ring::{Ring, Vector};

use super::ring_and_codec;

/// `(m_i + k) mod m` at every position. `k` may be any integer.
pub fn shift(k: i64, message: &[i64], ring: &Ring) -> Vector {
    message
        .iter()
        .map(|&symbol| (ring.element(symbol) + k).value())
        .collect()
}

/// `(c_i - k) mod m` at every position.
pub fn unshift(k: i64, ciphertext: &[i64], ring: &Ring) -> Vector {
    ciphertext
        .iter()
        .map(|&symbol| (ring.element(symbol) - k).value())
        .collect()
}

/// Shifts every symbol forward by `k` and encodes the result.
///
/// # Errors
///
/// `InvalidModulus` for `modulus < 2`, `CodecError` if no alphabet exists for `modulus`.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::caesar_encrypt;
/// assert_eq!(caesar_encrypt(16, &[18, 19, 14, 15], 26).unwrap(), "IJEF");
/// ```
pub fn caesar_encrypt(k: i64, message: &[i64], modulus: u64) -> Result<String, ClassicCryptoError> {
    let (ring, codec) = ring_and_codec(modulus)?;
    codec.encode(&shift(k, message, &ring))
}

/// Shifts every symbol back by `k` and encodes the result.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::caesar_decrypt;
/// assert_eq!(caesar_decrypt(16, &[19, 7, 4, 5], 26).unwrap(), "DROP");
/// ```
pub fn caesar_decrypt(
    k: i64,
    ciphertext: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    let (ring, codec) = ring_and_codec(modulus)?;
    codec.encode(&unshift(k, ciphertext, &ring))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Codec;

    #[test]
    fn test_shift_wraps_and_reduces_key() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(26)?;
        assert_eq!(shift(3, &[23, 24, 25], &ring), vec![0, 1, 2]);
        assert_eq!(shift(29, &[0], &ring), vec![3]);
        assert_eq!(shift(-1, &[0], &ring), vec![25]);
        assert_eq!(unshift(3, &[0, 1, 2], &ring), vec![23, 24, 25]);
        Ok(())
    }

    #[test]
    fn test_caesar_vectors() -> Result<(), ClassicCryptoError> {
        assert_eq!(caesar_encrypt(16, &[18, 19, 14, 15], 26)?, "IJEF");
        assert_eq!(caesar_decrypt(16, &[19, 7, 4, 5], 26)?, "DROP");
        assert_eq!(caesar_encrypt(0, &[], 26)?, "");
        Ok(())
    }

    #[test]
    fn test_caesar_mod29_reaches_extra_symbols() -> Result<(), ClassicCryptoError> {
        assert_eq!(caesar_encrypt(3, &[25, 24, 23], 29)?, "!?_");
        assert_eq!(caesar_decrypt(3, &[28], 29)?, "Z");
        Ok(())
    }

    #[test]
    fn test_caesar_round_trip() -> Result<(), ClassicCryptoError> {
        let codec = Codec::mod26();
        let message = codec.decode("ATTACKATDAWN")?;
        let ciphertext = codec.decode(&caesar_encrypt(-57, &message, 26)?)?;
        assert_eq!(caesar_decrypt(-57, &ciphertext, 26)?, "ATTACKATDAWN");
        Ok(())
    }

    #[test]
    fn test_caesar_errors() {
        assert!(matches!(
            caesar_encrypt(1, &[0], 1),
            Err(ClassicCryptoError::InvalidModulus(_))
        ));
        assert!(matches!(
            caesar_encrypt(1, &[0], 27),
            Err(ClassicCryptoError::CodecError(_))
        ));
    }
}
