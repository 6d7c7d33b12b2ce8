use std::iter;

use crate::codec::Codec;
use crate::errors::ClassicCryptoError;
use crate::ring::Vector;
use crate::ring::matrix_ops::{vector_add, vector_sub};

use super::ring_and_codec;

/// Decodes a keyword after dropping every whitespace character.
pub fn keyword_to_vector(keyword: &str, codec: &Codec) -> Result<Vector, ClassicCryptoError> {
    let stripped: String = keyword.chars().filter(|c| !c.is_whitespace()).collect();
    codec.decode(&stripped)
}

/// Repeats `key` `⌈length / key.len()⌉` times and truncates to exactly `length`.
///
/// A key at least as long as the message is simply truncated (one-time pad).
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` for an empty key, unless `length` is 0.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::vigenere::expand_key;
/// assert_eq!(expand_key(&[15, 11, 20, 12], 6).unwrap(), vec![15, 11, 20, 12, 15, 11]);
/// assert_eq!(expand_key(&[1, 2, 3], 2).unwrap(), vec![1, 2]);
/// ```
pub fn expand_key(key: &[i64], length: usize) -> Result<Vector, ClassicCryptoError> {
    if length == 0 {
        return Ok(Vector::new());
    }
    if key.is_empty() {
        return Err(ClassicCryptoError::DimensionError(
            "Vigenère key must contain at least one symbol".to_string(),
        ));
    }

    let repetitions = length.div_ceil(key.len());
    Ok(iter::repeat_n(key, repetitions)
        .flatten()
        .copied()
        .take(length)
        .collect())
}

fn expanded_keyword(
    keyword: &str,
    length: usize,
    codec: &Codec,
) -> Result<Vector, ClassicCryptoError> {
    expand_key(&keyword_to_vector(keyword, codec)?, length)
}

/// Adds the cyclically repeated keyword to the message, position by position.
///
/// # Errors
///
/// `CodecError` if the keyword holds a symbol outside the alphabet of `modulus`,
/// `DimensionError` if the keyword is empty after stripping whitespace.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::vigenere_encrypt;
/// let message = [18, 4, 11, 11, 0, 11, 11, 14, 20, 17, 18, 7, 0, 17, 4, 18];
/// assert_eq!(vigenere_encrypt("PLUM", &message, 26).unwrap(), "HPFXPWFAJCMTPCYE");
/// ```
pub fn vigenere_encrypt(
    keyword: &str,
    message: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    let (ring, codec) = ring_and_codec(modulus)?;
    let key = expanded_keyword(keyword, message.len(), &codec)?;
    codec.encode(&vector_add(message, &key, &ring)?)
}

/// Subtracts the cyclically repeated keyword from the ciphertext.
pub fn vigenere_decrypt(
    keyword: &str,
    ciphertext: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    let (ring, codec) = ring_and_codec(modulus)?;
    let key = expanded_keyword(keyword, ciphertext.len(), &codec)?;
    codec.encode(&vector_sub(ciphertext, &key, &ring)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_whitespace_is_stripped() -> Result<(), ClassicCryptoError> {
        let codec = Codec::mod26();
        assert_eq!(keyword_to_vector("PL U\tM", &codec)?, vec![15, 11, 20, 12]);
        assert!(matches!(
            keyword_to_vector("plum", &codec),
            Err(ClassicCryptoError::CodecError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_expand_key_lengths() -> Result<(), ClassicCryptoError> {
        assert_eq!(expand_key(&[1, 2], 4)?, vec![1, 2, 1, 2]);
        assert_eq!(expand_key(&[1, 2], 5)?, vec![1, 2, 1, 2, 1]);
        assert_eq!(expand_key(&[1, 2], 0)?, Vector::new());
        assert_eq!(expand_key(&[], 0)?, Vector::new());
        assert!(matches!(
            expand_key(&[], 3),
            Err(ClassicCryptoError::DimensionError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_encrypt_odd_length_message() -> Result<(), ClassicCryptoError> {
        assert_eq!(vigenere_encrypt("PLUM", &[18, 4, 11, 11, 0, 11, 11], 26)?, "HPFXPWF");
        assert_eq!(vigenere_encrypt("PL UM", &[18, 4, 11, 11, 0], 26)?, "HPFXP");
        Ok(())
    }

    #[test]
    fn test_decrypt_vectors() -> Result<(), ClassicCryptoError> {
        let ciphertext = [9, 0, 13, 19, 19, 13, 11, 16, 19, 21];
        assert_eq!(vigenere_decrypt("PLUM", &ciphertext, 26)?, "UPTHECREEK");
        assert_eq!(vigenere_decrypt("PLUM", &[9, 0, 13], 26)?, "UPT");
        assert_eq!(vigenere_decrypt("PL U M", &ciphertext[..6], 26)?, "UPTHEC");
        Ok(())
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert!(matches!(
            vigenere_encrypt("   ", &[1, 2], 26),
            Err(ClassicCryptoError::DimensionError(_))
        ));
    }

    #[test]
    fn test_empty_message_needs_no_key() -> Result<(), ClassicCryptoError> {
        assert_eq!(vigenere_encrypt("", &[], 26)?, "");
        assert_eq!(vigenere_decrypt(" ", &[], 29)?, "");
        // the keyword is still decoded
        assert!(matches!(
            vigenere_encrypt("plum", &[], 26),
            Err(ClassicCryptoError::CodecError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_mod29_keyword_may_use_extra_symbols() -> Result<(), ClassicCryptoError> {
        // '!' = 28, so the key shifts by -1
        assert_eq!(vigenere_encrypt("!", &[1, 2, 0], 29)?, "AB!");
        assert_eq!(vigenere_decrypt("!", &[0, 1, 28], 29)?, "BCA");
        Ok(())
    }
}
