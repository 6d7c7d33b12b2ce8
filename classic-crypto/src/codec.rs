use crate::errors::ClassicCryptoError;
use crate::preset::alphabet_table::{ALPHABET_MOD26, ALPHABET_MOD29, Alphabet, alphabet_for_modulus};
use crate::ring::Vector;

/// Bidirectional mapping between symbols and integers in `[0, modulus)`.
///
/// Backed by the preset tables; copying a `Codec` is free.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    modulus: u64,
    alphabet: &'static Alphabet,
}

impl Codec {
    /// The codec whose alphabet has exactly `modulus` symbols.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::CodecError` if no preset table covers `modulus` (only 26 and 29 do).
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::codec::Codec;
    /// assert!(Codec::for_modulus(29).is_ok());
    /// assert!(Codec::for_modulus(31).is_err());
    /// ```
    pub fn for_modulus(modulus: u64) -> Result<Self, ClassicCryptoError> {
        let alphabet = alphabet_for_modulus(modulus).ok_or_else(|| {
            ClassicCryptoError::CodecError(format!("No alphabet is defined for modulus {}", modulus))
        })?;

        Ok(Codec { modulus, alphabet })
    }

    /// `A..Z` for 0..25.
    pub fn mod26() -> Self {
        Codec {
            modulus: 26,
            alphabet: &*ALPHABET_MOD26,
        }
    }

    /// `A..Z` for 0..25, then `_`, `?`, `!`.
    pub fn mod29() -> Self {
        Codec {
            modulus: 29,
            alphabet: &*ALPHABET_MOD29,
        }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Integers to symbols.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::CodecError` for any value outside `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::codec::Codec;
    /// assert_eq!(Codec::mod26().encode(&[15, 11, 20, 12]).unwrap(), "PLUM");
    /// assert!(Codec::mod26().encode(&[26]).is_err());
    /// ```
    pub fn encode(&self, values: &[i64]) -> Result<String, ClassicCryptoError> {
        values
            .iter()
            .map(|&value| {
                usize::try_from(value)
                    .ok()
                    .and_then(|i| self.alphabet.symbols.get(i).copied())
                    .ok_or_else(|| {
                        ClassicCryptoError::CodecError(format!(
                            "Value {} has no symbol mod {}",
                            value, self.modulus
                        ))
                    })
            })
            .collect()
    }

    /// Symbols to integers.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::CodecError` for any symbol outside the table
    /// (lowercase letters and whitespace included).
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::codec::Codec;
    /// assert_eq!(Codec::mod29().decode("ST!").unwrap(), vec![18, 19, 28]);
    /// assert!(Codec::mod26().decode("ST!").is_err());
    /// ```
    pub fn decode(&self, text: &str) -> Result<Vector, ClassicCryptoError> {
        text.chars()
            .map(|symbol| {
                self.alphabet.index.get(&symbol).copied().ok_or_else(|| {
                    ClassicCryptoError::CodecError(format!(
                        "Symbol {:?} is not in the mod {} alphabet",
                        symbol, self.modulus
                    ))
                })
            })
            .collect()
    }
}
