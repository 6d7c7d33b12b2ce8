use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, ModularMatrix, Ring, Vector};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{affine, caesar, ring_and_codec, vigenere};

/// Upper bound on redraws when looking for an invertible affine key.
pub const MAX_KEYGEN_ATTEMPTS: usize = 10_000;

/// A key for any of the ciphers in this crate, tagged by `kind` when serialized.
///
/// ```json
/// {"kind": "shift", "shift": 16}
/// {"kind": "keyword", "keyword": "PLUM"}
/// {"kind": "affine", "matrix": [[5, 5], [5, 8]], "offset": [9, 2]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Key {
    Shift { shift: i64 },
    Keyword { keyword: String },
    Affine { matrix: Matrix, offset: Vector },
}

impl Key {
    pub fn encrypt(&self, message: &[i64], modulus: u64) -> Result<String, ClassicCryptoError> {
        match self {
            Key::Shift { shift } => caesar::caesar_encrypt(*shift, message, modulus),
            Key::Keyword { keyword } => vigenere::vigenere_encrypt(keyword, message, modulus),
            Key::Affine { matrix, offset } => {
                affine::affine_encrypt(matrix, offset, message, modulus)
            }
        }
    }

    pub fn decrypt(&self, ciphertext: &[i64], modulus: u64) -> Result<String, ClassicCryptoError> {
        match self {
            Key::Shift { shift } => caesar::caesar_decrypt(*shift, ciphertext, modulus),
            Key::Keyword { keyword } => vigenere::vigenere_decrypt(keyword, ciphertext, modulus),
            Key::Affine { matrix, offset } => {
                affine::affine_decrypt(matrix, offset, ciphertext, modulus)
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ClassicCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ClassicCryptoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A shift drawn uniformly from `[1, modulus)`.
    ///
    /// # Errors
    ///
    /// `CodecError` if `modulus` has no alphabet.
    pub fn random_shift<R: Rng + ?Sized>(
        modulus: u64,
        rng: &mut R,
    ) -> Result<Self, ClassicCryptoError> {
        let (ring, _) = ring_and_codec(modulus)?;
        Ok(Key::Shift {
            shift: rng.random_range(1..ring.modulus() as i64),
        })
    }

    /// A keyword of `length` symbols from the alphabet of `modulus`.
    ///
    /// # Errors
    ///
    /// `DimensionError` for `length == 0`, `CodecError` if `modulus` has no alphabet.
    pub fn random_keyword<R: Rng + ?Sized>(
        length: usize,
        modulus: u64,
        rng: &mut R,
    ) -> Result<Self, ClassicCryptoError> {
        if length == 0 {
            return Err(ClassicCryptoError::DimensionError(
                "Keyword length must be at least 1".into(),
            ));
        }
        let (ring, codec) = ring_and_codec(modulus)?;
        let values = random_vector(length, &ring, rng);

        Ok(Key::Keyword {
            keyword: codec.encode(&values)?,
        })
    }

    /// An n×n affine key whose matrix is invertible mod `modulus`.
    ///
    /// Matrices are redrawn until `gcd(det, modulus) == 1`.
    ///
    /// # Errors
    ///
    /// `DimensionError` for `n == 0`, `CodecError` if `modulus` has no alphabet.
    /// `NotInvertible` if no invertible matrix turned up within [`MAX_KEYGEN_ATTEMPTS`] draws.
    pub fn random_affine<R: Rng + ?Sized>(
        n: usize,
        modulus: u64,
        rng: &mut R,
    ) -> Result<Self, ClassicCryptoError> {
        if n == 0 {
            return Err(ClassicCryptoError::DimensionError(
                "Affine key order must be at least 1".into(),
            ));
        }
        let (ring, _) = ring_and_codec(modulus)?;

        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            let rows: Matrix = (0..n).map(|_| random_vector(n, &ring, rng)).collect();
            let candidate = ModularMatrix::in_ring(rows, ring)?;
            if candidate.determinant()?.inverse().is_ok() {
                return Ok(Key::Affine {
                    matrix: candidate.into_rows(),
                    offset: random_vector(n, &ring, rng),
                });
            }
        }

        Err(ClassicCryptoError::NotInvertible(format!(
            "No invertible {}x{} matrix mod {} found in {} attempts",
            n, n, modulus, MAX_KEYGEN_ATTEMPTS
        )))
    }
}

fn random_vector<R: Rng + ?Sized>(length: usize, ring: &Ring, rng: &mut R) -> Vector {
    let m = ring.modulus() as i64;
    (0..length).map(|_| rng.random_range(0..m)).collect()
}
