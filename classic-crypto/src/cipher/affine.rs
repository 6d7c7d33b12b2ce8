use crate::errors::ClassicCryptoError;
use crate::ring::matrix_ops::vector_add;
use crate::ring::{Matrix, ModularMatrix, Ring, Vector};

use itertools::Itertools;

use super::ring_and_codec;

/// The pair `(K, L)` of an n-dimensional affine (Hill) cipher: `c = K·m + L (mod m)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineKey {
    matrix: ModularMatrix,
    offset: Vector,
}

impl AffineKey {
    /// Builds a key from an n×n matrix and a length-n offset, both reduced mod `modulus`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DimensionError` if the matrix is not square, is empty,
    /// or if `offset` does not have length n.
    pub fn try_with(
        matrix: Matrix,
        offset: Vector,
        modulus: u64,
    ) -> Result<Self, ClassicCryptoError> {
        Self::in_ring(matrix, offset, Ring::try_with(modulus)?)
    }

    pub fn in_ring(
        matrix: Matrix,
        offset: Vector,
        ring: Ring,
    ) -> Result<Self, ClassicCryptoError> {
        let matrix = ModularMatrix::in_ring(matrix, ring)?;
        let (rows, cols) = matrix.dimensions();
        if rows == 0 || rows != cols {
            return Err(ClassicCryptoError::DimensionError(format!(
                "Key matrix must be n×n with n >= 1, got {}x{}",
                rows, cols
            )));
        }
        if offset.len() != rows {
            return Err(ClassicCryptoError::DimensionError(format!(
                "Offset length ({}) must match key order ({})",
                offset.len(),
                rows
            )));
        }

        let offset = offset.into_iter().map(|v| ring.normalize(v)).collect();
        Ok(Self { matrix, offset })
    }

    /// The block length n.
    pub fn block_size(&self) -> usize {
        self.offset.len()
    }

    pub fn matrix(&self) -> &ModularMatrix {
        &self.matrix
    }

    pub fn offset(&self) -> &[i64] {
        &self.offset
    }

    /// `K·block + L`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DimensionError` if `block` does not have length n.
    pub fn apply(&self, block: &[i64]) -> Result<Vector, ClassicCryptoError> {
        if block.len() != self.block_size() {
            return Err(ClassicCryptoError::DimensionError(format!(
                "Message block length ({}) must match key order ({})",
                block.len(),
                self.block_size()
            )));
        }
        vector_add(&self.matrix.mul_vector(block)?, &self.offset, &self.matrix.ring())
    }

    /// The decryption key `(K⁻¹, −K⁻¹·L)`, so that applying it computes `K⁻¹·c − K⁻¹·L`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NotInvertible` if `det(K)` shares a factor with the modulus.
    pub fn inverse(&self) -> Result<AffineKey, ClassicCryptoError> {
        let ring = self.matrix.ring();
        let matrix = self.matrix.inverse()?;
        let offset = matrix
            .mul_vector(&self.offset)?
            .into_iter()
            .map(|v| ring.neg(v))
            .collect();

        Ok(Self { matrix, offset })
    }

    /// Applies the key to each consecutive n-block of `message`.
    fn apply_blocks(&self, message: &[i64]) -> Result<Vector, ClassicCryptoError> {
        let n = self.block_size();
        if message.len() % n != 0 {
            return Err(ClassicCryptoError::DimensionError(format!(
                "Message length ({}) must be a multiple of the key order ({})",
                message.len(),
                n
            )));
        }

        message
            .chunks(n)
            .map(|block| self.apply(block))
            .flatten_ok()
            .collect()
    }

    pub fn encrypt_blocks(&self, message: &[i64]) -> Result<Vector, ClassicCryptoError> {
        self.apply_blocks(message)
    }

    pub fn decrypt_blocks(&self, ciphertext: &[i64]) -> Result<Vector, ClassicCryptoError> {
        self.inverse()?.apply_blocks(ciphertext)
    }
}

/// Encrypts `message` block by block as `K·m + L (mod modulus)`.
///
/// # Errors
///
/// `DimensionError` if `k` is not n×n, `l` is not length n, or the message length
/// is not a multiple of n. `CodecError` if no alphabet exists for `modulus`.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::affine_encrypt;
/// let k = vec![vec![5, 5], vec![5, 8]];
/// assert_eq!(affine_encrypt(&k, &[9, 2], &[18, 7], 29).unwrap(), "SD");
/// ```
pub fn affine_encrypt(
    k: &Matrix,
    l: &[i64],
    message: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    let (ring, codec) = ring_and_codec(modulus)?;
    let key = AffineKey::in_ring(k.clone(), l.to_vec(), ring)?;
    codec.encode(&key.encrypt_blocks(message)?)
}

/// Decrypts `ciphertext` block by block as `K⁻¹·c − K⁻¹·L (mod modulus)`.
///
/// # Errors
///
/// As [`affine_encrypt`], plus `NotInvertible` if `k` has no inverse mod `modulus`.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::affine_decrypt;
/// let k = vec![vec![5, 5], vec![5, 8]];
/// assert_eq!(affine_decrypt(&k, &[9, 2], &[20, 12], 29).unwrap(), "ST");
/// ```
pub fn affine_decrypt(
    k: &Matrix,
    l: &[i64],
    ciphertext: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    let (ring, codec) = ring_and_codec(modulus)?;
    let key = AffineKey::in_ring(k.clone(), l.to_vec(), ring)?;
    codec.encode(&key.decrypt_blocks(ciphertext)?)
}

/// One-dimensional affine cipher: `(k·m_i + l) mod modulus` for every symbol.
///
/// # Example
///
/// ```
/// # use classic_crypto::cipher::affine_scalar_encrypt;
/// assert_eq!(affine_scalar_encrypt(9, 19, &[18, 7, 14, 14, 19], 26).unwrap(), "ZEPPI");
/// ```
pub fn affine_scalar_encrypt(
    k: i64,
    l: i64,
    message: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    affine_encrypt(&vec![vec![k]], &[l], message, modulus)
}

/// Inverse of [`affine_scalar_encrypt`]; fails `NotInvertible` when `gcd(k, modulus) != 1`.
pub fn affine_scalar_decrypt(
    k: i64,
    l: i64,
    ciphertext: &[i64],
    modulus: u64,
) -> Result<String, ClassicCryptoError> {
    affine_decrypt(&vec![vec![k]], &[l], ciphertext, modulus)
}
