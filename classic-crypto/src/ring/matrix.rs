//! Matrices over Z/mZ.

use crate::errors::ClassicCryptoError;
use crate::ring::matrix_ops::{
    adjugate, check_rectangular, determinant, identity_matrix, matrix_inverse, matrix_mul,
    matrix_vector_mul,
};
use crate::ring::{Matrix, ModularScalar, Ring, Vector};

/// A rectangular matrix whose entries are reduced into `[0, modulus)`.
///
/// The integer entries it was built from are kept so it can be re-read under
/// another modulus. Equality only looks at the reduced rows and the ring.
#[derive(Debug, Clone)]
pub struct ModularMatrix {
    rows: Matrix,
    ring: Ring,
    entries: Matrix,
}

impl PartialEq for ModularMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring && self.rows == other.rows
    }
}

impl Eq for ModularMatrix {}

impl ModularMatrix {
    /// Builds a matrix from `rows`, reducing each entry mod `modulus`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` if `modulus <= 1`.
    /// Returns `ClassicCryptoError::DimensionError` if the rows have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::ModularMatrix;
    /// let k = ModularMatrix::try_with(vec![vec![5, 34], vec![-24, 8]], 29).unwrap();
    /// assert_eq!(k.rows(), &vec![vec![5, 5], vec![5, 8]]);
    /// ```
    pub fn try_with(rows: Matrix, modulus: u64) -> Result<Self, ClassicCryptoError> {
        Self::in_ring(rows, Ring::try_with(modulus)?)
    }

    pub fn in_ring(rows: Matrix, ring: Ring) -> Result<Self, ClassicCryptoError> {
        check_rectangular(&rows)?;
        let reduced = rows
            .iter()
            .map(|row| row.iter().map(|&v| ring.normalize(v)).collect())
            .collect();
        Ok(Self {
            rows: reduced,
            ring,
            entries: rows,
        })
    }

    /// Wraps rows that are already reduced under `ring`.
    fn reduced(rows: Matrix, ring: Ring) -> Self {
        Self {
            entries: rows.clone(),
            rows,
            ring,
        }
    }

    /// The n×n identity matrix mod `modulus`.
    pub fn identity(n: usize, modulus: u64) -> Result<Self, ClassicCryptoError> {
        Self::try_with(identity_matrix(n), modulus)
    }

    pub fn rows(&self) -> &Matrix {
        &self.rows
    }

    pub fn into_rows(self) -> Matrix {
        self.rows
    }

    pub fn ring(&self) -> Ring {
        self.ring
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn is_square(&self) -> bool {
        let (rows, cols) = self.dimensions();
        rows == cols
    }

    fn check_same_ring(&self, other: &ModularMatrix) -> Result<(), ClassicCryptoError> {
        if self.ring != other.ring {
            return Err(ClassicCryptoError::FieldMismatch {
                left: self.modulus(),
                right: other.modulus(),
            });
        }
        Ok(())
    }

    /// Determinant mod m.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DimensionError` if the matrix is not square.
    pub fn determinant(&self) -> Result<ModularScalar, ClassicCryptoError> {
        Ok(self.ring.element(determinant(&self.rows, &self.ring)?))
    }

    /// Transposed cofactor matrix mod m.
    pub fn adjugate(&self) -> Result<ModularMatrix, ClassicCryptoError> {
        Ok(Self::reduced(adjugate(&self.rows, &self.ring)?, self.ring))
    }

    /// Inverse under this matrix's own modulus.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DimensionError` if the matrix is not square.
    /// Returns `ClassicCryptoError::NotInvertible` if `gcd(det, m) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::ModularMatrix;
    /// let k = ModularMatrix::try_with(vec![vec![5, 5], vec![5, 8]], 29).unwrap();
    /// assert_eq!(k.inverse().unwrap().rows(), &vec![vec![16, 19], vec![19, 10]]);
    /// ```
    pub fn inverse(&self) -> Result<ModularMatrix, ClassicCryptoError> {
        Ok(Self::reduced(matrix_inverse(&self.rows, &self.ring)?, self.ring))
    }

    /// Inverse of the integer entries this matrix was built from, read under another modulus.
    ///
    /// Matrices produced by `inverse`, `adjugate` or `mul` carry their reduced rows as entries.
    pub fn inverse_mod(&self, modulus: u64) -> Result<ModularMatrix, ClassicCryptoError> {
        Self::try_with(self.entries.clone(), modulus)?.inverse()
    }

    /// `self · other`; both operands must share the modulus.
    pub fn mul(&self, other: &ModularMatrix) -> Result<ModularMatrix, ClassicCryptoError> {
        self.check_same_ring(other)?;
        Ok(Self::reduced(
            matrix_mul(&self.rows, &other.rows, &self.ring)?,
            self.ring,
        ))
    }

    /// `self · v` for a column vector `v`.
    pub fn mul_vector(&self, v: &[i64]) -> Result<Vector, ClassicCryptoError> {
        matrix_vector_mul(&self.rows, v, &self.ring)
    }

    pub fn is_identity(&self) -> bool {
        self.is_square() && self.rows == identity_matrix(self.rows.len())
    }
}
