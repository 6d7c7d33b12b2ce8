use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, Ring, Vector};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &[i64], ring: &Ring) -> Result<Vector, ClassicCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(ClassicCryptoError::DimensionError(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    a.iter()
        .enumerate()
        .map(|(i, row)| {
            if row.len() != n {
                return Err(ClassicCryptoError::DimensionError(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            Ok(row
                .iter()
                .zip(x)
                .fold(0, |sum, (&a_ij, &x_j)| ring.add(sum, ring.mul(a_ij, x_j))))
        })
        .collect()
}

/// Computes the vector sum `c = a + b` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` if the vectors have different lengths.
pub fn vector_add(a: &[i64], b: &[i64], ring: &Ring) -> Result<Vector, ClassicCryptoError> {
    if a.len() != b.len() {
        return Err(ClassicCryptoError::DimensionError(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.add(x, y)).collect())
}

/// Computes the vector difference `c = a - b` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` if the vectors have different lengths.
pub fn vector_sub(a: &[i64], b: &[i64], ring: &Ring) -> Result<Vector, ClassicCryptoError> {
    if a.len() != b.len() {
        return Err(ClassicCryptoError::DimensionError(format!(
            "Vector lengths must match for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.sub(x, y)).collect())
}

/// Computes the matrix product `C = AB` modulo the ring's modulus.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = check_rectangular(a)?; // cols in A
    if b.len() != m_common {
        return Err(ClassicCryptoError::DimensionError(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    if m_common == 0 {
        return Ok(vec![Vec::new(); n]);
    }
    let p = check_rectangular(b)?; // cols in B

    let mut c = vec![vec![0; p]; n];
    for i in 0..n {
        for j in 0..p {
            c[i][j] = (0..m_common).fold(0, |sum, k| ring.add(sum, ring.mul(a[i][k], b[k][j])));
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Returns the common row length, or `DimensionError` for ragged rows.
pub fn check_rectangular(matrix: &Matrix) -> Result<usize, ClassicCryptoError> {
    let cols = matrix.first().map_or(0, Vec::len);
    match matrix.iter().position(|row| row.len() != cols) {
        Some(i) => Err(ClassicCryptoError::DimensionError(format!(
            "Row {} has length {} but expected {}",
            i,
            matrix[i].len(),
            cols
        ))),
        None => Ok(cols),
    }
}

/// Returns the order `n` of an n×n matrix, or `DimensionError` otherwise.
pub fn check_square(matrix: &Matrix) -> Result<usize, ClassicCryptoError> {
    let n = matrix.len();
    let cols = check_rectangular(matrix)?;
    if n > 0 && cols != n {
        return Err(ClassicCryptoError::DimensionError(format!(
            "Matrix must be square, got {}x{}",
            n, cols
        )));
    }
    Ok(n)
}

/// Exact determinant of a square integer matrix (Bareiss fraction-free elimination).
///
/// The empty matrix has determinant 1.
pub fn integer_determinant(matrix: &[Vec<BigInt>]) -> BigInt {
    let n = matrix.len();
    if n == 0 {
        return BigInt::one();
    }

    let mut m = matrix.to_vec();
    let mut negate = false;
    let mut prev_pivot = BigInt::one();

    for k in 0..n - 1 {
        let Some(pivot_row) = (k..n).find(|&i| !m[i][k].is_zero()) else {
            return BigInt::zero();
        };
        if pivot_row != k {
            m.swap(k, pivot_row);
            negate = !negate;
        }

        for i in k + 1..n {
            for j in k + 1..n {
                // exact: Bareiss guarantees prev_pivot divides the numerator
                let numerator = &m[i][j] * &m[k][k] - &m[i][k] * &m[k][j];
                m[i][j] = numerator / &prev_pivot;
            }
            m[i][k] = BigInt::zero();
        }
        prev_pivot = m[k][k].clone();
    }

    let det = m[n - 1][n - 1].clone();
    if negate { -det } else { det }
}

/// Removes `row` and `col` from a square matrix.
fn minor(matrix: &[Vec<BigInt>], row: usize, col: usize) -> Vec<Vec<BigInt>> {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, v)| v.clone())
                .collect()
        })
        .collect()
}

/// Integer adjugate (transposed cofactor matrix) of a square integer matrix.
///
/// Satisfies `A · adj(A) = det(A) · I` over the integers.
pub fn integer_adjugate(matrix: &[Vec<BigInt>]) -> Vec<Vec<BigInt>> {
    let n = matrix.len();
    let mut adjugate = vec![vec![BigInt::zero(); n]; n];
    for i in 0..n {
        for j in 0..n {
            let cofactor = integer_determinant(&minor(matrix, i, j));
            adjugate[j][i] = if (i + j) % 2 == 0 { cofactor } else { -cofactor };
        }
    }
    adjugate
}

fn to_big_int(matrix: &Matrix, ring: &Ring) -> Vec<Vec<BigInt>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&v| BigInt::from(ring.normalize(v))).collect())
        .collect()
}

/// Reduces an arbitrary-size integer into `[0, modulus)`.
fn reduce(value: &BigInt, ring: &Ring) -> Result<i64, ClassicCryptoError> {
    let modulus = BigInt::from(ring.modulus());
    value.mod_floor(&modulus).to_i64().ok_or_else(|| {
        ClassicCryptoError::InvalidModulus(format!(
            "Residue of {} does not fit in i64 under modulus {}",
            value,
            ring.modulus()
        ))
    })
}

/// Computes `det(matrix) mod m` exactly.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` if the matrix is not square.
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, ClassicCryptoError> {
    check_square(matrix)?;
    reduce(&integer_determinant(&to_big_int(matrix, ring)), ring)
}

/// Computes the adjugate of a square matrix, reduced mod m.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` if the matrix is not square.
pub fn adjugate(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    check_square(matrix)?;
    integer_adjugate(&to_big_int(matrix, ring))
        .iter()
        .map(|row| row.iter().map(|v| reduce(v, ring)).collect::<Result<Vector, _>>())
        .collect()
}

/// Inverse of a square matrix modulo m: `adj(A) · det(A)⁻¹ mod m`.
///
/// The inverse exists exactly when `gcd(det(A), m) == 1`; `m` need not be prime.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionError` if the matrix is not square.
/// Returns `ClassicCryptoError::NotInvertible` if the determinant shares a factor with m.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = check_square(matrix)?;
    // empty = empty
    if n == 0 {
        return Ok(Vec::new());
    }

    let big = to_big_int(matrix, ring);
    let det = reduce(&integer_determinant(&big), ring)?;
    let det_inv = ring.inv(det).map_err(|_| {
        ClassicCryptoError::NotInvertible(format!(
            "matrix determinant {} is not invertible mod {}",
            det,
            ring.modulus()
        ))
    })?;

    integer_adjugate(&big)
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| reduce(v, ring).map(|entry| ring.mul(entry, det_inv)))
                .collect::<Result<Vector, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ring() -> Ring {
        Ring::try_with(13).unwrap()
    }

    #[test]
    fn test_vector_add_ok() {
        let ring = test_ring();
        let a = vec![1, 2, 3];
        let b = vec![10, 11, 12];
        let expected = vec![11, 0, 2]; // (1+10)%13=11, (2+11)%13=0, (3+12)%13=15%13=2
        assert_eq!(vector_add(&a, &b, &ring).unwrap(), expected);
    }

    #[test]
    fn test_vector_add_dimension_mismatch() {
        let ring = test_ring();
        assert!(matches!(
            vector_add(&[1, 2, 3], &[10, 11], &ring),
            Err(ClassicCryptoError::DimensionError(_))
        ));
    }

    #[test]
    fn test_vector_sub_ok() {
        let ring = test_ring();
        let a = vec![1, 2, 3];
        let b = vec![10, 1, 5];
        let expected = vec![4, 1, 11]; // -9%13 = 4, 1, -2%13 = 11
        assert_eq!(vector_sub(&a, &b, &ring).unwrap(), expected);
    }

    #[test]
    fn test_matrix_vector_mul_ok() {
        let ring = Ring::try_with(29).unwrap();
        let k = vec![vec![5, 5], vec![5, 8]];
        // (5*18 + 5*7) % 29 = 125 % 29 = 9, (5*18 + 8*7) % 29 = 146 % 29 = 1
        assert_eq!(matrix_vector_mul(&k, &[18, 7], &ring).unwrap(), vec![9, 1]);
    }

    #[test]
    fn test_matrix_vector_mul_dimension_mismatch() {
        let ring = test_ring();
        let a = vec![vec![1, 2], vec![3, 4]];
        assert!(matrix_vector_mul(&a, &[5, 6, 7], &ring).is_err());

        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matrix_vector_mul(&ragged, &[5, 6], &ring).is_err());
    }

    #[test]
    fn test_matrix_mul_ok() {
        let ring = test_ring();
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6], vec![7, 8]];
        // [[19, 22], [43, 50]] mod 13
        let expected = vec![vec![6, 9], vec![4, 11]];
        assert_eq!(matrix_mul(&a, &b, &ring).unwrap(), expected);
    }

    #[test]
    fn test_matrix_mul_dimension_mismatch() {
        let ring = test_ring();
        let c = vec![vec![1], vec![2]]; // 2x1
        let d = vec![vec![3, 4]]; // 1x2
        assert_eq!(matrix_mul(&c, &d, &ring).unwrap(), vec![vec![3, 4], vec![6, 8]]);

        let e = vec![vec![1, 2], vec![3, 4]]; // 2x2
        let f = vec![vec![1], vec![2], vec![3]]; // 3x1
        assert!(matrix_mul(&e, &f, &ring).is_err());
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(identity_matrix(3), vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        assert_eq!(identity_matrix(1), vec![vec![1]]);
        assert_eq!(identity_matrix(0), Matrix::new());
    }

    #[test]
    fn test_check_square() {
        assert_eq!(check_square(&vec![vec![1, 2], vec![3, 4]]).unwrap(), 2);
        assert_eq!(check_square(&Matrix::new()).unwrap(), 0);
        assert!(check_square(&vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
        assert!(check_square(&vec![vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_integer_determinant() {
        let big = |m: Vec<Vec<i64>>| -> Vec<Vec<BigInt>> {
            m.into_iter()
                .map(|r| r.into_iter().map(BigInt::from).collect())
                .collect()
        };
        assert_eq!(integer_determinant(&big(vec![vec![5, 5], vec![5, 8]])), BigInt::from(15));
        assert_eq!(
            integer_determinant(&big(vec![vec![1, 2, 3], vec![0, 2, 1], vec![0, 3, 4]])),
            BigInt::from(5)
        );
        // needs a row swap
        assert_eq!(
            integer_determinant(&big(vec![vec![0, 1, 2], vec![1, 0, 3], vec![4, -3, 8]])),
            BigInt::from(-2)
        );
        assert_eq!(integer_determinant(&big(vec![vec![1, 2], vec![2, 4]])), BigInt::zero());
        assert_eq!(integer_determinant(&big(vec![vec![-7]])), BigInt::from(-7));
    }

    #[test]
    fn test_determinant_mod() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(26)?;
        assert_eq!(determinant(&vec![vec![3, 3], vec![2, 5]], &ring)?, 9);
        assert_eq!(determinant(&vec![vec![1, 3], vec![3, 1]], &ring)?, 18); // -8 mod 26
        assert!(determinant(&vec![vec![1, 2, 3]], &ring).is_err());
        Ok(())
    }

    #[test]
    fn test_adjugate() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(29)?;
        assert_eq!(
            adjugate(&vec![vec![5, 5], vec![5, 8]], &ring)?,
            vec![vec![8, 24], vec![24, 5]]
        );
        Ok(())
    }

    #[test]
    fn test_matrix_inverse_ok() {
        let ring = Ring::try_with(26).unwrap();
        let matrix = vec![vec![3, 3], vec![2, 5]];
        // det = 9, 9^-1 = 3, adj = [[5, -3], [-2, 3]] => 3 * adj mod 26
        let expected_inv = vec![vec![15, 17], vec![20, 9]];
        match matrix_inverse(&matrix, &ring) {
            Ok(inv) => assert_eq!(inv, expected_inv),
            Err(e) => panic!("Inversion failed: {:?}", e),
        }

        let product = matrix_mul(&matrix, &expected_inv, &ring).unwrap();
        assert_eq!(product, identity_matrix(2));
    }

    #[test]
    fn test_matrix_inverse_3x3_mod_7() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(7)?;
        let matrix = vec![vec![1, 2, 3], vec![0, 2, 1], vec![0, 3, 4]];
        let inv = matrix_inverse(&matrix, &ring)?;
        assert_eq!(inv, vec![vec![1, 3, 2], vec![0, 5, 4], vec![0, 5, 6]]);
        assert_eq!(matrix_mul(&matrix, &inv, &ring)?, identity_matrix(3));
        Ok(())
    }

    #[test]
    fn test_matrix_inverse_singular() {
        let ring = test_ring();
        let matrix = vec![vec![1, 2], vec![2, 4]]; // Row 2 is 2*Row 1
        assert!(matches!(
            matrix_inverse(&matrix, &ring),
            Err(ClassicCryptoError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_matrix_inverse_determinant_shares_factor() {
        // det = 9 - 1 = 8, gcd(8, 26) = 2
        let ring = Ring::try_with(26).unwrap();
        assert!(matches!(
            matrix_inverse(&vec![vec![3, 1], vec![1, 3]], &ring),
            Err(ClassicCryptoError::NotInvertible(_))
        ));
    }

    #[test]
    fn test_matrix_inverse_non_square() {
        let ring = test_ring();
        assert!(matches!(
            matrix_inverse(&vec![vec![1, 2, 3], vec![4, 5, 6]], &ring),
            Err(ClassicCryptoError::DimensionError(_))
        ));
    }

    #[test]
    fn test_matrix_inverse_1x1_and_empty() -> Result<(), ClassicCryptoError> {
        let ring = Ring::try_with(26)?;
        assert_eq!(matrix_inverse(&vec![vec![9]], &ring)?, vec![vec![3]]);
        assert_eq!(matrix_inverse(&Matrix::new(), &ring)?, Matrix::new());
        Ok(())
    }
}
