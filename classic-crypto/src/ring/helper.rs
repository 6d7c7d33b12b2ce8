use crate::errors::ClassicCryptoError;

use num_integer::Integer;

/// Computes the greatest common divisor of two numbers (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b), with g >= 0.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_x, x) = (x, old_x - quotient * x);
        (old_y, y) = (y, old_y - quotient * y);
    }

    if old_r < 0 {
        return (-old_r, -old_x, -old_y);
    }

    (old_r, old_x, old_y)
}

/// Finds `x⁻¹ mod modulus` by trying every candidate `1, 2, …` in turn.
///
/// This is O(modulus) and only kept as an independent oracle for the
/// extended-Euclid inverse. The search stops at the first multiple of
/// `modulus` (no inverse can follow) and never runs past `modulus` steps.
///
/// # Errors
///
/// Returns `ClassicCryptoError::NotInvertible` when `gcd(x, modulus) != 1`.
/// Returns `ClassicCryptoError::InvalidModulus` when `modulus <= 1`.
pub fn inverse_by_search(x: i64, modulus: i64) -> Result<i64, ClassicCryptoError> {
    if modulus <= 1 {
        return Err(ClassicCryptoError::InvalidModulus(format!(
            "Modulus must be greater than 1, got {}",
            modulus
        )));
    }

    let x = x.rem_euclid(modulus) as i128;
    let m = modulus as i128;
    for candidate in 1..m {
        match (candidate * x) % m {
            0 => break,
            1 => return Ok(candidate as i64),
            _ => {}
        }
    }

    Err(ClassicCryptoError::NotInvertible(format!(
        "{} has no inverse mod {}",
        x, modulus
    )))
}
