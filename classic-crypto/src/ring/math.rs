//! Implementation of ring ops using modular arithmetic.

use crate::errors::ClassicCryptoError;

use super::{ModularScalar, extended_gcd};

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
///
/// All operations accept arbitrary `i64` inputs and return values normalized
/// into `[0, modulus)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// assert!(Ring::try_with(26).is_ok());
    /// assert!(Ring::try_with(1).is_err());
    /// assert!(Ring::try_with(0).is_err());
    /// ```
    pub fn try_with(modulus: u64) -> Result<Self, ClassicCryptoError> {
        if modulus <= 1 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus {} does not fit in i64",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Wraps `value` as an element of this ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.element(12).value(), 5);
    /// ```
    pub fn element(&self, value: i64) -> ModularScalar {
        ModularScalar::in_ring(value, *self)
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(30), 4);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus as i64)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.add(18, 16), 8);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let sum = self.normalize(a) as i128 + self.normalize(b) as i128;

        (sum % self.modulus as i128) as i64
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(7, 16), 17);
    /// assert_eq!(ring.sub(-2, 3), 21);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let difference = self.normalize(a) as i128 - self.normalize(b) as i128;

        difference.rem_euclid(self.modulus as i128) as i64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.mul(15, 2), 1);
    /// assert_eq!(ring.mul(-2, 6), 17);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        (product % self.modulus as i128) as i64
    }

    /// Computes the additive inverse `-a mod modulus`.
    pub fn neg(&self, a: i64) -> i64 {
        self.sub(0, a)
    }

    /// Computes `a^exponent mod modulus` by square-and-multiply.
    ///
    /// `a^0` is the multiplicative identity `1 mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(7).unwrap();
    /// assert_eq!(ring.pow(5, 3), 6);
    /// assert_eq!(ring.pow(5, 0), 1);
    /// ```
    pub fn pow(&self, a: i64, mut exponent: u64) -> i64 {
        let mut base = self.normalize(a);
        let mut result = self.normalize(1);

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exponent >>= 1;
        }

        result
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NotInvertible` if `gcd(a, modulus) != 1` (this includes `a ≡ 0`).
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicCryptoError> {
        let a_norm = self.normalize(a);

        let (g, x, _) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(ClassicCryptoError::NotInvertible(format!(
                "{} has no inverse mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }

    /// Computes `a * b^-1 mod modulus`.
    ///
    /// # Errors
    ///
    /// Propagates `ClassicCryptoError::NotInvertible` from [`Ring::inv`].
    pub fn div(&self, a: i64, b: i64) -> Result<i64, ClassicCryptoError> {
        Ok(self.mul(a, self.inv(b)?))
    }
}

impl TryFrom<u64> for Ring {
    type Error = ClassicCryptoError;

    fn try_from(modulus: u64) -> Result<Self, Self::Error> {
        Ring::try_with(modulus)
    }
}

impl From<Ring> for u64 {
    fn from(ring: Ring) -> Self {
        ring.modulus
    }
}
