//! Single elements of Z/mZ.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::errors::ClassicCryptoError;

use super::Ring;

/// An integer held in `[0, modulus)` together with its ring.
///
/// Binary operations take an [`Operand`]: another scalar (which must share the
/// modulus) or a plain integer (read in the receiver's ring).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModularScalar {
    value: i64,
    ring: Ring,
}

/// Right-hand side of a scalar operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operand {
    Field(ModularScalar),
    Plain(i64),
}

impl From<ModularScalar> for Operand {
    fn from(scalar: ModularScalar) -> Self {
        Operand::Field(scalar)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Plain(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Plain(value.into())
    }
}

impl ModularScalar {
    /// Creates `value mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` if `modulus <= 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::ModularScalar;
    /// let x = ModularScalar::try_with(-3, 26).unwrap();
    /// assert_eq!(x.value(), 23);
    /// assert!(ModularScalar::try_with(5, 1).is_err());
    /// ```
    pub fn try_with(value: i64, modulus: u64) -> Result<Self, ClassicCryptoError> {
        Ok(Self::in_ring(value, Ring::try_with(modulus)?))
    }

    pub(crate) fn in_ring(value: i64, ring: Ring) -> Self {
        Self {
            value: ring.normalize(value),
            ring,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// Brings `other` into this scalar's ring, rejecting elements of a different ring.
    fn lift(&self, other: impl Into<Operand>) -> Result<i64, ClassicCryptoError> {
        match other.into() {
            Operand::Field(scalar) if scalar.ring != self.ring => {
                Err(ClassicCryptoError::FieldMismatch {
                    left: self.modulus(),
                    right: scalar.modulus(),
                })
            }
            Operand::Field(scalar) => Ok(scalar.value),
            Operand::Plain(value) => Ok(self.ring.normalize(value)),
        }
    }

    fn with_value(&self, value: i64) -> Self {
        Self::in_ring(value, self.ring)
    }

    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::ModularScalar;
    /// let five = ModularScalar::try_with(5, 7).unwrap();
    /// assert_eq!(five.add(3).unwrap().value(), 1);
    /// assert_eq!(five.add(ModularScalar::try_with(8, 7).unwrap()).unwrap().value(), 6);
    /// assert!(five.add(ModularScalar::try_with(1, 11).unwrap()).is_err());
    /// ```
    pub fn add(self, other: impl Into<Operand>) -> Result<Self, ClassicCryptoError> {
        let other = self.lift(other)?;
        Ok(self.with_value(self.ring.add(self.value, other)))
    }

    pub fn sub(self, other: impl Into<Operand>) -> Result<Self, ClassicCryptoError> {
        let other = self.lift(other)?;
        Ok(self.with_value(self.ring.sub(self.value, other)))
    }

    pub fn mul(self, other: impl Into<Operand>) -> Result<Self, ClassicCryptoError> {
        let other = self.lift(other)?;
        Ok(self.with_value(self.ring.mul(self.value, other)))
    }

    /// `self^exponent`; exponent 0 gives `1 mod modulus`.
    pub fn pow(self, exponent: u64) -> Self {
        self.with_value(self.ring.pow(self.value, exponent))
    }

    /// Returns the unique `y` in `[1, modulus)` with `self·y ≡ 1`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NotInvertible` when `gcd(value, modulus) != 1`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::ModularScalar;
    /// let x = ModularScalar::try_with(15, 29).unwrap();
    /// assert_eq!(x.inverse().unwrap().value(), 2);
    /// assert!(ModularScalar::try_with(2, 6).unwrap().inverse().is_err());
    /// ```
    pub fn inverse(self) -> Result<Self, ClassicCryptoError> {
        Ok(self.with_value(self.ring.inv(self.value)?))
    }

    /// `self · other⁻¹`.
    ///
    /// # Errors
    ///
    /// `FieldMismatch` for a scalar of another ring, `NotInvertible` if `other` has no inverse.
    pub fn div(self, other: impl Into<Operand>) -> Result<Self, ClassicCryptoError> {
        let other = self.lift(other)?;
        Ok(self.with_value(self.ring.div(self.value, other)?))
    }
}

impl fmt::Display for ModularScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.ring.modulus())
    }
}

impl Add<i64> for ModularScalar {
    type Output = ModularScalar;

    fn add(self, rhs: i64) -> Self::Output {
        self.with_value(self.ring.add(self.value, rhs))
    }
}

impl Add<ModularScalar> for i64 {
    type Output = ModularScalar;

    fn add(self, rhs: ModularScalar) -> Self::Output {
        rhs + self
    }
}

impl Sub<i64> for ModularScalar {
    type Output = ModularScalar;

    fn sub(self, rhs: i64) -> Self::Output {
        self.with_value(self.ring.sub(self.value, rhs))
    }
}

impl Sub<ModularScalar> for i64 {
    type Output = ModularScalar;

    fn sub(self, rhs: ModularScalar) -> Self::Output {
        rhs.with_value(rhs.ring.sub(self, rhs.value))
    }
}

impl Mul<i64> for ModularScalar {
    type Output = ModularScalar;

    fn mul(self, rhs: i64) -> Self::Output {
        self.with_value(self.ring.mul(self.value, rhs))
    }
}

impl Mul<ModularScalar> for i64 {
    type Output = ModularScalar;

    fn mul(self, rhs: ModularScalar) -> Self::Output {
        rhs * self
    }
}

impl Neg for ModularScalar {
    type Output = ModularScalar;

    fn neg(self) -> Self::Output {
        self.with_value(self.ring.neg(self.value))
    }
}
