//! # Ring Module
//!
//! Arithmetic in Z/mZ: the [`Ring`] descriptor, single elements ([`ModularScalar`]),
//! and square matrices over the ring ([`ModularMatrix`]).

pub mod helper;
pub mod math;
pub mod matrix;
pub mod matrix_ops;
pub mod scalar;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use helper::{extended_gcd, gcd, inverse_by_search};
pub use math::Ring;
pub use matrix::ModularMatrix;
pub use scalar::{ModularScalar, Operand};
