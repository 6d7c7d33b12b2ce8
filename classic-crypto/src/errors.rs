#[derive(thiserror::Error, Debug)]
pub enum ClassicCryptoError {
    /// Error when creating a ring with an invalid modulus (k <= 1, or k beyond `i64::MAX`).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when two field elements living under different moduli are combined directly.
    #[error("FieldMismatch: cannot combine an element mod {left} with an element mod {right}")]
    FieldMismatch { left: u64, right: u64 },
    /// Error when a scalar or matrix has no multiplicative inverse under the modulus.
    #[error("NotInvertible: {0}")]
    NotInvertible(String),
    /// Non-square matrix, ragged rows, or a vector whose length disagrees with the matrix order.
    #[error("DimensionError: {0}")]
    DimensionError(String),
    /// Symbol or integer outside the configured alphabet.
    #[error("CodecError: {0}")]
    CodecError(String),

    #[error("Key serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
