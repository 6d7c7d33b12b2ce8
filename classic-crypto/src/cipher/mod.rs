//! # Cipher Module
//!
//! Shift (Caesar), repeating-key (Vigenère) and linear (affine/Hill) ciphers.
//! Each entry point takes a message already mapped to integers, applies a
//! modular affine map, and encodes the result with the preset alphabet of the
//! modulus.

pub mod affine;
pub mod caesar;
pub mod keys;
pub mod vigenere;

use crate::codec::Codec;
use crate::errors::ClassicCryptoError;
use crate::ring::Ring;

pub use affine::{
    AffineKey, affine_decrypt, affine_encrypt, affine_scalar_decrypt, affine_scalar_encrypt,
};
pub use caesar::{caesar_decrypt, caesar_encrypt};
pub use keys::Key;
pub use vigenere::{vigenere_decrypt, vigenere_encrypt};

/// Ring and output codec for `modulus`. The modulus is validated before the alphabet lookup.
fn ring_and_codec(modulus: u64) -> Result<(Ring, Codec), ClassicCryptoError> {
    let ring = Ring::try_with(modulus)?;
    let codec = Codec::for_modulus(modulus)?;
    Ok((ring, codec))
}
