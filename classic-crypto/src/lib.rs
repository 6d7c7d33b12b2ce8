//! Classical modular ciphers over Z/mZ.
//!
//! Messages are sequences of integers in `[0, m)`. The ciphers shift them, add a
//! repeated keyword, or apply an affine map block by block, and hand the result
//! to a [`Codec`](codec::Codec) that turns it back into text.

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod preset;
pub mod ring;

pub use cipher::{
    AffineKey, Key, affine_decrypt, affine_encrypt, affine_scalar_decrypt, affine_scalar_encrypt,
    caesar_decrypt, caesar_encrypt, vigenere_decrypt, vigenere_encrypt,
};
pub use codec::Codec;
pub use errors::ClassicCryptoError;
pub use ring::{Matrix, ModularMatrix, ModularScalar, Operand, Ring, Vector};
