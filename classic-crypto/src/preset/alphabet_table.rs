use lazy_static::lazy_static;
use std::collections::HashMap;

/// An indexed symbol table: position `i` holds the symbol encoding the integer `i`.
#[derive(Debug)]
pub struct Alphabet {
    pub symbols: Vec<char>,
    pub index: HashMap<char, i64>,
}

impl Alphabet {
    fn from_symbols(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, i as i64))
            .collect();

        Alphabet { symbols, index }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

lazy_static! {
    /// 0..=25 ↦ 'A'..='Z'.
    pub static ref ALPHABET_MOD26: Alphabet =
        Alphabet::from_symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// 0..=25 ↦ 'A'..='Z', then 26 ↦ '_', 27 ↦ '?', 28 ↦ '!'.
    pub static ref ALPHABET_MOD29: Alphabet =
        Alphabet::from_symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZ_?!");
}

/// Looks up the preset table whose size equals `modulus`.
pub fn alphabet_for_modulus(modulus: u64) -> Option<&'static Alphabet> {
    match modulus {
        26 => Some(&*ALPHABET_MOD26),
        29 => Some(&*ALPHABET_MOD29),
        _ => None,
    }
}
