//! alphabet/mod.rs
//! Named unique-symbol sequences and the substitution maps built from them.

mod rotation_table;

pub use rotation_table::{RotationTable, TableError};

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::sequence::Sequence;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// An alphabet with no symbols cannot drive any substitution.
    #[error("alphabet cannot be empty")]
    EmptyAlphabet,

    /// Duplicate symbols make substitution maps ill-defined.
    #[error("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol { symbol: char },

    /// A configured code point outside the Unicode scalar value range.
    #[error("code point {code_point:#x} is not a valid Unicode scalar value")]
    InvalidCodePoint { code_point: u32 },

    /// Substitution maps require equally long alphabets.
    #[error("cannot build substitution map: lengths differ ({expected} vs {actual})")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Symbol-to-symbol mapping built by pairing two equal-length alphabets
/// position by position.
///
/// Applying the map to a symbol it does not contain yields the symbol
/// unchanged; that identity fallback is how non-alphabet characters pass
/// through engines untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: HashMap<char, char>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        SubstitutionMap::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        SubstitutionMap {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Mapped symbol, or `None` when `symbol` has no entry.
    pub fn get(&self, symbol: char) -> Option<char> {
        self.entries.get(&symbol).copied()
    }

    /// Mapped symbol, falling back to `symbol` itself when absent.
    pub fn apply(&self, symbol: char) -> char {
        self.get(symbol).unwrap_or(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&from, &to)| (from, to))
    }

    /// Swap every `from -> to` entry into `to -> from`.
    ///
    /// Only a faithful inverse when the map is injective; with colliding
    /// values the surviving entry is unspecified.
    pub fn invert(&self) -> SubstitutionMap {
        SubstitutionMap::from_pairs(self.iter().map(|(from, to)| (to, from)))
    }
}

impl FromIterator<(char, char)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        SubstitutionMap::from_pairs(iter)
    }
}

/// Named, immutable alphabet of distinct symbols.
///
/// ```
/// use cipher_core::alphabet::Alphabet;
///
/// let latin = Alphabet::from_ranges("basic_latin", &[(65, 90)], &[]).unwrap();
/// assert_eq!(latin.len(), 26);
/// assert_eq!(latin.get(0), Some('A'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    name: String,
    sequence: Sequence<char>,
}

impl Alphabet {
    /// Wrap a symbol sequence, enforcing the non-empty and all-distinct
    /// invariants.
    pub fn new(name: impl Into<String>, sequence: Sequence<char>) -> Result<Self, AlphabetError> {
        if sequence.is_empty() {
            return Err(AlphabetError::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(sequence.len());
        for &symbol in &sequence {
            if !seen.insert(symbol) {
                return Err(AlphabetError::DuplicateSymbol { symbol });
            }
        }
        Ok(Alphabet {
            name: name.into(),
            sequence,
        })
    }

    pub fn from_symbols(
        name: impl Into<String>,
        symbols: impl IntoIterator<Item = char>,
    ) -> Result<Self, AlphabetError> {
        Alphabet::new(name, symbols.into_iter().collect())
    }

    /// Build from ordered inclusive code-point ranges followed by ordered
    /// extra code points.
    pub fn from_ranges(
        name: impl Into<String>,
        ranges: &[(u32, u32)],
        extras: &[u32],
    ) -> Result<Self, AlphabetError> {
        let mut symbols = Vec::new();
        for &(start, end) in ranges {
            for code_point in start..=end {
                symbols.push(decode(code_point)?);
            }
        }
        for &code_point in extras {
            symbols.push(decode(code_point)?);
        }
        Alphabet::from_symbols(name, symbols)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn sequence(&self) -> &Sequence<char> {
        &self.sequence
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.sequence.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.sequence.get(index).copied()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.sequence.index_of(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.sequence.contains(&symbol)
    }

    /// Rotated alphabet with the same name. Positive shifts rotate left.
    pub fn rotate(&self, shift: i64) -> Alphabet {
        // An alphabet is never empty, so sequence rotation cannot fail.
        let sequence = self
            .sequence
            .rotate(shift)
            .unwrap_or_else(|_| self.sequence.clone());
        Alphabet {
            name: self.name.clone(),
            sequence,
        }
    }

    /// Map this alphabet onto `other`, position by position.
    pub fn substitution_map(&self, other: &Alphabet) -> Result<SubstitutionMap, AlphabetError> {
        if self.len() != other.len() {
            return Err(AlphabetError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(self.symbols().zip(other.symbols()).collect())
    }

    /// Substitution map onto this alphabet's own rotation by `shift`.
    ///
    /// The single rotation primitive every rotation engine goes through;
    /// infallible because the rotation preserves length and the alphabet is
    /// never empty.
    pub fn rotation_map(&self, shift: i64) -> SubstitutionMap {
        let rotated = self.rotate(shift);
        self.symbols().zip(rotated.symbols()).collect()
    }

    /// Mixed alphabet: the keyword's symbols (deduplicated, first
    /// occurrence wins) are moved to the front, keyword order preserved.
    /// Keyword symbols absent from the alphabet are skipped.
    pub fn with_keyword(&self, keyword: &str) -> Alphabet {
        let mut seen = HashSet::new();
        let deduplicated: Vec<char> = keyword.chars().filter(|&c| seen.insert(c)).collect();
        let mut sequence = self.sequence.clone();
        for symbol in deduplicated.iter().rev() {
            if let Ok(Some(moved)) = sequence.move_to_front(symbol) {
                sequence = moved;
            }
        }
        Alphabet {
            name: self.name.clone(),
            sequence,
        }
    }
}

fn decode(code_point: u32) -> Result<char, AlphabetError> {
    char::from_u32(code_point).ok_or(AlphabetError::InvalidCodePoint { code_point })
}
