//! alphabet/rotation_table.rs
//! Precomputed rotation rows for direct (plain, key) lookups.
//!
//! Materializes the rotation cycle of a base alphabet once, so square-table
//! ciphers can resolve a cipher symbol without building a substitution map
//! per call.

use thiserror::Error;

use super::Alphabet;
use crate::constants::DEFAULT_TABLE_STEP;
use crate::sequence::{Sequence, SequenceError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Lookup symbol absent from the base alphabet.
    #[error("symbol {symbol:?} is not in the base alphabet")]
    UnknownSymbol { symbol: char },

    /// Row materialization failed (empty alphabet or zero step).
    #[error("rotation cycle failed: {0}")]
    Cycle(#[from] SequenceError),
}

/// Rotation-based substitution table.
///
/// Row `i` is the base alphabet rotated by `i * step`; row 0 is unshifted.
/// `lookup` resolves the column from the plain symbol and the row from the
/// key symbol, both indexed against the base alphabet.
///
/// ```
/// use cipher_core::alphabet::{Alphabet, RotationTable};
///
/// let latin = Alphabet::from_ranges("basic_latin", &[(65, 90)], &[]).unwrap();
/// let table = RotationTable::with_unit_step(&latin).unwrap();
/// assert_eq!(table.lookup('A', 'B').unwrap(), 'B');
/// ```
#[derive(Debug, Clone)]
pub struct RotationTable {
    base: Alphabet,
    step: i64,
    rows: Vec<Sequence<char>>,
}

impl RotationTable {
    pub fn new(base: &Alphabet, step: i64) -> Result<Self, TableError> {
        let rows: Vec<Sequence<char>> = base.sequence().rotate_cycle(step)?.collect();
        Ok(RotationTable {
            base: base.clone(),
            step,
            rows,
        })
    }

    /// Classic square table: one row per unit rotation.
    pub fn with_unit_step(base: &Alphabet) -> Result<Self, TableError> {
        RotationTable::new(base, DEFAULT_TABLE_STEP)
    }

    pub fn base(&self) -> &Alphabet {
        &self.base
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of materialized rows: `len / gcd(|step|, len)`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by index, wrapping modulo the number of rows.
    pub fn row(&self, index: usize) -> &Sequence<char> {
        &self.rows[index % self.rows.len()]
    }

    /// Cipher symbol for a (plain, key) pair.
    pub fn lookup(&self, plain: char, key: char) -> Result<char, TableError> {
        let row = self
            .base
            .index_of(key)
            .ok_or(TableError::UnknownSymbol { symbol: key })?;
        let column = self
            .base
            .index_of(plain)
            .ok_or(TableError::UnknownSymbol { symbol: plain })?;
        Ok(self.row(row)[column])
    }
}
