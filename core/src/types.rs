//! types.rs
//! Unified error covering every layer of the cipher core.

use thiserror::Error;

use crate::alphabet::{AlphabetError, TableError};
use crate::config::ConfigError;
use crate::engines::EngineError;
use crate::rotation::RotationError;
use crate::sequence::SequenceError;

/// Unified cipher error covering rotation arithmetic, sequences, alphabets,
/// tables, engines, and configuration.
///
/// The `From` impls enable `?` across the whole construction path, from
/// configuration loading down to engine instantiation.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Rotation arithmetic error (zero length or zero step).
    #[error("rotation error: {0}")]
    Rotation(#[from] RotationError),

    /// Sequence-level error (empty sequence, strict-mode violation).
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// Alphabet-level error (construction or map building).
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Rotation table error (materialization or lookup).
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Engine construction or registry error.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
