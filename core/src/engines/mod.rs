//! engines/mod.rs
//! The substitution engine family.
//!
//! Four variants behind a single capability: given a character position,
//! produce a symbol-to-symbol map. The set is a closed sum type, so a match
//! over [`Engine`] is exhaustive by construction and dispatch costs nothing.

mod plugboard;
mod registry;
mod rot;

pub use plugboard::Plugboard;
pub use registry::{EngineBuilder, EngineParams, EngineRegistry};
pub use rot::{AlbertiRot, StaticRot, VigenereRot};

pub(crate) use registry::symbol_pairs;

use std::borrow::Cow;

use thiserror::Error;

use crate::alphabet::SubstitutionMap;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Engine name absent from the registry.
    #[error("unknown engine: {name:?}")]
    UnknownEngine { name: String },

    /// Key symbol absent from the base alphabet.
    #[error("key symbol {symbol:?} is not in the base alphabet")]
    UnknownSymbol { symbol: char },

    /// A keyed engine cannot cycle an empty key stream.
    #[error("key stream must not be empty")]
    EmptyKeyStream,

    /// A periodic engine must advance at least every character.
    #[error("shift interval must be positive")]
    InvalidInterval,

    /// Required construction parameter missing from the descriptor.
    #[error("engine {engine:?} requires parameter {parameter:?}")]
    MissingParameter {
        engine: &'static str,
        parameter: &'static str,
    },

    /// A plugboard map entry that is not a single symbol.
    #[error("plugboard entry {entry:?} must map one symbol to one symbol")]
    InvalidMapEntry { entry: String },
}

/// One substitution engine: a pure function from character position to
/// substitution map.
///
/// Position-independent variants hand out a borrow of their precomputed
/// map; position-dependent variants derive a fresh map per call.
#[derive(Debug, Clone)]
pub enum Engine {
    Static(StaticRot),
    Periodic(AlbertiRot),
    Keyed(VigenereRot),
    Plugboard(Plugboard),
}

impl Engine {
    /// Substitution map in effect at character position `pos`.
    pub fn map_for_position(&self, pos: usize) -> Cow<'_, SubstitutionMap> {
        match self {
            Engine::Static(engine) => Cow::Borrowed(engine.map()),
            Engine::Periodic(engine) => Cow::Owned(engine.map_for_position(pos)),
            Engine::Keyed(engine) => Cow::Owned(engine.map_for_position(pos)),
            Engine::Plugboard(engine) => Cow::Borrowed(engine.map()),
        }
    }

    /// Stable variant label, used in pipeline trace events.
    pub fn kind(&self) -> &'static str {
        match self {
            Engine::Static(_) => "static",
            Engine::Periodic(_) => "periodic",
            Engine::Keyed(_) => "keyed",
            Engine::Plugboard(_) => "plugboard",
        }
    }
}
