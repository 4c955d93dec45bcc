//! engines/registry.rs
//! Engine registry and factory functions.
//!
//! The registry is an explicit value constructed at startup and passed to
//! whatever builds pipelines; there is no process-global catalog.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::alphabet::{Alphabet, SubstitutionMap};
use crate::constants::engine_names;
use crate::engines::{AlbertiRot, Engine, EngineError, Plugboard, StaticRot, VigenereRot};

/// Flat construction parameters for one engine step.
///
/// Only the fields the named variant requires need to be present; a missing
/// required field fails with [`EngineError::MissingParameter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_shift: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_interval: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_step: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_stream: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<BTreeMap<String, String>>,
}

/// Constructor for one engine variant: parameters + base alphabet in,
/// engine out.
pub type EngineBuilder = fn(&EngineParams, &Alphabet) -> Result<Engine, EngineError>;

/// Name-to-builder mapping for engine construction.
pub struct EngineRegistry {
    builders: HashMap<String, EngineBuilder>,
}

impl Default for EngineRegistry {
    fn default() -> Self {
        EngineRegistry::new()
    }
}

impl EngineRegistry {
    /// Empty registry; use [`EngineRegistry::builtin`] for the standard set.
    pub fn new() -> Self {
        EngineRegistry {
            builders: HashMap::new(),
        }
    }

    /// Registry with the four builtin engines registered under the names in
    /// [`engine_names`].
    pub fn builtin() -> Self {
        let mut registry = EngineRegistry::new();
        registry.register(engine_names::STATIC_ROT, build_static_rot);
        registry.register(engine_names::ALBERTI_ROT, build_alberti_rot);
        registry.register(engine_names::VIGENERE_ROT, build_vigenere_rot);
        registry.register(engine_names::PLUGBOARD, build_plugboard);
        registry
    }

    /// Register `builder` under `name`. A name that is already registered
    /// keeps its existing builder; the duplicate registration is logged and
    /// ignored.
    pub fn register(&mut self, name: impl Into<String>, builder: EngineBuilder) {
        let name = name.into();
        if self.builders.contains_key(&name) {
            warn!(engine = %name, "engine already registered; keeping the existing builder");
            return;
        }
        self.builders.insert(name, builder);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered engine names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the engine registered under `name` against `alphabet`.
    pub fn create(
        &self,
        name: &str,
        params: &EngineParams,
        alphabet: &Alphabet,
    ) -> Result<Engine, EngineError> {
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| EngineError::UnknownEngine {
                name: name.to_string(),
            })?;
        builder(params, alphabet)
    }
}

fn build_static_rot(params: &EngineParams, alphabet: &Alphabet) -> Result<Engine, EngineError> {
    let shift = params.shift.ok_or(EngineError::MissingParameter {
        engine: engine_names::STATIC_ROT,
        parameter: "shift",
    })?;
    Ok(Engine::Static(StaticRot::new(alphabet, shift)))
}

fn build_alberti_rot(params: &EngineParams, alphabet: &Alphabet) -> Result<Engine, EngineError> {
    let initial_shift = params.initial_shift.ok_or(EngineError::MissingParameter {
        engine: engine_names::ALBERTI_ROT,
        parameter: "initial_shift",
    })?;
    let shift_interval = params.shift_interval.ok_or(EngineError::MissingParameter {
        engine: engine_names::ALBERTI_ROT,
        parameter: "shift_interval",
    })?;
    let shift_step = params.shift_step.ok_or(EngineError::MissingParameter {
        engine: engine_names::ALBERTI_ROT,
        parameter: "shift_step",
    })?;
    Ok(Engine::Periodic(AlbertiRot::new(
        alphabet,
        initial_shift,
        shift_interval,
        shift_step,
    )?))
}

fn build_vigenere_rot(params: &EngineParams, alphabet: &Alphabet) -> Result<Engine, EngineError> {
    let key_stream = params
        .key_stream
        .as_deref()
        .ok_or(EngineError::MissingParameter {
            engine: engine_names::VIGENERE_ROT,
            parameter: "key_stream",
        })?;
    Ok(Engine::Keyed(VigenereRot::new(alphabet, key_stream)?))
}

fn build_plugboard(params: &EngineParams, _alphabet: &Alphabet) -> Result<Engine, EngineError> {
    let map = params.map.as_ref().ok_or(EngineError::MissingParameter {
        engine: engine_names::PLUGBOARD,
        parameter: "map",
    })?;
    let pairs = symbol_pairs(map)?;
    Ok(Engine::Plugboard(Plugboard::new(SubstitutionMap::from_pairs(
        pairs,
    ))))
}

/// Decode a configured string-to-string map into symbol pairs, rejecting
/// entries that are not exactly one symbol on each side.
pub(crate) fn symbol_pairs(
    map: &BTreeMap<String, String>,
) -> Result<Vec<(char, char)>, EngineError> {
    let mut pairs = Vec::with_capacity(map.len());
    for (from, to) in map {
        match (single_symbol(from), single_symbol(to)) {
            (Some(from), Some(to)) => pairs.push((from, to)),
            _ => {
                return Err(EngineError::InvalidMapEntry {
                    entry: format!("{from} -> {to}"),
                })
            }
        }
    }
    Ok(pairs)
}

fn single_symbol(entry: &str) -> Option<char> {
    let mut symbols = entry.chars();
    match (symbols.next(), symbols.next()) {
        (Some(symbol), None) => Some(symbol),
        _ => None,
    }
}
