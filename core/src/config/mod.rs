//! config/mod.rs
//! Charset and cipher pipeline configuration.
//!
//! YAML or JSON documents, chosen by file extension: `.json` parses as
//! JSON, everything else as YAML. Parsing is typed through serde; the
//! schema-level checks that serde cannot express live in
//! [`PipelineConfig::validate`], which runs before any engine is
//! constructed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::{Alphabet, AlphabetError};
use crate::constants::engine_names;
use crate::engines::{symbol_pairs, EngineError, EngineParams, EngineRegistry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Requested language key absent from the charset configuration.
    #[error("unknown language: {language:?}")]
    UnknownLanguage { language: String },

    /// A step references an engine name the registry does not know.
    #[error("cipher {cipher:?} references unknown engine {engine:?}")]
    UnknownEngine { cipher: String, engine: String },

    /// A cipher with no steps would silently be the identity.
    #[error("cipher {cipher:?} has no engine steps")]
    EmptyPipeline { cipher: String },

    /// A step descriptor that cannot construct its engine variant.
    #[error("cipher {cipher:?}, engine {engine:?}: {source}")]
    InvalidStep {
        cipher: String,
        engine: String,
        source: EngineError,
    },

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

/// Symbol source for one language: inclusive code-point ranges expanded
/// low-to-high, then individual extras, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetEntry {
    #[serde(default)]
    pub ranges: Vec<(u32, u32)>,

    #[serde(default)]
    pub extras: Vec<u32>,
}

/// Per-language alphabet specifications.
///
/// ```
/// use cipher_core::config::CharsetConfig;
///
/// let config = CharsetConfig::from_yaml_str(
///     "alphabets:\n  en:\n    ranges:\n      - [65, 90]\n",
/// )
/// .unwrap();
/// assert_eq!(config.alphabet("en").unwrap().len(), 26);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetConfig {
    pub alphabets: BTreeMap<String, CharsetEntry>,
}

impl CharsetConfig {
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(document)?)
    }

    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_document(path.as_ref())
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.alphabets.keys().map(String::as_str)
    }

    pub fn entry(&self, language: &str) -> Result<&CharsetEntry, ConfigError> {
        self.alphabets
            .get(language)
            .ok_or_else(|| ConfigError::UnknownLanguage {
                language: language.to_string(),
            })
    }

    /// Build the alphabet configured for `language`, named after it.
    pub fn alphabet(&self, language: &str) -> Result<Alphabet, ConfigError> {
        let entry = self.entry(language)?;
        Ok(Alphabet::from_ranges(language, &entry.ranges, &entry.extras)?)
    }
}

/// One engine step of a cipher pipeline: the engine name plus its flat
/// parameter mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineStep {
    pub engine: String,

    #[serde(flatten)]
    pub params: EngineParams,
}

/// Ordered engine steps per cipher name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub pipelines: BTreeMap<String, Vec<EngineStep>>,
}

impl PipelineConfig {
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(document)?)
    }

    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_document(path.as_ref())
    }

    /// Schema-level validation of every cipher, before any engine is
    /// constructed: known engine names, non-empty step lists, required
    /// parameters present and well-formed.
    ///
    /// Alphabet-dependent checks (e.g. key symbols actually present in the
    /// base alphabet) stay with engine construction.
    pub fn validate(&self, registry: &EngineRegistry) -> Result<(), ConfigError> {
        for (cipher, steps) in &self.pipelines {
            if steps.is_empty() {
                return Err(ConfigError::EmptyPipeline {
                    cipher: cipher.clone(),
                });
            }
            for step in steps {
                if !registry.contains(&step.engine) {
                    return Err(ConfigError::UnknownEngine {
                        cipher: cipher.clone(),
                        engine: step.engine.clone(),
                    });
                }
                validate_step(cipher, step)?;
            }
        }
        Ok(())
    }
}

fn validate_step(cipher: &str, step: &EngineStep) -> Result<(), ConfigError> {
    let invalid = |source: EngineError| ConfigError::InvalidStep {
        cipher: cipher.to_string(),
        engine: step.engine.clone(),
        source,
    };
    let missing = |parameter: &'static str, engine: &'static str| {
        invalid(EngineError::MissingParameter { engine, parameter })
    };

    match step.engine.as_str() {
        engine_names::STATIC_ROT => {
            if step.params.shift.is_none() {
                return Err(missing("shift", engine_names::STATIC_ROT));
            }
        }
        engine_names::ALBERTI_ROT => {
            if step.params.initial_shift.is_none() {
                return Err(missing("initial_shift", engine_names::ALBERTI_ROT));
            }
            if step.params.shift_step.is_none() {
                return Err(missing("shift_step", engine_names::ALBERTI_ROT));
            }
            match step.params.shift_interval {
                None => return Err(missing("shift_interval", engine_names::ALBERTI_ROT)),
                Some(0) => return Err(invalid(EngineError::InvalidInterval)),
                Some(_) => {}
            }
        }
        engine_names::VIGENERE_ROT => match step.params.key_stream.as_deref() {
            None => return Err(missing("key_stream", engine_names::VIGENERE_ROT)),
            Some("") => return Err(invalid(EngineError::EmptyKeyStream)),
            Some(_) => {}
        },
        engine_names::PLUGBOARD => match step.params.map.as_ref() {
            None => return Err(missing("map", engine_names::PLUGBOARD)),
            Some(map) => {
                symbol_pairs(map).map_err(|source| invalid(source))?;
            }
        },
        // Custom engines validate their own parameters at construction.
        _ => {}
    }
    Ok(())
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path)?;
    if path.extension().and_then(|extension| extension.to_str()) == Some("json") {
        Ok(serde_json::from_str(&contents)?)
    } else {
        Ok(serde_yaml::from_str(&contents)?)
    }
}
