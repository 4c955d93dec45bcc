//! pipeline/mod.rs
//! Ordered engine composition over a message, plus pipeline construction
//! from configuration.
//!
//! Each engine runs as a full left-to-right pass over the message before
//! the next engine starts; stage order is part of the contract, not an
//! implementation detail.

use std::collections::BTreeMap;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::config::PipelineConfig;
use crate::engines::{Engine, EngineRegistry};
use crate::types::CipherError;

/// Ordered composition of substitution engines.
///
/// `encrypt` feeds each stage the complete output of the previous stage.
/// Decryption is not auto-derived: construct the inverse engines (negated
/// shifts, inverted plugboard maps) and run them in reverse order.
///
/// ```
/// use cipher_core::alphabet::Alphabet;
/// use cipher_core::engines::{Engine, StaticRot};
/// use cipher_core::pipeline::Pipeline;
///
/// let latin = Alphabet::from_ranges("basic_latin", &[(65, 90)], &[]).unwrap();
/// let caesar = Pipeline::new(vec![Engine::Static(StaticRot::new(&latin, 3))]);
/// assert_eq!(caesar.encrypt("HELLO"), "KHOOR");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    engines: Vec<Engine>,
}

impl Pipeline {
    pub fn new(engines: Vec<Engine>) -> Self {
        Pipeline { engines }
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// A pipeline with no engines is the identity function on any text.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Run every engine over `text` in declared order.
    ///
    /// Characters without an entry in the stage's map pass through
    /// unchanged, so text normalization stays the caller's concern.
    pub fn encrypt(&self, text: &str) -> String {
        let mut current = text.to_owned();
        for (stage, engine) in self.engines.iter().enumerate() {
            debug!(
                stage,
                engine = engine.kind(),
                chars = current.chars().count(),
                "running pipeline stage"
            );
            current = current
                .chars()
                .enumerate()
                .map(|(pos, symbol)| engine.map_for_position(pos).apply(symbol))
                .collect();
        }
        current
    }
}

/// Build one pipeline per configured cipher, in declared step order.
///
/// The whole configuration is validated first, so a bad descriptor aborts
/// before any engine is constructed.
pub fn build_pipelines(
    config: &PipelineConfig,
    alphabet: &Alphabet,
    registry: &EngineRegistry,
) -> Result<BTreeMap<String, Pipeline>, CipherError> {
    config.validate(registry)?;
    let mut pipelines = BTreeMap::new();
    for (cipher, steps) in &config.pipelines {
        let mut engines = Vec::with_capacity(steps.len());
        for step in steps {
            engines.push(registry.create(&step.engine, &step.params, alphabet)?);
        }
        debug!(cipher = %cipher, stages = engines.len(), "built cipher pipeline");
        pipelines.insert(cipher.clone(), Pipeline::new(engines));
    }
    Ok(pipelines)
}
