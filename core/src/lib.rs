//! cipher-core
//!
//! Pure Rust engine for classical substitution ciphers: Caesar/ROT,
//! Vigenère, Alberti-disk periodic rotation, and plugboard substitution.
//! Pedagogical by design — none of this resists cryptanalysis.
//!
//! # Architecture
//!
//! ```text
//! rotation    (shift normalization, cycle arithmetic)
//!     ↑
//! sequence    (immutable rotatable container, shared storage)
//!     ↑
//! alphabet    (named unique symbols, substitution maps, rotation table)
//!     ↑
//! engines     (position → substitution map: static / periodic / keyed /
//!              plugboard, plus the name registry)
//!     ↑
//! pipeline    (ordered whole-message passes)
//! ```
//!
//! The `config` module loads charset and pipeline descriptors (YAML or
//! JSON) and `text` prepares messages; both sit beside the core rather than
//! inside it.
//!
//! # Examples
//!
//! Build a Caesar pipeline and round-trip a message:
//!
//! ```
//! use cipher_core::alphabet::Alphabet;
//! use cipher_core::engines::{Engine, StaticRot};
//! use cipher_core::pipeline::Pipeline;
//!
//! let latin = Alphabet::from_ranges("basic_latin", &[(65, 90)], &[]).unwrap();
//!
//! let encrypt = Pipeline::new(vec![Engine::Static(StaticRot::new(&latin, 3))]);
//! let decrypt = Pipeline::new(vec![Engine::Static(StaticRot::new(&latin, -3))]);
//!
//! let ciphertext = encrypt.encrypt("HELLO");
//! assert_eq!(ciphertext, "KHOOR");
//! assert_eq!(decrypt.encrypt(&ciphertext), "HELLO");
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Core layers, leaves first
pub mod alphabet;
pub mod rotation;
pub mod sequence;

pub mod engines;
pub mod pipeline;

// Collaborators around the core
pub mod config;
pub mod text;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::alphabet::{Alphabet, RotationTable, SubstitutionMap};
    pub use crate::config::{CharsetConfig, PipelineConfig};
    pub use crate::engines::{Engine, EngineRegistry};
    pub use crate::pipeline::{build_pipelines, Pipeline};
    pub use crate::sequence::Sequence;
    pub use crate::types::CipherError;
}
