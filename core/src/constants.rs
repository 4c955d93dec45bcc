//! constants.rs
//! Stable engine names and library defaults.

/// Engine names used by the registry and pipeline configuration.
pub mod engine_names {
    pub const STATIC_ROT: &str = "static_rot";
    pub const ALBERTI_ROT: &str = "alberti_rot";
    pub const VIGENERE_ROT: &str = "vigenere_rot";
    pub const PLUGBOARD: &str = "plugboard";
}

/// Inclusive code-point range of the uppercase basic Latin alphabet (A-Z).
pub const BASIC_LATIN_UPPER: (u32, u32) = (65, 90);

/// Defaults when `Option<T>` is `None`
pub const DEFAULT_GROUP_SIZE: usize = 5;
pub const DEFAULT_PAD_SYMBOL: char = 'X';

/// Unit step for the classic square table (one row per rotation).
pub const DEFAULT_TABLE_STEP: i64 = 1;
