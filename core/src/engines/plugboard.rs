//! engines/plugboard.rs
//! Position-independent substitution through an arbitrary precomputed map.

use crate::alphabet::SubstitutionMap;

/// Plugboard engine.
///
/// The map need not be rotation-derived and need not be an involution.
/// Symbols absent from the map pass through unchanged when applied; that
/// pass-through is an explicit policy, not error suppression.
#[derive(Debug, Clone)]
pub struct Plugboard {
    map: SubstitutionMap,
}

impl Plugboard {
    pub fn new(map: SubstitutionMap) -> Self {
        Plugboard { map }
    }

    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }
}
