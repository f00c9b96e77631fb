use super::NannoolalContribution;
use gcprop_core::{GcError, GcResult};
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Second-order corrections of the Nannoolal method, keyed by the two
/// interaction classes in alphabetical order (e.g. `"AB"`).
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    entries: IndexMap<String, NannoolalContribution>,
}

fn sorted_key(a: char, b: char) -> String {
    if a <= b {
        [a, b].iter().collect()
    } else {
        [b, a].iter().collect()
    }
}

impl InteractionTable {
    /// Build the table from entries with two-letter keys in any order.
    pub fn new(entries: IndexMap<String, NannoolalContribution>) -> GcResult<Self> {
        let mut sorted = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            let classes: Vec<char> = key.chars().collect();
            let &[a, b] = classes.as_slice() else {
                return Err(GcError::IncompatibleParameters(format!(
                    "interaction key '{key}' must consist of two class letters"
                )));
            };
            if sorted.insert(sorted_key(a, b), value).is_some() {
                return Err(GcError::IncompatibleParameters(format!(
                    "interaction '{key}' is defined twice"
                )));
            }
        }
        Ok(Self { entries: sorted })
    }

    /// Read the table from a JSON object mapping keys to coefficients.
    pub fn from_json<P: AsRef<Path>>(file: P) -> GcResult<Self> {
        Self::new(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    pub fn from_json_str(json: &str) -> GcResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, a: char, b: char) -> Option<&NannoolalContribution> {
        self.entries.get(&sorted_key(a, b))
    }

    /// Interaction correction of a molecule.
    ///
    /// `classes` holds one interaction class per occurrence of an
    /// interacting group. Every ordered pair of distinct positions
    /// contributes the tabulated coefficients of its class pair; the total
    /// is divided by `heavy_atoms * (m - 1)` with `m = classes.len()`.
    /// With less than two interacting groups the correction vanishes.
    pub fn correction(&self, classes: &[char], heavy_atoms: f64) -> NannoolalContribution {
        let m = classes.len();
        if m < 2 {
            return NannoolalContribution::zero();
        }
        let total = classes
            .iter()
            .permutations(2)
            .filter_map(|pair| self.get(*pair[0], *pair[1]))
            .fold(NannoolalContribution::zero(), |acc, c| acc.accumulate(c));
        let correction = total * (1.0 / (heavy_atoms * (m - 1) as f64));
        debug!("Nannoolal interaction correction for {classes:?}: {correction}");
        correction
    }
}
