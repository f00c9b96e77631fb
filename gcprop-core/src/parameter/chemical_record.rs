use super::{Identifier, IdentifierOption};
use crate::errors::{GcError, GcResult};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Number of occurrences of one group in a molecule.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct GroupCount {
    pub index: usize,
    pub count: usize,
}

impl From<[usize; 2]> for GroupCount {
    fn from([index, count]: [usize; 2]) -> Self {
        Self { index, count }
    }
}

impl From<GroupCount> for [usize; 2] {
    fn from(group: GroupCount) -> Self {
        [group.index, group.count]
    }
}

impl From<(usize, usize)> for GroupCount {
    fn from((index, count): (usize, usize)) -> Self {
        Self { index, count }
    }
}

/// Group decomposition of a compound.
///
/// In JSON, groups are written as `[index, count]` pairs:
/// ```json
/// {"identifier": {"name": "acetone"}, "groups": [[0, 2], [23, 1]]}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChemicalRecord {
    #[serde(default)]
    pub identifier: Identifier,
    pub groups: Vec<GroupCount>,
}

impl ChemicalRecord {
    pub fn new(identifier: Identifier, groups: &[(usize, usize)]) -> Self {
        Self {
            identifier,
            groups: groups.iter().copied().map(GroupCount::from).collect(),
        }
    }

    /// Chemical record without identifier.
    pub fn from_groups(groups: &[(usize, usize)]) -> Self {
        Self::new(Identifier::default(), groups)
    }

    /// Read all chemical records from a JSON file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> GcResult<Vec<Self>> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    /// Read the chemical records of the given compounds from a JSON file,
    /// in the order of `substances`.
    pub fn from_json_by<P: AsRef<Path>>(
        substances: &[&str],
        file: P,
        identifier_option: IdentifierOption,
    ) -> GcResult<Vec<Self>> {
        let records = Self::from_json(file)?;
        let mut by_key: IndexMap<&str, &Self> = IndexMap::new();
        for r in &records {
            if let Some(key) = r.identifier.as_str(identifier_option) {
                by_key.entry(key).or_insert(r);
            }
        }
        let missing: Vec<_> = substances
            .iter()
            .filter(|s| !by_key.contains_key(**s))
            .collect();
        if !missing.is_empty() {
            return Err(GcError::IncompatibleParameters(format!(
                "no chemical record for {missing:?}"
            )));
        }
        Ok(substances
            .iter()
            .filter_map(|s| by_key.get(*s).map(|r| (*r).clone()))
            .collect())
    }

    /// Number of occurrences of each group index, in order of first
    /// appearance. Repeated indices are summed.
    ///
    /// Fails for zero counts and for records without groups.
    pub fn group_count(&self) -> GcResult<IndexMap<usize, usize>> {
        if self.groups.is_empty() {
            return Err(GcError::EmptyMolecule);
        }
        let mut counts = IndexMap::with_capacity(self.groups.len());
        for g in &self.groups {
            if g.count == 0 {
                return Err(GcError::InvalidGroupCount(g.index));
            }
            let entry = counts.entry(g.index).or_insert(0);
            if *entry > 0 {
                warn!("group {} listed more than once; counts are summed", g.index);
            }
            *entry += g.count;
        }
        Ok(counts)
    }
}

impl fmt::Display for ChemicalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<_> = self
            .groups
            .iter()
            .map(|g| format!("{}x{}", g.count, g.index))
            .collect();
        write!(f, "ChemicalRecord(")?;
        write!(f, "\n\tidentifier={},", self.identifier)?;
        write!(f, "\n\tgroups=[{}]\n)", groups.join(", "))
    }
}
