use super::ChemicalRecord;
use crate::composition::Composition;
use crate::errors::{GcError, GcResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parameters of an individual group of a group-contribution method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupRecord<M> {
    pub index: usize,
    pub description: String,
    /// Elemental composition of the fragment, e.g. `"CH3"`.
    pub formula: String,
    pub model_record: M,
}

impl<M> GroupRecord<M> {
    pub fn new(index: usize, description: &str, formula: &str, model_record: M) -> Self {
        Self {
            index,
            description: description.into(),
            formula: formula.into(),
            model_record,
        }
    }

    pub fn composition(&self) -> GcResult<Composition> {
        Composition::from_formula(&self.formula)
    }
}

impl<M: fmt::Display> fmt::Display for GroupRecord<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupRecord(\n\tindex={}", self.index)?;
        write!(f, "\n\tdescription={}", self.description)?;
        write!(f, "\n\tformula={}", self.formula)?;
        write!(f, "\n\tmodel_record={}\n)", self.model_record)
    }
}

/// Immutable table of the groups of one method, indexed densely from 0.
#[derive(Debug, Clone)]
pub struct GroupTable<M> {
    method: &'static str,
    records: Vec<GroupRecord<M>>,
    compositions: Vec<Composition>,
}

impl<M> GroupTable<M> {
    /// Build a table from records in any order.
    ///
    /// The indices must be exactly `0..records.len()` and every formula must
    /// parse.
    pub fn from_records(method: &'static str, mut records: Vec<GroupRecord<M>>) -> GcResult<Self> {
        records.sort_by_key(|r| r.index);
        for (i, r) in records.iter().enumerate() {
            if r.index != i {
                return Err(GcError::IncompatibleParameters(format!(
                    "{method} group table: expected index {i} but found {} ({})",
                    r.index, r.description
                )));
            }
        }
        let compositions = records
            .iter()
            .map(GroupRecord::composition)
            .collect::<GcResult<_>>()?;
        Ok(Self {
            method,
            records,
            compositions,
        })
    }

    /// Read a table from a JSON list of group records.
    pub fn from_json<P: AsRef<Path>>(method: &'static str, file: P) -> GcResult<Self>
    where
        M: DeserializeOwned,
    {
        let records = serde_json::from_reader(BufReader::new(File::open(file)?))?;
        Self::from_records(method, records)
    }

    /// Same as [GroupTable::from_json] for a JSON string.
    pub fn from_json_str(method: &'static str, json: &str) -> GcResult<Self>
    where
        M: DeserializeOwned,
    {
        Self::from_records(method, serde_json::from_str(json)?)
    }

    /// Serialize the records of the table as pretty-printed JSON.
    pub fn to_json(&self) -> GcResult<String>
    where
        M: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GroupRecord<M>] {
        &self.records
    }

    pub fn get(&self, index: usize) -> GcResult<&GroupRecord<M>> {
        self.records
            .get(index)
            .ok_or(GcError::UnknownGroupIndex(index, self.method))
    }

    /// Resolve the groups of a chemical record to their records and counts.
    ///
    /// Repeated indices are merged; the order of first appearance is kept.
    pub fn group_map(&self, chemical_record: &ChemicalRecord) -> GcResult<Vec<(&GroupRecord<M>, f64)>> {
        chemical_record
            .group_count()?
            .into_iter()
            .map(|(i, n)| Ok((self.get(i)?, n as f64)))
            .collect()
    }

    /// Elemental composition of the molecule described by `chemical_record`.
    pub fn composition(&self, chemical_record: &ChemicalRecord) -> GcResult<Composition> {
        Ok(chemical_record
            .group_count()?
            .into_iter()
            .map(|(i, n)| {
                self.compositions
                    .get(i)
                    .map(|c| c * n)
                    .ok_or(GcError::UnknownGroupIndex(i, self.method))
            })
            .collect::<GcResult<Vec<_>>>()?
            .into_iter()
            .sum())
    }
}

impl<M> fmt::Display for GroupTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|index|group|formula|")?;
        writeln!(f, "|-|-|-|")?;
        for r in &self.records {
            writeln!(f, "|{}|{}|{}|", r.index, r.description, r.formula)?;
        }
        write!(f, "{} groups ({})", self.len(), self.method)
    }
}
