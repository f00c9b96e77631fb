//! The group-contribution method of Valderrama & Rojas for the critical
//! properties of high molecular weight compounds.
//!
//! J. O. Valderrama, R. E. Rojas, Critical properties of ionic liquids.
//! Revisited, Ind. Eng. Chem. Res. 48 (2009) 6890-6900.
//!
//! The method requires the normal boiling point as input. Group parameters
//! are read from JSON.
use crate::estimate::{
    require, BaseProperties, GroupContribution, Molecule, MolecularInput, PureProperties,
};
use gcprop_core::parameter::{contribution_sum, FromGroups, GroupTable};
use gcprop_core::si::*;
use gcprop_core::{finite, GcError, GcResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

const METHOD: &str = "Valderrama";

const G1_0: f64 = 38.91;
const G1_EXPONENT: f64 = 0.88;
const G2_0: f64 = 5.84;
const G2_EXPONENT: f64 = 1.27;
const VC0: f64 = 26.86;
const VC_EXPONENT: f64 = 1.06;

/// Valderrama group contributions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ValderramaRecord {
    #[serde(default)]
    pub tc: Option<f64>,
    #[serde(default)]
    pub pc: Option<f64>,
    /// Critical volume in cm³/mol
    #[serde(default)]
    pub vc: Option<f64>,
}

impl ValderramaRecord {
    pub fn new(tc: f64, pc: f64, vc: f64) -> Self {
        Self {
            tc: Some(tc),
            pc: Some(pc),
            vc: Some(vc),
        }
    }
}

impl FromGroups<f64> for ValderramaRecord {
    fn from_groups(groups: &[(&Self, f64)]) -> Self {
        Self {
            tc: contribution_sum(groups, |r| r.tc),
            pc: contribution_sum(groups, |r| r.pc),
            vc: contribution_sum(groups, |r| r.vc),
        }
    }
}

impl fmt::Display for ValderramaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValderramaRecord(tc={:?}", self.tc)?;
        write!(f, ", pc={:?}", self.pc)?;
        write!(f, ", vc={:?})", self.vc)
    }
}

/// The Valderrama method with a group table.
#[derive(Clone)]
pub struct Valderrama {
    table: Arc<GroupTable<ValderramaRecord>>,
}

impl Valderrama {
    pub fn new(table: Arc<GroupTable<ValderramaRecord>>) -> Self {
        Self { table }
    }

    pub fn from_json<P: AsRef<Path>>(file: P) -> GcResult<Self> {
        Ok(Self::new(Arc::new(GroupTable::from_json(METHOD, file)?)))
    }
}

impl GroupContribution for Valderrama {
    type Record = ValderramaRecord;
    type Estimate = ValderramaEstimate;

    fn table(&self) -> &GroupTable<ValderramaRecord> {
        &self.table
    }

    fn estimate(&self, input: &MolecularInput) -> GcResult<ValderramaEstimate> {
        let molecule = Molecule::new(self.table(), input)?;
        let tb = input
            .boiling_temperature
            .ok_or(GcError::MissingRequiredInput(METHOD, "boiling_temperature"))?;
        let sums = ValderramaRecord::from_groups(&molecule.records());
        debug!("{METHOD} contributions: {sums}");

        let g1 = G1_0 + require(sums.tc, METHOD, "tc")?.powf(G1_EXPONENT);
        let g2 = G2_0 + require(sums.pc, METHOD, "pc")?.powf(G2_EXPONENT);
        let pc_bar = finite((g1 / g2).powi(2), "critical pressure")?;
        let tc = finite(pc_bar * g2, "critical temperature")? * KELVIN;
        let vc = match sums.vc {
            Some(vc) => {
                let vc = finite(VC0 + vc.powf(VC_EXPONENT), "critical volume")?;
                Some(vc * MILLI * LITER / MOL)
            }
            None => None,
        };

        let base = BaseProperties::new(METHOD, input, molecule, tb, tc, pc_bar * BAR, vc);
        Ok(ValderramaEstimate { base, sums })
    }
}

/// Critical properties estimated with the Valderrama method.
#[derive(Clone, Debug)]
pub struct ValderramaEstimate {
    base: BaseProperties,
    sums: ValderramaRecord,
}

impl ValderramaEstimate {
    pub fn contributions(&self) -> &ValderramaRecord {
        &self.sums
    }
}

impl PureProperties for ValderramaEstimate {
    fn base(&self) -> &BaseProperties {
        &self.base
    }
}

impl fmt::Display for ValderramaEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}
