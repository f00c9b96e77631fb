//! The group-contribution method of Nannoolal et al.
//!
//! - Y. Nannoolal, J. Rarey, D. Ramjugernath, W. Cordes, Estimation of pure
//!   component properties. Part 1: normal boiling point, Fluid Phase
//!   Equilib. 226 (2004) 45-63.
//! - Part 2: critical properties (2007), Part 3: vapor pressure (2008),
//!   Part 4: liquid viscosity (2009).
//!
//! Besides first-order group contributions, the method corrects every sum
//! for interactions between functional groups (see [InteractionTable]).
//! Group and interaction parameters are read from JSON files.
use crate::estimate::{
    require, BaseProperties, GroupContribution, Molecule, MolecularInput, PureProperties,
};
use gcprop_core::parameter::{FromGroups, GroupTable};
use gcprop_core::si::*;
use gcprop_core::{finite, GcError, GcResult};
use log::{debug, warn};
use ndarray::Array1;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

mod interaction;
mod record;

pub use interaction::InteractionTable;
pub use record::{NannoolalContribution, NannoolalRecord};

const METHOD: &str = "Nannoolal";

const TB_EXPONENT: f64 = 0.6583;
const TB_DENOMINATOR: f64 = 1.6868;
const TB0: f64 = 84.3395;
const TC0: f64 = 0.699;
const TC1: f64 = 0.9889;
const TC_EXPONENT: f64 = 0.8607;
const PC_EXPONENT: f64 = -0.14041;
const PC0: f64 = 0.00939;
const VC_EXPONENT: f64 = -0.2266;
const VC0: f64 = 86.1539;
const DB0: f64 = -0.176055;
const PV0: f64 = 4.1012;
const PV_TRB: f64 = 0.125;
const MU0: f64 = 1.3;
const MU_TV: f64 = 16.0;

/// The Nannoolal method with its group and interaction tables.
#[derive(Clone)]
pub struct Nannoolal {
    table: Arc<GroupTable<NannoolalRecord>>,
    interactions: Arc<InteractionTable>,
}

impl Nannoolal {
    pub fn new(
        table: Arc<GroupTable<NannoolalRecord>>,
        interactions: Arc<InteractionTable>,
    ) -> Self {
        Self {
            table,
            interactions,
        }
    }

    /// Read group and interaction parameters from JSON files.
    pub fn from_json<P: AsRef<Path>>(groups: P, interactions: P) -> GcResult<Self> {
        Ok(Self::new(
            Arc::new(GroupTable::from_json(METHOD, groups)?),
            Arc::new(InteractionTable::from_json(interactions)?),
        ))
    }

    pub fn interactions(&self) -> &InteractionTable {
        &self.interactions
    }
}

impl GroupContribution for Nannoolal {
    type Record = NannoolalRecord;
    type Estimate = NannoolalEstimate;

    fn table(&self) -> &GroupTable<NannoolalRecord> {
        &self.table
    }

    fn estimate(&self, input: &MolecularInput) -> GcResult<NannoolalEstimate> {
        let molecule = Molecule::new(self.table(), input)?;
        let n = molecule.heavy_atoms();

        let contributions: Vec<_> = molecule
            .groups
            .iter()
            .map(|(g, count)| (&g.model_record.contribution, *count))
            .collect();
        let sums = NannoolalContribution::from_groups(&contributions);
        let classes: Vec<char> = molecule
            .groups
            .iter()
            .filter_map(|(g, count)| g.model_record.interaction.map(|c| (c, *count as usize)))
            .flat_map(|(c, count)| std::iter::repeat(c).take(count))
            .collect();
        let correction = self.interactions.correction(&classes, n);
        let corrected = sums + correction;
        debug!("{METHOD} contributions: {sums}, corrected: {corrected}");

        let tb = match input.boiling_temperature {
            Some(tb) => tb,
            None => {
                let tb_sum = require(corrected.tb, METHOD, "tb")?;
                let tb = tb_sum / (n.powf(TB_EXPONENT) + TB_DENOMINATOR) + TB0;
                finite(tb, "boiling temperature")? * KELVIN
            }
        };

        let tc_sum = require(corrected.tc, METHOD, "tc")?;
        let tc = finite(
            tb.to_si() * (TC0 + 1.0 / (TC1 + tc_sum.powf(TC_EXPONENT))),
            "critical temperature",
        )? * KELVIN;

        let pc_sum = require(corrected.pc, METHOD, "pc")?;
        let m = molecule.molar_weight_g_mol();
        let pc = m.powf(PC_EXPONENT) / (PC0 + pc_sum).powi(2);
        let pc = finite(pc, "critical pressure")? * KILO * PASCAL;

        let vc = match corrected.vc {
            Some(vc_sum) => {
                let vc = finite(vc_sum / n.powf(VC_EXPONENT) + VC0, "critical volume")?;
                Some(vc * MILLI * LITER / MOL)
            }
            None => None,
        };

        let viscosity = match (sums.bv, sums.tv) {
            (Some(bv), Some(tv)) => Some((
                bv / n + correction.bv.unwrap_or(0.0),
                (tv / n + correction.tv.unwrap_or(0.0)) * KELVIN,
            )),
            _ => None,
        };

        let base = BaseProperties::new(METHOD, input, molecule, tb, tc, pc, vc);
        Ok(NannoolalEstimate {
            base,
            sums,
            correction,
            vapor_pressure_parameter: corrected.pv.map(|pv| pv + DB0),
            viscosity,
        })
    }
}

/// Properties estimated with the Nannoolal method.
#[derive(Clone, Debug)]
pub struct NannoolalEstimate {
    base: BaseProperties,
    sums: NannoolalContribution,
    correction: NannoolalContribution,
    vapor_pressure_parameter: Option<f64>,
    viscosity: Option<(f64, Temperature)>,
}

impl PureProperties for NannoolalEstimate {
    fn base(&self) -> &BaseProperties {
        &self.base
    }
}

impl NannoolalEstimate {
    /// First-order contributions summed over the molecule.
    pub fn contributions(&self) -> &NannoolalContribution {
        &self.sums
    }

    /// Group-interaction correction added to the first-order sums.
    pub fn interaction_correction(&self) -> &NannoolalContribution {
        &self.correction
    }

    /// Slope `dB` of the vapor pressure equation.
    pub fn vapor_pressure_parameter(&self) -> GcResult<f64> {
        require(self.vapor_pressure_parameter, METHOD, "pv")
    }

    /// Vapor pressure from
    /// `log10(Pv / atm) = (4.1012 + dB) (Tr - 1) / (Tr - 0.125)` with
    /// `Tr = T / Tb`.
    pub fn vapor_pressure(&self, temperature: Temperature) -> GcResult<Pressure> {
        let db = self.vapor_pressure_parameter()?;
        if temperature > self.critical_temperature() {
            warn!("{METHOD}: vapor pressure evaluated at {temperature} above Tc");
        }
        let trb = (temperature / self.boiling_temperature()).into_value();
        let exponent = (PV0 + db) * (trb - 1.0) / (trb - PV_TRB);
        Ok(finite(10f64.powf(exponent), "vapor pressure")? * ATMOSPHERE)
    }

    /// Parameters `dBv` and `Tv` of the liquid viscosity.
    pub fn viscosity_parameters(&self) -> GcResult<(f64, Temperature)> {
        self.viscosity.ok_or_else(|| {
            GcError::MissingParameters(format!(
                "{METHOD}: at least one group has no `bv` or `tv` contribution"
            ))
        })
    }

    /// Liquid viscosity from
    /// `η = 1.3 cP exp(-dBv (T - Tv) / (T - Tv / 16))`.
    pub fn viscosity(&self, temperature: Temperature) -> GcResult<Viscosity> {
        let (dbv, tv) = self.viscosity_parameters()?;
        let t = temperature.to_si();
        let tv = tv.to_si();
        let value = MU0 * (-dbv * (t - tv) / (t - tv / MU_TV)).exp();
        Ok(finite(value, "viscosity")? * CENTI * POISE)
    }

    pub fn vapor_pressure_sweep(
        &self,
        temperature: &Temperature<Array1<f64>>,
    ) -> GcResult<Pressure<Array1<f64>>> {
        temperature.iter().map(|t| self.vapor_pressure(t)).collect()
    }

    pub fn viscosity_sweep(
        &self,
        temperature: &Temperature<Array1<f64>>,
    ) -> GcResult<Viscosity<Array1<f64>>> {
        temperature.iter().map(|t| self.viscosity(t)).collect()
    }
}

impl fmt::Display for NannoolalEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(db) = self.vapor_pressure_parameter {
            write!(f, "\n\tdB = {db:.6}")?;
        }
        if let Some((dbv, tv)) = self.viscosity {
            write!(f, "\n\tdBv = {dbv:.6}, Tv = {tv:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::EstimateBuilder;
    use approx::assert_relative_eq;

    const GROUPS: &str = r#"[
        {"index": 0, "description": "-CH3", "formula": "CH3", "model_record":
            {"tb": 180.0, "tc": 0.04, "pc": 0.001, "vc": 60.0, "pv": 0.05, "bv": 0.2, "tv": 150.0}},
        {"index": 1, "description": "-CH2-", "formula": "CH2", "model_record":
            {"tb": 250.0, "tc": 0.05, "pc": 0.0008, "vc": 55.0, "pv": 0.06, "bv": 0.3, "tv": 200.0}},
        {"index": 2, "description": "-OH", "formula": "OH", "model_record":
            {"tb": 900.0, "tc": 0.2, "pc": 0.002, "vc": 10.0, "pv": 0.5, "bv": 1.0, "tv": 300.0,
             "interaction": "A"}},
        {"index": 3, "description": ">C=O", "formula": "CO", "model_record":
            {"tb": 500.0, "tc": 0.1, "pc": 0.003, "vc": 50.0, "pv": 0.2, "interaction": "B"}}
    ]"#;

    const INTERACTIONS: &str = r#"{
        "AA": {"tb": 50.0, "tc": 0.01, "pv": 0.1},
        "BA": {"tb": -30.0, "pc": 0.0005}
    }"#;

    fn nannoolal() -> GcResult<Nannoolal> {
        Ok(Nannoolal::new(
            Arc::new(GroupTable::from_json_str(METHOD, GROUPS)?),
            Arc::new(InteractionTable::from_json_str(INTERACTIONS)?),
        ))
    }

    #[test]
    fn single_interacting_group() -> GcResult<()> {
        let propanol = EstimateBuilder::new(&nannoolal()?)
            .groups(&[(0, 1), (1, 2), (2, 1)])
            .build()?;
        assert_eq!(propanol.interaction_correction(), &NannoolalContribution::zero());
        assert_relative_eq!(
            propanol.boiling_temperature(),
            462.54851884155204 * KELVIN,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            propanol.critical_temperature(),
            657.5246712162896 * KELVIN,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            propanol.critical_pressure(),
            2874.728701724349 * KILO * PASCAL,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            propanol.molar_critical_volume()?,
            332.5871468907041 * MILLI * LITER / MOL,
            max_relative = 1e-10
        );
        assert_relative_eq!(propanol.vapor_pressure_parameter()?, 0.493945, max_relative = 1e-10);
        let (dbv, tv) = propanol.viscosity_parameters()?;
        assert_relative_eq!(dbv, 0.45, max_relative = 1e-12);
        assert_relative_eq!(tv, 212.5 * KELVIN, max_relative = 1e-12);
        assert_relative_eq!(
            propanol.viscosity(300.0 * KELVIN)?,
            1.13318762010782 * CENTI * POISE,
            max_relative = 1e-10
        );
        Ok(())
    }

    #[test]
    fn interaction_correction() -> GcResult<()> {
        let nannoolal = nannoolal()?;
        let glycol = EstimateBuilder::new(&nannoolal)
            .groups(&[(1, 2), (2, 2)])
            .build()?;
        let correction = glycol.interaction_correction();
        assert_relative_eq!(correction.tb.unwrap(), 25.0, max_relative = 1e-12);
        assert_relative_eq!(correction.pv.unwrap(), 0.05, max_relative = 1e-12);
        assert_relative_eq!(
            glycol.boiling_temperature(),
            640.8812524092459 * KELVIN,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            glycol.critical_temperature(),
            862.9680454177341 * KELVIN,
            max_relative = 1e-10
        );

        // the B-A pair is stored under its sorted key
        let hydroxyacetone = EstimateBuilder::new(&nannoolal)
            .groups(&[(0, 1), (3, 1), (1, 1), (2, 1)])
            .build()?;
        let correction = hydroxyacetone.interaction_correction();
        assert_relative_eq!(correction.tb.unwrap(), -12.0, max_relative = 1e-12);
        assert_relative_eq!(correction.pc.unwrap(), 0.0002, max_relative = 1e-12);
        assert_relative_eq!(
            hydroxyacetone.critical_pressure(),
            2033.846639946681 * KILO * PASCAL,
            max_relative = 1e-10
        );
        assert!(matches!(
            hydroxyacetone.viscosity(300.0 * KELVIN),
            Err(GcError::MissingParameters(_))
        ));
        Ok(())
    }

    #[test]
    fn vapor_pressure_at_boiling_point() -> GcResult<()> {
        let propanol = EstimateBuilder::new(&nannoolal()?)
            .groups(&[(0, 1), (1, 2), (2, 1)])
            .boiling_temperature(370.0 * KELVIN)
            .build()?;
        assert_eq!(propanol.boiling_temperature(), 370.0 * KELVIN);
        assert_relative_eq!(
            propanol.vapor_pressure(370.0 * KELVIN)?,
            ATMOSPHERE,
            max_relative = 1e-12
        );
        let temperature = Temperature::<Array1<f64>>::linspace(300.0 * KELVIN, 360.0 * KELVIN, 4);
        let pressure = propanol.vapor_pressure_sweep(&temperature)?;
        let values: Vec<Pressure> = pressure.iter().collect();
        assert_eq!(values.len(), 4);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }
}
