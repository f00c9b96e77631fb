//! The group-contribution method of Joback & Reid.
//!
//! K. G. Joback, R. C. Reid, Estimation of pure-component properties from
//! group-contributions, Chem. Eng. Commun. 57 (1987) 233-243.
//!
//! The 41 groups published by Joback & Reid are built in ([JOBACK_TABLE]).
//! Besides the critical point and the boiling point, the method provides
//! the melting point, enthalpies and Gibbs energy of formation, enthalpies
//! of vaporization and fusion, the ideal gas heat capacity and the liquid
//! viscosity.
use crate::estimate::{
    require, BaseProperties, GroupContribution, Molecule, MolecularInput, PureProperties,
};
use gcprop_core::parameter::{FromGroups, GroupTable};
use gcprop_core::si::*;
use gcprop_core::{finite, GcError, GcResult};
use log::{debug, warn};
use ndarray::Array1;
use std::fmt;
use std::sync::Arc;

mod record;
mod table;

pub use record::JobackRecord;
pub use table::JOBACK_TABLE;

const METHOD: &str = "Joback";

const TB0: f64 = 198.2;
const TF0: f64 = 122.5;
const TC0: f64 = 0.584;
const TC1: f64 = 0.965;
const PC0: f64 = 0.113;
const PC_ATOMS: f64 = 0.0032;
const VC0: f64 = 17.5;
const HF0: f64 = 68.29;
const GF0: f64 = 53.88;
const HV0: f64 = 15.3;
const HM0: f64 = -0.88;
const CAL_TO_KJ: f64 = 0.004184;
const CP0: [f64; 4] = [-37.93, 0.21, -3.91e-4, 2.06e-7];
const MUA0: f64 = -597.82;
const MUB0: f64 = -11.202;

/// Temperature range of the heat capacity polynomial in K.
const CP_RANGE: (f64, f64) = (273.0, 1000.0);

/// The Joback method with a group table.
#[derive(Clone)]
pub struct Joback {
    table: Arc<GroupTable<JobackRecord>>,
}

impl Joback {
    /// Joback with the published groups.
    pub fn new() -> Self {
        Self::from_table(JOBACK_TABLE.clone())
    }

    /// Joback with a custom group table, e.g. read from JSON.
    pub fn from_table(table: Arc<GroupTable<JobackRecord>>) -> Self {
        Self { table }
    }
}

impl Default for Joback {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupContribution for Joback {
    type Record = JobackRecord;
    type Estimate = JobackEstimate;

    fn table(&self) -> &GroupTable<JobackRecord> {
        &self.table
    }

    fn estimate(&self, input: &MolecularInput) -> GcResult<JobackEstimate> {
        let molecule = Molecule::new(self.table(), input)?;
        let sums = JobackRecord::from_groups(&molecule.records());
        debug!("{METHOD} contributions: {sums}");

        let tb = match input.boiling_temperature {
            Some(tb) => tb,
            None => (TB0 + require(sums.tb, METHOD, "tb")?) * KELVIN,
        };

        let tc_sum = require(sums.tc, METHOD, "tc")?;
        let denominator = TC0 + TC1 * tc_sum - tc_sum.powi(2);
        if denominator <= 0.0 {
            return Err(GcError::OutOfCorrelationRange(
                "critical temperature",
                format!("denominator {denominator} is not positive"),
            ));
        }
        let tc = finite(tb.to_si() / denominator, "critical temperature")? * KELVIN;

        let atoms = molecule.composition.total_atoms() as f64;
        let pc_sum = require(sums.pc, METHOD, "pc")?;
        let pc = finite((PC0 + PC_ATOMS * atoms - pc_sum).powi(-2), "critical pressure")? * BAR;

        let vc = sums.vc.map(|vc| (VC0 + vc) * MILLI * LITER / MOL);

        let base = BaseProperties::new(METHOD, input, molecule, tb, tc, pc, vc);
        Ok(JobackEstimate { base, sums })
    }
}

/// Properties estimated with the Joback method.
///
/// Properties that depend on coefficients which are not available for all
/// groups of the molecule return [GcError::MissingParameters](gcprop_core::GcError::MissingParameters).
#[derive(Clone, Debug)]
pub struct JobackEstimate {
    base: BaseProperties,
    sums: JobackRecord,
}

impl PureProperties for JobackEstimate {
    fn base(&self) -> &BaseProperties {
        &self.base
    }
}

impl JobackEstimate {
    /// Group contributions summed over the molecule.
    pub fn contributions(&self) -> &JobackRecord {
        &self.sums
    }

    pub fn melting_temperature(&self) -> GcResult<Temperature> {
        Ok((TF0 + require(self.sums.tf, METHOD, "tf")?) * KELVIN)
    }

    fn molar_energy(&self, offset: f64, sum: f64) -> MolarEnergy {
        (offset + sum) * KILO * JOULE / MOL
    }

    /// Ideal gas enthalpy of formation at 298 K.
    pub fn molar_enthalpy_of_formation(&self) -> GcResult<MolarEnergy> {
        Ok(self.molar_energy(HF0, require(self.sums.hf, METHOD, "hf")?))
    }

    /// Ideal gas Gibbs energy of formation at 298 K.
    pub fn molar_gibbs_energy_of_formation(&self) -> GcResult<MolarEnergy> {
        Ok(self.molar_energy(GF0, require(self.sums.gf, METHOD, "gf")?))
    }

    /// Enthalpy of vaporization at the normal boiling point.
    pub fn molar_enthalpy_of_vaporization(&self) -> GcResult<MolarEnergy> {
        let hv = require(self.sums.hv, METHOD, "hv")?;
        Ok(self.molar_energy(HV0, hv * CAL_TO_KJ))
    }

    pub fn molar_enthalpy_of_fusion(&self) -> GcResult<MolarEnergy> {
        let hm = require(self.sums.hm, METHOD, "hm")?;
        Ok(self.molar_energy(HM0, hm * CAL_TO_KJ))
    }

    pub fn enthalpy_of_formation(&self) -> GcResult<SpecificEnergy> {
        Ok(self.molar_enthalpy_of_formation()? / self.molar_weight())
    }

    pub fn gibbs_energy_of_formation(&self) -> GcResult<SpecificEnergy> {
        Ok(self.molar_gibbs_energy_of_formation()? / self.molar_weight())
    }

    pub fn enthalpy_of_vaporization(&self) -> GcResult<SpecificEnergy> {
        Ok(self.molar_enthalpy_of_vaporization()? / self.molar_weight())
    }

    pub fn enthalpy_of_fusion(&self) -> GcResult<SpecificEnergy> {
        Ok(self.molar_enthalpy_of_fusion()? / self.molar_weight())
    }

    /// Coefficients of the ideal gas heat capacity polynomial
    /// `cp = a + b T + c T² + d T³` in J/mol/K with T in K.
    pub fn heat_capacity_coefficients(&self) -> GcResult<[f64; 4]> {
        let s = &self.sums;
        Ok([
            CP0[0] + require(s.a, METHOD, "a")?,
            CP0[1] + require(s.b, METHOD, "b")?,
            CP0[2] + require(s.c, METHOD, "c")?,
            CP0[3] + require(s.d, METHOD, "d")?,
        ])
    }

    /// Ideal gas heat capacity per mole.
    pub fn molar_heat_capacity(&self, temperature: Temperature) -> GcResult<MolarEntropy> {
        let [a, b, c, d] = self.heat_capacity_coefficients()?;
        let t = temperature.to_si();
        if t < CP_RANGE.0 || t > CP_RANGE.1 {
            warn!("{METHOD}: heat capacity evaluated at {temperature} outside of 273 K to 1000 K");
        }
        Ok((a + t * (b + t * (c + t * d))) * JOULE / MOL / KELVIN)
    }

    /// Ideal gas heat capacity per mass.
    pub fn heat_capacity(&self, temperature: Temperature) -> GcResult<SpecificEntropy> {
        Ok(self.molar_heat_capacity(temperature)? / self.molar_weight())
    }

    /// Parameters `(ηa, ηb)` of the liquid viscosity
    /// `η = M exp(ηa / T + ηb)` with η in Pa s, M in g/mol and T in K.
    pub fn viscosity_parameters(&self) -> GcResult<(f64, f64)> {
        Ok((
            require(self.sums.mua, METHOD, "mua")? + MUA0,
            require(self.sums.mub, METHOD, "mub")? + MUB0,
        ))
    }

    /// Liquid viscosity, valid from the melting point to about 0.7 Tc.
    pub fn viscosity(&self, temperature: Temperature) -> GcResult<Viscosity> {
        let (mua, mub) = self.viscosity_parameters()?;
        let t = temperature.to_si();
        if t > 0.7 * self.critical_temperature().to_si() {
            warn!("{METHOD}: liquid viscosity evaluated at {temperature} above 0.7 Tc");
        }
        let m = (self.molar_weight() / (GRAM / MOL)).into_value();
        Ok(finite(m * (mua / t + mub).exp(), "viscosity")? * PASCAL * SECOND)
    }

    pub fn heat_capacity_sweep(
        &self,
        temperature: &Temperature<Array1<f64>>,
    ) -> GcResult<SpecificEntropy<Array1<f64>>> {
        temperature.iter().map(|t| self.heat_capacity(t)).collect()
    }

    pub fn viscosity_sweep(&self, temperature: &Temperature<Array1<f64>>) -> GcResult<Viscosity<Array1<f64>>> {
        temperature.iter().map(|t| self.viscosity(t)).collect()
    }
}

impl fmt::Display for JobackEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Ok(tf) = self.melting_temperature() {
            write!(f, "\n\tTf = {tf:.2}")?;
        }
        if let Ok(hf) = self.molar_enthalpy_of_formation() {
            write!(f, "\n\tHf = {hf:.2}")?;
        }
        if let Ok(gf) = self.molar_gibbs_energy_of_formation() {
            write!(f, "\n\tGf = {gf:.2}")?;
        }
        if let Ok(hv) = self.molar_enthalpy_of_vaporization() {
            write!(f, "\n\tHv = {hv:.2}")?;
        }
        if let Ok(hm) = self.molar_enthalpy_of_fusion() {
            write!(f, "\n\tHm = {hm:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EstimateBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn acetone() -> GcResult<()> {
        let acetone = EstimateBuilder::new(&Joback::new())
            .groups(&[(0, 2), (23, 1)])
            .build()?;
        assert_eq!(acetone.composition().hill_formula(), "C3H6O");
        assert_relative_eq!(acetone.boiling_temperature(), 322.11 * KELVIN, max_relative = 1e-10);
        assert_relative_eq!(acetone.melting_temperature()?, 173.5 * KELVIN, max_relative = 1e-10);
        assert_relative_eq!(acetone.critical_temperature(), 500.5590049525365 * KELVIN, max_relative = 1e-10);
        assert_relative_eq!(acetone.critical_pressure(), 48.024996049944065 * BAR, max_relative = 1e-10);
        assert_relative_eq!(
            acetone.molar_critical_volume()?.to_unit("cm³/mol")?,
            209.5,
            max_relative = 1e-10
        );
        Ok(())
    }

    #[test]
    fn enthalpies_from_calories() -> GcResult<()> {
        let acetone = EstimateBuilder::new(&Joback::new())
            .groups(&[(0, 2), (23, 1)])
            .build()?;
        assert_eq!(acetone.contributions().hv, Some(2.0 * 567.0 + 2144.0));
        assert_eq!(acetone.contributions().hm, Some(2.0 * 217.0 + 1001.0));
        assert_eq!(
            acetone.molar_enthalpy_of_vaporization()?,
            (15.3 + 3278.0 * 0.004184) * KILO * JOULE / MOL
        );
        assert_eq!(
            acetone.molar_enthalpy_of_fusion()?,
            (-0.88 + 1435.0 * 0.004184) * KILO * JOULE / MOL
        );
        Ok(())
    }

    #[test]
    fn missing_coefficients() -> GcResult<()> {
        // propan-2-imine: =NH has no critical contributions
        let estimate = Joback::new().estimate(&MolecularInput::new(
            gcprop_core::parameter::ChemicalRecord::from_groups(&[(0, 2), (6, 1), (35, 1)]),
        ));
        assert!(matches!(estimate, Err(GcError::MissingParameters(_))));

        // the -N= (nonring) group lacks the volume and viscosity contributions
        let estimate = EstimateBuilder::new(&Joback::new())
            .groups(&[(0, 2), (33, 1), (5, 1)])
            .build()?;
        assert!(estimate.molar_critical_volume().is_err());
        assert!(estimate.viscosity(300.0 * KELVIN).is_err());
        assert!(estimate.molar_enthalpy_of_vaporization().is_ok());
        Ok(())
    }

    #[test]
    fn critical_temperature_denominator() {
        // 0.584 + 0.965 * 1.4079 - 1.4079² < 0
        let estimate = EstimateBuilder::new(&Joback::new()).groups(&[(19, 19)]).build();
        assert!(matches!(
            estimate,
            Err(GcError::OutOfCorrelationRange("critical temperature", _))
        ));
    }

    #[test]
    fn heat_capacity_polynomial() -> GcResult<()> {
        let acetone = EstimateBuilder::new(&Joback::new())
            .groups(&[(0, 2), (23, 1)])
            .build()?;
        let [a, b, c, d] = acetone.heat_capacity_coefficients()?;
        assert_relative_eq!(a, -37.93 + 2.0 * 19.5 + 6.45, max_relative = 1e-12);
        assert_relative_eq!(d, 2.06e-7 - 2.0 * 9.67e-8 + 2.86e-9, max_relative = 1e-10);
        let t = 298.15;
        let cp = a + b * t + c * t * t + d * t * t * t;
        assert_relative_eq!(
            acetone.molar_heat_capacity(t * KELVIN)?,
            cp * JOULE / MOL / KELVIN,
            max_relative = 1e-12
        );
        let sweep = acetone.heat_capacity_sweep(&Temperature::<Array1<f64>>::linspace(300.0 * KELVIN, 500.0 * KELVIN, 3))?;
        assert_relative_eq!(sweep.get(0), acetone.heat_capacity(300.0 * KELVIN)?, max_relative = 1e-14);
        Ok(())
    }
}
