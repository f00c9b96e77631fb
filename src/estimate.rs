use crate::corresponding_states::{lee_kesler_acentric_factor, rackett_specific_gravity};
use crate::joback::{Joback, JobackEstimate};
use crate::nannoolal::{Nannoolal, NannoolalEstimate};
use crate::valderrama::{Valderrama, ValderramaEstimate};
use gcprop_core::parameter::{ChemicalRecord, GroupRecord, GroupTable};
use gcprop_core::si::*;
use gcprop_core::{Composition, GcError, GcResult};
use log::debug;
use std::fmt;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Structure of a molecule and the properties that are known beforehand.
///
/// Known properties always take precedence over the estimated ones.
#[derive(Clone, Debug)]
pub struct MolecularInput {
    pub chemical_record: ChemicalRecord,
    pub molar_weight: Option<MolarWeight>,
    pub boiling_temperature: Option<Temperature>,
    pub specific_gravity: Option<f64>,
}

impl MolecularInput {
    pub fn new(chemical_record: ChemicalRecord) -> Self {
        Self {
            chemical_record,
            molar_weight: None,
            boiling_temperature: None,
            specific_gravity: None,
        }
    }
}

impl From<ChemicalRecord> for MolecularInput {
    fn from(chemical_record: ChemicalRecord) -> Self {
        Self::new(chemical_record)
    }
}

/// A group-contribution method.
pub trait GroupContribution: Sync {
    /// Coefficients of a single group.
    type Record;
    type Estimate: PureProperties + Send;

    fn table(&self) -> &GroupTable<Self::Record>;

    fn estimate(&self, input: &MolecularInput) -> GcResult<Self::Estimate>;

    fn name(&self) -> &'static str {
        self.table().method()
    }
}

/// Groups of a molecule resolved against the table of a method.
pub(crate) struct Molecule<'a, M> {
    pub groups: Vec<(&'a GroupRecord<M>, f64)>,
    pub composition: Composition,
    pub molar_weight: MolarWeight,
}

impl<'a, M> Molecule<'a, M> {
    pub fn new(table: &'a GroupTable<M>, input: &MolecularInput) -> GcResult<Self> {
        let groups = table.group_map(&input.chemical_record)?;
        let composition = table.composition(&input.chemical_record)?;
        let molar_weight = input
            .molar_weight
            .unwrap_or_else(|| composition.molar_weight());
        debug!(
            "{}: {} ({} atoms, {} heavy atoms, M = {})",
            table.method(),
            composition,
            composition.total_atoms(),
            composition.heavy_atoms(),
            molar_weight
        );
        Ok(Self {
            groups,
            composition,
            molar_weight,
        })
    }

    /// Model records with their number of occurrences.
    pub fn records(&self) -> Vec<(&'a M, f64)> {
        self.groups.iter().map(|&(g, n)| (&g.model_record, n)).collect()
    }

    pub fn heavy_atoms(&self) -> f64 {
        self.composition.heavy_atoms() as f64
    }

    pub fn molar_weight_g_mol(&self) -> f64 {
        (self.molar_weight / (GRAM / MOL)).into_value()
    }
}

/// Unwrap an aggregated contribution or fail with the property that needs it.
pub(crate) fn require(sum: Option<f64>, method: &str, coefficient: &str) -> GcResult<f64> {
    sum.ok_or_else(|| {
        GcError::MissingParameters(format!(
            "{method}: at least one group has no `{coefficient}` contribution"
        ))
    })
}

/// Properties every method provides.
#[derive(Clone, Debug)]
pub struct BaseProperties {
    pub method: &'static str,
    pub chemical_record: ChemicalRecord,
    pub composition: Composition,
    pub molar_weight: MolarWeight,
    pub boiling_temperature: Temperature,
    pub critical_temperature: Temperature,
    pub critical_pressure: Pressure,
    pub critical_volume: Option<MolarVolume>,
    pub acentric_factor: Option<f64>,
    pub specific_gravity: Option<f64>,
}

impl BaseProperties {
    pub(crate) fn new<M>(
        method: &'static str,
        input: &MolecularInput,
        molecule: Molecule<'_, M>,
        boiling_temperature: Temperature,
        critical_temperature: Temperature,
        critical_pressure: Pressure,
        critical_volume: Option<MolarVolume>,
    ) -> Self {
        let acentric_factor = lee_kesler_acentric_factor(
            boiling_temperature,
            critical_temperature,
            critical_pressure,
        );
        let specific_gravity = input.specific_gravity.or_else(|| {
            acentric_factor.and_then(|omega| {
                rackett_specific_gravity(
                    critical_temperature,
                    critical_pressure,
                    omega,
                    molecule.molar_weight,
                )
            })
        });
        Self {
            method,
            chemical_record: input.chemical_record.clone(),
            composition: molecule.composition,
            molar_weight: molecule.molar_weight,
            boiling_temperature,
            critical_temperature,
            critical_pressure,
            critical_volume,
            acentric_factor,
            specific_gravity,
        }
    }
}

/// Accessors shared by the estimates of all methods.
pub trait PureProperties {
    fn base(&self) -> &BaseProperties;

    fn composition(&self) -> &Composition {
        &self.base().composition
    }

    fn molar_weight(&self) -> MolarWeight {
        self.base().molar_weight
    }

    fn boiling_temperature(&self) -> Temperature {
        self.base().boiling_temperature
    }

    fn critical_temperature(&self) -> Temperature {
        self.base().critical_temperature
    }

    fn critical_pressure(&self) -> Pressure {
        self.base().critical_pressure
    }

    fn molar_critical_volume(&self) -> GcResult<MolarVolume> {
        let base = self.base();
        base.critical_volume
            .ok_or_else(|| missing(base.method, "critical volume"))
    }

    fn critical_volume(&self) -> GcResult<SpecificVolume> {
        Ok(self.molar_critical_volume()? / self.molar_weight())
    }

    fn acentric_factor(&self) -> GcResult<f64> {
        let base = self.base();
        base.acentric_factor
            .ok_or_else(|| missing(base.method, "acentric factor"))
    }

    fn specific_gravity(&self) -> GcResult<f64> {
        let base = self.base();
        base.specific_gravity
            .ok_or_else(|| missing(base.method, "specific gravity"))
    }
}

fn missing(method: &str, property: &str) -> GcError {
    GcError::MissingParameters(format!("{method}: {property} is not available"))
}

impl fmt::Display for BaseProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} estimate for {}", self.method, self.composition)?;
        if let Some(name) = &self.chemical_record.identifier.name {
            write!(f, " ({name})")?;
        }
        write!(f, "\n\tM = {:.3}", self.molar_weight)?;
        write!(f, "\n\tTb = {:.2}", self.boiling_temperature)?;
        write!(f, "\n\tTc = {:.2}", self.critical_temperature)?;
        write!(f, "\n\tPc = {:.4}", self.critical_pressure)?;
        if let Some(vc) = self.critical_volume {
            write!(f, "\n\tVc = {:.4e}", vc.to_si())?;
            write!(f, " m³/mol")?;
        }
        if let Some(omega) = self.acentric_factor {
            write!(f, "\n\tω = {omega:.4}")?;
        }
        if let Some(sg) = self.specific_gravity {
            write!(f, "\n\tSG = {sg:.4}")?;
        }
        Ok(())
    }
}

/// Builder for a single estimate.
///
/// # Example
/// ```
/// # use gcprop::{EstimateBuilder, PureProperties};
/// # use gcprop::joback::Joback;
/// # use gcprop_core::si::KELVIN;
/// # use approx::assert_relative_eq;
/// let acetone = EstimateBuilder::new(&Joback::new())
///     .groups(&[(0, 2), (23, 1)])
///     .build()
///     .unwrap();
/// assert_relative_eq!(acetone.boiling_temperature(), 322.11 * KELVIN, max_relative = 1e-10);
/// ```
pub struct EstimateBuilder<'a, G> {
    method: &'a G,
    chemical_record: Option<ChemicalRecord>,
    molar_weight: Option<MolarWeight>,
    boiling_temperature: Option<Temperature>,
    specific_gravity: Option<f64>,
}

impl<'a, G: GroupContribution> EstimateBuilder<'a, G> {
    pub fn new(method: &'a G) -> Self {
        Self {
            method,
            chemical_record: None,
            molar_weight: None,
            boiling_temperature: None,
            specific_gravity: None,
        }
    }

    /// Groups of the molecule as `(index, count)` pairs.
    pub fn groups(mut self, groups: &[(usize, usize)]) -> Self {
        self.chemical_record = Some(ChemicalRecord::from_groups(groups));
        self
    }

    pub fn chemical_record(mut self, chemical_record: &ChemicalRecord) -> Self {
        self.chemical_record = Some(chemical_record.clone());
        self
    }

    pub fn molar_weight(mut self, molar_weight: MolarWeight) -> Self {
        self.molar_weight = Some(molar_weight);
        self
    }

    pub fn boiling_temperature(mut self, boiling_temperature: Temperature) -> Self {
        self.boiling_temperature = Some(boiling_temperature);
        self
    }

    pub fn specific_gravity(mut self, specific_gravity: f64) -> Self {
        self.specific_gravity = Some(specific_gravity);
        self
    }

    pub fn build(self) -> GcResult<G::Estimate> {
        let chemical_record = self.chemical_record.ok_or(GcError::EmptyMolecule)?;
        let input = MolecularInput {
            chemical_record,
            molar_weight: self.molar_weight,
            boiling_temperature: self.boiling_temperature,
            specific_gravity: self.specific_gravity,
        };
        self.method.estimate(&input)
    }
}

/// Estimate the properties of many molecules with the same method.
///
/// Results are in the order of `inputs`; a failure only affects the
/// corresponding entry. With the `rayon` feature the molecules are
/// processed in parallel.
pub fn estimate_batch<G: GroupContribution>(
    method: &G,
    inputs: &[MolecularInput],
) -> Vec<GcResult<G::Estimate>> {
    #[cfg(feature = "rayon")]
    let iter = inputs.par_iter();
    #[cfg(not(feature = "rayon"))]
    let iter = inputs.iter();
    iter.map(|input| method.estimate(input)).collect()
}

/// Any of the available methods, selected at runtime.
#[derive(Clone)]
pub enum Estimator {
    Joback(Joback),
    Nannoolal(Nannoolal),
    Valderrama(Valderrama),
}

impl Estimator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Joback(m) => m.name(),
            Self::Nannoolal(m) => m.name(),
            Self::Valderrama(m) => m.name(),
        }
    }

    pub fn estimate(&self, input: &MolecularInput) -> GcResult<CompoundEstimate> {
        Ok(match self {
            Self::Joback(m) => CompoundEstimate::Joback(m.estimate(input)?),
            Self::Nannoolal(m) => CompoundEstimate::Nannoolal(m.estimate(input)?),
            Self::Valderrama(m) => CompoundEstimate::Valderrama(m.estimate(input)?),
        })
    }
}

/// Result of any of the available methods.
#[derive(Clone, Debug)]
pub enum CompoundEstimate {
    Joback(JobackEstimate),
    Nannoolal(NannoolalEstimate),
    Valderrama(ValderramaEstimate),
}

impl PureProperties for CompoundEstimate {
    fn base(&self) -> &BaseProperties {
        match self {
            Self::Joback(e) => e.base(),
            Self::Nannoolal(e) => e.base(),
            Self::Valderrama(e) => e.base(),
        }
    }
}

impl fmt::Display for CompoundEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joback(e) => fmt::Display::fmt(e, f),
            Self::Nannoolal(e) => fmt::Display::fmt(e, f),
            Self::Valderrama(e) => fmt::Display::fmt(e, f),
        }
    }
}
