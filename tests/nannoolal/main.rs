//! Nannoolal estimates with a custom group table read from JSON.
//!
//! The coefficients in `groups.json` and `interactions.json` are round
//! numbers, not the published parameters. Expected values follow from the
//! correlations evaluated by hand.
use approx::assert_relative_eq;
use gcprop::nannoolal::Nannoolal;
use gcprop::{
    estimate_batch, ChemicalRecord, CompoundEstimate, EstimateBuilder, Estimator, GcError,
    GcResult, MolecularInput, PureProperties,
};
use gcprop_core::si::*;

/// 6 x -CH3, 2 x -CH2-, 2 x >C<
const BRANCHED_ALKANE: [(usize, usize); 3] = [(0, 6), (1, 2), (2, 2)];
/// bicyclic C10H16 built from ring groups
const BICYCLIC_RING: [(usize, usize); 6] = [(0, 3), (3, 2), (4, 2), (5, 1), (6, 1), (7, 1)];

fn nannoolal() -> GcResult<Nannoolal> {
    Nannoolal::from_json(
        "tests/nannoolal/groups.json",
        "tests/nannoolal/interactions.json",
    )
}

#[test]
fn branched_alkane() -> GcResult<()> {
    let estimate = EstimateBuilder::new(&nannoolal()?)
        .groups(&BRANCHED_ALKANE)
        .build()?;
    assert_eq!(estimate.composition().hill_formula(), "C10H22");
    assert_eq!(estimate.composition().heavy_atoms(), 10);
    // Tb = 2160 / (10^0.6583 + 1.6868) + 84.3395
    assert_relative_eq!(
        estimate.boiling_temperature(),
        430.5030746006969 * KELVIN,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.critical_temperature(),
        603.2985052231525 * KELVIN,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.critical_pressure().to_unit("kPa")?,
        1506.6386405015096,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_critical_volume()?.to_unit("cm³/mol")?,
        965.7240919821164,
        max_relative = 1e-10
    );
    let (dbv, tv) = estimate.viscosity_parameters()?;
    assert_relative_eq!(dbv, 0.248, max_relative = 1e-12);
    assert_relative_eq!(tv, 165.0 * KELVIN, max_relative = 1e-12);
    assert_relative_eq!(
        estimate.viscosity(300.0 * KELVIN)?.to_unit("cP")?,
        1.1581124122642035,
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn ring_vapor_pressure() -> GcResult<()> {
    let estimate = EstimateBuilder::new(&nannoolal()?)
        .groups(&BICYCLIC_RING)
        .boiling_temperature(429.0 * KELVIN)
        .build()?;
    assert_eq!(estimate.composition().hill_formula(), "C10H16");
    // dB = 0.27 - 0.176055
    assert_relative_eq!(estimate.vapor_pressure_parameter()?, 0.093945, max_relative = 1e-10);
    assert_relative_eq!(
        estimate.vapor_pressure(388.15 * KELVIN)?.to_unit("kPa")?,
        31.14820372613307,
        max_relative = 1e-10
    );
    assert!(matches!(
        estimate.viscosity(300.0 * KELVIN),
        Err(GcError::MissingParameters(_))
    ));
    Ok(())
}

#[test]
fn interaction_symmetry() -> GcResult<()> {
    let nannoolal = nannoolal()?;
    // 4-hydroxybutan-2-one
    let a = EstimateBuilder::new(&nannoolal)
        .groups(&[(0, 1), (9, 1), (1, 2), (8, 1)])
        .build()?;
    let b = EstimateBuilder::new(&nannoolal)
        .groups(&[(8, 1), (1, 2), (9, 1), (0, 1)])
        .build()?;
    let correction = a.interaction_correction();
    assert_eq!(correction, b.interaction_correction());
    // two ordered pairs (A,B), (B,A) over 6 heavy atoms and m - 1 = 1
    assert_relative_eq!(correction.tb.unwrap(), -52.0 / 6.0, max_relative = 1e-12);
    assert_relative_eq!(correction.pc.unwrap(), 0.0008 / 6.0, max_relative = 1e-12);
    assert_relative_eq!(a.critical_pressure(), b.critical_pressure(), max_relative = 1e-12);
    Ok(())
}

#[test]
fn single_interacting_group() -> GcResult<()> {
    let nannoolal = nannoolal()?;
    let butanol = EstimateBuilder::new(&nannoolal)
        .groups(&[(0, 1), (1, 3), (8, 1)])
        .build()?;
    assert_eq!(butanol.interaction_correction().tb, Some(0.0));
    let butanediol = EstimateBuilder::new(&nannoolal)
        .groups(&[(1, 4), (8, 2)])
        .build()?;
    assert_relative_eq!(
        butanediol.interaction_correction().tb.unwrap(),
        2.0 * 48.0 / 6.0,
        max_relative = 1e-12
    );
    Ok(())
}

#[test]
fn runtime_selection() -> GcResult<()> {
    let estimator = Estimator::Nannoolal(nannoolal()?);
    assert_eq!(estimator.name(), "Nannoolal");
    let inputs: Vec<_> = [&BRANCHED_ALKANE[..], &BICYCLIC_RING[..], &[(10, 1)][..]]
        .iter()
        .map(|groups| MolecularInput::new(ChemicalRecord::from_groups(groups)))
        .collect();
    let estimate = estimator.estimate(&inputs[0])?;
    assert!(matches!(estimate, CompoundEstimate::Nannoolal(_)));
    assert_relative_eq!(
        estimate.boiling_temperature(),
        430.5030746006969 * KELVIN,
        max_relative = 1e-10
    );

    let Estimator::Nannoolal(method) = &estimator else {
        unreachable!()
    };
    let results = estimate_batch(method, &inputs);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(results[2], Err(GcError::UnknownGroupIndex(10, "Nannoolal"))));
    Ok(())
}
