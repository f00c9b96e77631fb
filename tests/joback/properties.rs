use approx::assert_relative_eq;
use gcprop::joback::Joback;
use gcprop::{EstimateBuilder, GcResult, PureProperties};
use gcprop_core::si::*;
use ndarray::Array1;

const P_DICHLOROBENZENE: [(usize, usize); 3] = [(16, 2), (13, 4), (14, 2)];

#[test]
fn p_dichlorobenzene() -> GcResult<()> {
    let estimate = EstimateBuilder::new(&Joback::new())
        .groups(&P_DICHLOROBENZENE)
        .build()?;
    assert_eq!(estimate.composition().hill_formula(), "C6H4Cl2");
    assert_eq!(estimate.composition().total_atoms(), 12);
    assert_relative_eq!(estimate.molar_weight(), 146.998 * GRAM / MOL, max_relative = 1e-12);
    assert_relative_eq!(estimate.boiling_temperature(), 443.4 * KELVIN, max_relative = 1e-10);
    assert_relative_eq!(estimate.melting_temperature()?, 256.16 * KELVIN, max_relative = 1e-10);
    assert_relative_eq!(
        estimate.critical_temperature(),
        675.1671746814928 * KELVIN,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.critical_pressure().to_unit("bar")?,
        41.51610160484642,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_critical_volume()?.to_unit("cm³/mol")?,
        361.5,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_enthalpy_of_formation()?.to_unit("kJ/mol")?,
        26.41,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_gibbs_energy_of_formation()?.to_unit("kJ/mol")?,
        78.56,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_enthalpy_of_vaporization()?.to_unit("kJ/mol")?,
        40.65504,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_enthalpy_of_fusion()?.to_unit("kJ/mol")?,
        13.337232,
        max_relative = 1e-10
    );
    Ok(())
}

#[test]
fn specific_properties() -> GcResult<()> {
    let estimate = EstimateBuilder::new(&Joback::new())
        .groups(&P_DICHLOROBENZENE)
        .build()?;
    assert_relative_eq!(
        estimate.critical_volume()?.to_unit("cm³/g")?,
        361.5 / 146.998,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.enthalpy_of_formation()?.to_unit("kJ/kg")?,
        26.41 / 146.998e-3,
        max_relative = 1e-10
    );
    let omega = estimate.acentric_factor()?;
    assert!(omega > 0.0 && omega < 1.0);
    let sg = estimate.specific_gravity()?;
    assert!(sg > 0.5 && sg < 2.0);
    Ok(())
}

#[test]
fn liquid_viscosity() -> GcResult<()> {
    let estimate = EstimateBuilder::new(&Joback::new())
        .groups(&P_DICHLOROBENZENE)
        .build()?;
    assert_relative_eq!(
        estimate.viscosity(350.0 * KELVIN)?,
        0.0006146619220131755 * PASCAL * SECOND,
        max_relative = 1e-10
    );
    let temperature = Temperature::<Array1<f64>>::linspace(300.0 * KELVIN, 400.0 * KELVIN, 5);
    let viscosity = estimate.viscosity_sweep(&temperature)?;
    assert_eq!(viscosity.len(), 5);
    let values: Vec<Viscosity> = viscosity.iter().collect();
    assert!(values.windows(2).all(|w| w[0] > w[1]));
    Ok(())
}
