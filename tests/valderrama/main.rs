//! Valderrama estimates with a custom group table read from JSON.
//!
//! The coefficients in `groups.json` are round numbers, not the published
//! parameters.
use approx::assert_relative_eq;
use gcprop::valderrama::Valderrama;
use gcprop::{EstimateBuilder, GcError, GcResult, GroupContribution, PureProperties};
use gcprop_core::si::*;

/// 10 x =CH- (ring), 4 x =C< (fused ring)
const PHENANTHRENE: [(usize, usize); 2] = [(0, 10), (1, 4)];

fn valderrama() -> GcResult<Valderrama> {
    Valderrama::from_json("tests/valderrama/groups.json")
}

#[test]
fn phenanthrene() -> GcResult<()> {
    let valderrama = valderrama()?;
    assert_eq!(valderrama.table().len(), 3);
    let estimate = EstimateBuilder::new(&valderrama)
        .groups(&PHENANTHRENE)
        .boiling_temperature(613.0 * KELVIN)
        .build()?;
    assert_eq!(estimate.composition().hill_formula(), "C14H10");
    // g1 = 38.91 + 218^0.88, g2 = 5.84 + 11.3^1.27, Pc = (g1 / g2)² bar
    assert_relative_eq!(
        estimate.critical_pressure().to_unit("bar")?,
        30.820803144174885,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.critical_temperature(),
        850.2693446059798 * KELVIN,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.molar_critical_volume()?.to_unit("cm³/mol")?,
        539.3444009287596,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        estimate.critical_volume()?.to_unit("cm³/g")?,
        539.3444009287596 / 178.234,
        max_relative = 1e-10
    );
    assert!(estimate.acentric_factor().is_ok());
    Ok(())
}

#[test]
fn critical_point_does_not_depend_on_boiling_temperature() -> GcResult<()> {
    let valderrama = valderrama()?;
    let low = EstimateBuilder::new(&valderrama)
        .groups(&PHENANTHRENE)
        .boiling_temperature(372.7 * KELVIN)
        .build()?;
    let high = EstimateBuilder::new(&valderrama)
        .groups(&PHENANTHRENE)
        .boiling_temperature(613.0 * KELVIN)
        .build()?;
    assert_eq!(low.critical_temperature(), high.critical_temperature());
    assert_eq!(low.critical_pressure(), high.critical_pressure());
    assert!(low.acentric_factor()? != high.acentric_factor()?);
    Ok(())
}

#[test]
fn boiling_temperature_is_required() -> GcResult<()> {
    let result = EstimateBuilder::new(&valderrama()?)
        .groups(&PHENANTHRENE)
        .build();
    assert!(matches!(
        result,
        Err(GcError::MissingRequiredInput("Valderrama", "boiling_temperature"))
    ));
    Ok(())
}

#[test]
fn known_properties_win() -> GcResult<()> {
    let estimate = EstimateBuilder::new(&valderrama()?)
        .groups(&PHENANTHRENE)
        .boiling_temperature(613.0 * KELVIN)
        .molar_weight(178.23 * GRAM / MOL)
        .specific_gravity(1.18)
        .build()?;
    assert_eq!(estimate.molar_weight(), 178.23 * GRAM / MOL);
    assert_eq!(estimate.specific_gravity()?, 1.18);
    Ok(())
}

#[test]
fn missing_volume_contribution() -> GcResult<()> {
    // 1-methylphenanthrene
    let estimate = EstimateBuilder::new(&valderrama()?)
        .groups(&[(0, 9), (1, 5), (2, 1)])
        .boiling_temperature(627.0 * KELVIN)
        .build()?;
    assert!(matches!(
        estimate.molar_critical_volume(),
        Err(GcError::MissingParameters(_))
    ));
    assert!(estimate.critical_pressure() > 0.0 * BAR);
    Ok(())
}
