use approx::assert_relative_eq;
use gcprop::joback::{Joback, JOBACK_TABLE};
use gcprop::{EstimateBuilder, GcError, GcResult, GroupContribution, PureProperties};
use gcprop_core::parameter::GroupTable;
use std::sync::Arc;

#[test]
fn group_order_does_not_matter() -> GcResult<()> {
    let joback = Joback::new();
    let a = EstimateBuilder::new(&joback)
        .groups(&[(16, 2), (13, 4), (14, 2)])
        .build()?;
    let b = EstimateBuilder::new(&joback)
        .groups(&[(14, 2), (16, 2), (13, 4)])
        .build()?;
    assert_relative_eq!(a.critical_temperature(), b.critical_temperature(), max_relative = 1e-12);
    assert_relative_eq!(a.critical_pressure(), b.critical_pressure(), max_relative = 1e-12);
    assert_eq!(a.composition(), b.composition());
    Ok(())
}

#[test]
fn repeated_groups_are_merged() -> GcResult<()> {
    let joback = Joback::new();
    let merged = EstimateBuilder::new(&joback)
        .groups(&[(16, 2), (13, 4), (14, 2)])
        .build()?;
    let split = EstimateBuilder::new(&joback)
        .groups(&[(13, 2), (16, 2), (13, 2), (14, 2)])
        .build()?;
    assert_relative_eq!(
        merged.boiling_temperature(),
        split.boiling_temperature(),
        max_relative = 1e-12
    );
    Ok(())
}

#[test]
fn repeated_estimates_are_identical() -> GcResult<()> {
    let joback = Joback::new();
    let build = || {
        EstimateBuilder::new(&joback)
            .groups(&[(0, 2), (23, 1)])
            .build()
    };
    let (a, b) = (build()?, build()?);
    assert_eq!(a.critical_temperature(), b.critical_temperature());
    assert_eq!(a.critical_pressure(), b.critical_pressure());
    assert_eq!(a.molar_critical_volume()?, b.molar_critical_volume()?);
    assert_eq!(a.to_string(), b.to_string());
    Ok(())
}

#[test]
fn invalid_molecules() {
    let joback = Joback::new();
    assert!(matches!(
        EstimateBuilder::new(&joback).groups(&[]).build(),
        Err(GcError::EmptyMolecule)
    ));
    assert!(matches!(
        EstimateBuilder::new(&joback).groups(&[(0, 2), (41, 1)]).build(),
        Err(GcError::UnknownGroupIndex(41, "Joback"))
    ));
    assert!(matches!(
        EstimateBuilder::new(&joback).groups(&[(0, 0)]).build(),
        Err(GcError::InvalidGroupCount(0))
    ));
}

#[test]
fn table_from_json() -> GcResult<()> {
    let json = JOBACK_TABLE.to_json()?;
    let table = GroupTable::from_json_str("Joback", &json)?;
    assert_eq!(table.len(), 41);
    let joback = Joback::from_table(Arc::new(table));
    assert_eq!(joback.name(), "Joback");
    let a = EstimateBuilder::new(&joback)
        .groups(&[(0, 2), (23, 1)])
        .build()?;
    let b = EstimateBuilder::new(&Joback::new())
        .groups(&[(0, 2), (23, 1)])
        .build()?;
    assert_eq!(a.critical_temperature(), b.critical_temperature());
    Ok(())
}
