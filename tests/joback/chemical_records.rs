use approx::assert_relative_eq;
use gcprop::joback::Joback;
use gcprop::{
    estimate_batch, ChemicalRecord, EstimateBuilder, GcError, GcResult, MolecularInput,
    PureProperties,
};
use gcprop_core::parameter::IdentifierOption;
use gcprop_core::si::*;

const FILE: &str = "tests/joback/chemical_records.json";

#[test]
fn read_all_records() -> GcResult<()> {
    let records = ChemicalRecord::from_json(FILE)?;
    assert_eq!(records.len(), 4);
    assert_eq!(records[1].identifier.cas.as_deref(), Some("106-46-7"));
    assert_eq!(records[3].identifier.name, None);
    assert_eq!(records[3], ChemicalRecord::from_groups(&[(0, 1), (1, 3), (19, 1)]));
    Ok(())
}

#[test]
fn select_by_name() -> GcResult<()> {
    let records =
        ChemicalRecord::from_json_by(&["hexane", "acetone"], FILE, IdentifierOption::Name)?;
    let names: Vec<_> = records
        .iter()
        .map(|r| r.identifier.name.as_deref())
        .collect();
    assert_eq!(names, vec![Some("hexane"), Some("acetone")]);

    let acetone = EstimateBuilder::new(&Joback::new())
        .chemical_record(&records[1])
        .build()?;
    assert_relative_eq!(acetone.critical_temperature(), 500.5590049525365 * KELVIN, max_relative = 1e-10);
    assert!(acetone.to_string().contains("(acetone)"));
    Ok(())
}

#[test]
fn select_by_cas() -> GcResult<()> {
    let records = ChemicalRecord::from_json_by(
        &["106-46-7", "67-64-1"],
        FILE,
        IdentifierOption::Cas,
    )?;
    let inputs: Vec<_> = records.into_iter().map(MolecularInput::from).collect();
    let results = estimate_batch(&Joback::new(), &inputs);
    let tb: Vec<Temperature> = results
        .into_iter()
        .map(|r| r.map(|e| e.boiling_temperature()))
        .collect::<GcResult<_>>()?;
    assert_relative_eq!(tb[0], 443.4 * KELVIN, max_relative = 1e-10);
    assert_relative_eq!(tb[1], 322.11 * KELVIN, max_relative = 1e-10);
    Ok(())
}

#[test]
fn unknown_substance() {
    let result = ChemicalRecord::from_json_by(
        &["acetone", "toluene"],
        FILE,
        IdentifierOption::Name,
    );
    match result {
        Err(GcError::IncompatibleParameters(message)) => assert!(message.contains("toluene")),
        other => panic!("expected an error for toluene, got {other:?}"),
    }
    // records without the requested identifier are skipped
    assert!(ChemicalRecord::from_json_by(&["C3H6O"], FILE, IdentifierOption::Formula).is_ok());
    assert!(ChemicalRecord::from_json_by(&["C6H14"], FILE, IdentifierOption::Formula).is_err());
}
