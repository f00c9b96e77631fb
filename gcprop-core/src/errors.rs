use std::io;
use thiserror::Error;

/// Error type for invalid molecules, incomplete parameters and unit handling.
#[derive(Error, Debug)]
pub enum GcError {
    // generic error with custom message
    #[error("{0}")]
    Error(String),

    // errors related to the molecular input
    #[error("Group index {0} is not defined in the {1} group table.")]
    UnknownGroupIndex(usize, &'static str),
    #[error("Group {0} has a count of zero; counts must be at least 1.")]
    InvalidGroupCount(usize),
    #[error("The molecule does not contain any group.")]
    EmptyMolecule,
    #[error("The {0} method requires `{1}` as input.")]
    MissingRequiredInput(&'static str, &'static str),

    // errors related to the correlations
    #[error("Missing parameters: {0}")]
    MissingParameters(String),
    #[error("The correlation for `{0}` produced a non-finite value.")]
    NonFiniteResult(&'static str),
    #[error("The correlation for `{0}` is undefined for this molecule ({1}).")]
    OutOfCorrelationRange(&'static str, String),

    // errors related to chemical formulas and units
    #[error("Invalid chemical formula: '{0}'")]
    InvalidFormula(String),
    #[error("Unknown element: '{0}'")]
    UnknownElement(String),
    #[error("Unit '{unit}' is not a known unit of {quantity}.")]
    UnknownUnit { unit: String, quantity: &'static str },

    // errors related to parameter handling
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),

    // errors related to file handling
    #[error(transparent)]
    FileIO(#[from] io::Error),

    // json errors
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Convenience type for `Result<T, GcError>`.
pub type GcResult<T> = Result<T, GcError>;

/// Turn a correlation result into an error if it is NaN or infinite.
pub fn finite(value: f64, property: &'static str) -> GcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GcError::NonFiniteResult(property))
    }
}
