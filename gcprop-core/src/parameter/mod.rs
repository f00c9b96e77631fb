//! Group records, group tables and the chemical records of compounds.
//!
//! Every group-contribution method owns one [GroupTable] of
//! [GroupRecord]s. The method-specific coefficients live in the model record
//! `M`, which implements [FromGroups] to combine the contributions of all
//! groups of a molecule.

mod chemical_record;
mod from_groups;
mod group;
mod identifier;

pub use chemical_record::{ChemicalRecord, GroupCount};
pub use from_groups::{contribution_sum, FromGroups};
pub use group::{GroupRecord, GroupTable};
pub use identifier::{Identifier, IdentifierOption};
