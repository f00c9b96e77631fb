#![warn(clippy::all)]
//! Group-contribution estimation of pure-component properties.
//!
//! A molecule is described by a [ChemicalRecord](gcprop_core::parameter::ChemicalRecord),
//! a list of `(group index, count)` pairs that refer to the group table of
//! a method. Three methods are available:
//!
//! - [joback]: critical point, boiling and melting point, energies of
//!   formation, ideal gas heat capacity and liquid viscosity with the
//!   built-in table of Joback & Reid.
//! - [nannoolal]: boiling point, critical point, vapor pressure and liquid
//!   viscosity including corrections for interacting functional groups.
//! - [valderrama]: critical point from a known boiling point.
//!
//! Every estimate additionally carries the acentric factor and the specific
//! gravity from corresponding-states correlations
//! (see [corresponding_states]). All results are typed quantities of
//! [gcprop_core::si].
//!
//! # Example
//! ```
//! # use gcprop::{EstimateBuilder, PureProperties};
//! # use gcprop::joback::Joback;
//! # use gcprop_core::GcResult;
//! # fn main() -> GcResult<()> {
//! let p_dichlorobenzene = EstimateBuilder::new(&Joback::new())
//!     .groups(&[(16, 2), (13, 4), (14, 2)])
//!     .build()?;
//! println!("{p_dichlorobenzene}");
//! let tb = p_dichlorobenzene.boiling_temperature().to_unit("°C")?;
//! assert!((tb - 170.25).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

pub mod corresponding_states;
mod estimate;
pub mod joback;
pub mod nannoolal;
pub mod valderrama;

pub use estimate::{
    estimate_batch, BaseProperties, CompoundEstimate, EstimateBuilder, Estimator,
    GroupContribution, MolecularInput, PureProperties,
};
pub use gcprop_core::parameter::{ChemicalRecord, Identifier};
pub use gcprop_core::{Composition, GcError, GcResult};
