//! Physical quantities with compile-time checked units.
//!
//! Every property produced by the estimation methods is wrapped in a
//! [Quantity] whose unit is encoded as a `typenum` array of the seven SI
//! base exponents. Quantities can be built from and read back in named units
//! (see [NamedUnits::from_unit] and [NamedUnits::to_unit]).

#![allow(clippy::type_complexity)]
use std::marker::PhantomData;
use typenum::{ATerm, TArr, N1, N2, N3, P1, P2, P3, Z0};

mod array;
mod fmt;
mod ops;
mod units;

pub use units::NamedUnits;

/// Exponents of second, meter, kilogram, ampere, kelvin, mol and candela.
pub type SIUnit<T, L, M, I, THETA, N, J> =
    TArr<T, TArr<L, TArr<M, TArr<I, TArr<THETA, TArr<N, TArr<J, ATerm>>>>>>>;

/// Physical quantity with compile-time checked unit.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Quantity<T, U>(pub(crate) T, pub(crate) PhantomData<U>);

// base quantities
pub type _Dimensionless = SIUnit<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type _Time = SIUnit<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type _Length = SIUnit<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
pub type _Mass = SIUnit<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type _Temperature = SIUnit<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type _Moles = SIUnit<Z0, Z0, Z0, Z0, Z0, P1, Z0>;

// mechanics
pub type _Area = SIUnit<Z0, P2, Z0, Z0, Z0, Z0, Z0>;
pub type _Volume = SIUnit<Z0, P3, Z0, Z0, Z0, Z0, Z0>;
pub type _Force = SIUnit<N2, P1, P1, Z0, Z0, Z0, Z0>;
pub type _Energy = SIUnit<N2, P2, P1, Z0, Z0, Z0, Z0>;
pub type _Pressure = SIUnit<N2, N1, P1, Z0, Z0, Z0, Z0>;
pub type _Viscosity = SIUnit<N1, N1, P1, Z0, Z0, Z0, Z0>;
pub type _MassDensity = SIUnit<Z0, N3, P1, Z0, Z0, Z0, Z0>;

// per mole and per mass
pub type _MolarWeight = SIUnit<Z0, Z0, P1, Z0, Z0, N1, Z0>;
pub type _MolarVolume = SIUnit<Z0, P3, Z0, Z0, Z0, N1, Z0>;
pub type _SpecificVolume = SIUnit<Z0, P3, N1, Z0, Z0, Z0, Z0>;
pub type _MolarEnergy = SIUnit<N2, P2, P1, Z0, Z0, N1, Z0>;
pub type _SpecificEnergy = SIUnit<N2, P2, Z0, Z0, Z0, Z0, Z0>;
pub type _MolarEntropy = SIUnit<N2, P2, P1, Z0, N1, N1, Z0>;
pub type _SpecificEntropy = SIUnit<N2, P2, Z0, Z0, N1, Z0, Z0>;

pub type Dimensionless<T = f64> = Quantity<T, _Dimensionless>;
pub type Time<T = f64> = Quantity<T, _Time>;
pub type Length<T = f64> = Quantity<T, _Length>;
pub type Mass<T = f64> = Quantity<T, _Mass>;
pub type Temperature<T = f64> = Quantity<T, _Temperature>;
pub type Moles<T = f64> = Quantity<T, _Moles>;
pub type Area<T = f64> = Quantity<T, _Area>;
pub type Volume<T = f64> = Quantity<T, _Volume>;
pub type Force<T = f64> = Quantity<T, _Force>;
pub type Energy<T = f64> = Quantity<T, _Energy>;
pub type Pressure<T = f64> = Quantity<T, _Pressure>;
pub type Viscosity<T = f64> = Quantity<T, _Viscosity>;
pub type MassDensity<T = f64> = Quantity<T, _MassDensity>;
pub type MolarWeight<T = f64> = Quantity<T, _MolarWeight>;
pub type MolarVolume<T = f64> = Quantity<T, _MolarVolume>;
pub type SpecificVolume<T = f64> = Quantity<T, _SpecificVolume>;
pub type MolarEnergy<T = f64> = Quantity<T, _MolarEnergy>;
pub type SpecificEnergy<T = f64> = Quantity<T, _SpecificEnergy>;
pub type MolarEntropy<T = f64> = Quantity<T, _MolarEntropy>;
pub type SpecificEntropy<T = f64> = Quantity<T, _SpecificEntropy>;

pub const SECOND: Time = Quantity(1.0, PhantomData);
pub const METER: Length = Quantity(1.0, PhantomData);
pub const KILOGRAM: Mass = Quantity(1.0, PhantomData);
pub const KELVIN: Temperature = Quantity(1.0, PhantomData);
pub const MOL: Moles = Quantity(1.0, PhantomData);
pub const NEWTON: Force = Quantity(1.0, PhantomData);
pub const PASCAL: Pressure = Quantity(1.0, PhantomData);
pub const JOULE: Energy = Quantity(1.0, PhantomData);

/// 1 g = 1e-3 kg
pub const GRAM: Mass = Quantity(1e-3, PhantomData);
/// 1 l = 1e-3 m³
pub const LITER: Volume = Quantity(1e-3, PhantomData);
/// 1 bar = 1e5 Pa
pub const BAR: Pressure = Quantity(1e5, PhantomData);
/// Standard atmosphere, 101325 Pa
pub const ATMOSPHERE: Pressure = Quantity(101325.0, PhantomData);
/// 1 P = 0.1 Pa s
pub const POISE: Viscosity = Quantity(0.1, PhantomData);

/// Molar gas constant in J/mol/K.
pub const RGAS: MolarEntropy = Quantity(8.31446261815324, PhantomData);

pub const MILLI: f64 = 1e-3;
pub const CENTI: f64 = 1e-2;
pub const KILO: f64 = 1e3;
pub const MEGA: f64 = 1e6;

impl<T> Dimensionless<T> {
    /// The plain number behind a dimensionless quantity, e.g. a ratio of
    /// two temperatures.
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<U> Quantity<f64, U> {
    /// Value in SI base units.
    pub fn to_si(self) -> f64 {
        self.0
    }
}

impl<T> From<T> for Dimensionless<T> {
    fn from(value: T) -> Self {
        Quantity(value, PhantomData)
    }
}
