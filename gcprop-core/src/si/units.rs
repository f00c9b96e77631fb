use super::*;
use crate::errors::{GcError, GcResult};
use typenum::{N1, N2, N3, P1, P2, P3, Z0};

/// A named unit: symbol, scale factor to SI and additive offset.
///
/// A value `x` given in the unit corresponds to `x * factor + offset` in SI.
pub type NamedUnit = (&'static str, f64, f64);

/// Quantities that can be constructed from and converted into units given
/// by name.
pub trait NamedUnits {
    /// Name of the quantity used in error messages.
    const QUANTITY: &'static str;

    /// All supported unit symbols with their conversion to SI.
    fn named_units() -> &'static [NamedUnit];

    fn lookup(unit: &str) -> GcResult<NamedUnit> {
        Self::named_units()
            .iter()
            .find(|(symbol, _, _)| *symbol == unit)
            .copied()
            .ok_or_else(|| GcError::UnknownUnit {
                unit: unit.to_owned(),
                quantity: Self::QUANTITY,
            })
    }
}

impl<U> Quantity<f64, U>
where
    Self: NamedUnits,
{
    /// Create a quantity from a value in the named unit.
    ///
    /// # Example
    /// ```
    /// # use gcprop_core::si::*;
    /// # use approx::assert_relative_eq;
    /// let p = Pressure::from_unit(1.0, "atm").unwrap();
    /// assert_relative_eq!(p, ATMOSPHERE);
    /// ```
    pub fn from_unit(value: f64, unit: &str) -> GcResult<Self> {
        let (_, factor, offset) = Self::lookup(unit)?;
        Ok(Quantity(value * factor + offset, PhantomData))
    }

    /// Return the value of the quantity in the named unit.
    pub fn to_unit(&self, unit: &str) -> GcResult<f64> {
        let (_, factor, offset) = Self::lookup(unit)?;
        Ok((self.0 - offset) / factor)
    }

    /// Symbols of all units the quantity can be expressed in.
    pub fn units() -> Vec<&'static str> {
        Self::named_units().iter().map(|(s, _, _)| *s).collect()
    }
}

// Implemented on explicit exponent lists `(T, L, M, THETA, N)`, one impl per
// distinct unit.
macro_rules! named_units {
    (
        ($t:ident, $l:ident, $m:ident, $theta:ident, $n:ident),
        $name:expr,
        [$(($symbol:expr, $factor:expr $(, $offset:expr)?)),+ $(,)?]
    ) => {
        impl NamedUnits for Quantity<f64, SIUnit<$t, $l, $m, Z0, $theta, $n, Z0>> {
            const QUANTITY: &'static str = $name;

            fn named_units() -> &'static [NamedUnit] {
                const UNITS: &[NamedUnit] = &[$(($symbol, $factor, 0.0 $(+ $offset)?)),+];
                UNITS
            }
        }
    };
}

const CM3: f64 = 1e-6;
const PSI: f64 = 6894.757293168361;
const MMHG: f64 = 133.322387415;
const RANKINE: f64 = 5.0 / 9.0;

named_units!((Z0, Z0, Z0, P1, Z0), "temperature", [
    ("K", 1.0),
    ("C", 1.0, 273.15),
    ("°C", 1.0, 273.15),
    ("F", RANKINE, 459.67 * RANKINE),
    ("°F", RANKINE, 459.67 * RANKINE),
    ("R", RANKINE),
]);

named_units!((N2, N1, P1, Z0, Z0), "pressure", [
    ("Pa", 1.0),
    ("kPa", 1e3),
    ("MPa", 1e6),
    ("bar", 1e5),
    ("mbar", 1e2),
    ("atm", 101325.0),
    ("psi", PSI),
    ("mmHg", MMHG),
    ("torr", 101325.0 / 760.0),
]);

named_units!((Z0, Z0, P1, Z0, N1), "molar weight", [
    ("kg/mol", 1.0),
    ("g/mol", 1e-3),
    ("lb/lbmol", 1e-3),
]);

named_units!((Z0, P3, Z0, Z0, N1), "molar volume", [
    ("m³/mol", 1.0),
    ("m3/mol", 1.0),
    ("cm³/mol", CM3),
    ("cm3/mol", CM3),
    ("l/mol", 1e-3),
]);

named_units!((Z0, P3, N1, Z0, Z0), "specific volume", [
    ("m³/kg", 1.0),
    ("m3/kg", 1.0),
    ("cm³/g", CM3 / 1e-3),
    ("cm3/g", CM3 / 1e-3),
    ("l/kg", 1e-3),
    ("ft³/lb", 0.3048 * 0.3048 * 0.3048 / 0.45359237),
]);

named_units!((Z0, N3, P1, Z0, Z0), "mass density", [
    ("kg/m³", 1.0),
    ("kg/m3", 1.0),
    ("g/cm³", 1e3),
    ("g/cm3", 1e3),
    ("lb/ft³", 0.45359237 / (0.3048 * 0.3048 * 0.3048)),
]);

named_units!((N2, P2, P1, Z0, N1), "molar energy", [
    ("J/mol", 1.0),
    ("kJ/mol", 1e3),
    ("cal/mol", 4.184),
    ("kcal/mol", 4184.0),
]);

named_units!((N2, P2, Z0, Z0, Z0), "specific energy", [
    ("J/kg", 1.0),
    ("kJ/kg", 1e3),
    ("J/g", 1e3),
    ("cal/g", 4184.0),
    ("BTU/lb", 1055.05585262 / 0.45359237),
]);

named_units!((N2, P2, P1, N1, N1), "molar heat capacity", [
    ("J/mol/K", 1.0),
    ("kJ/mol/K", 1e3),
    ("cal/mol/K", 4.184),
]);

named_units!((N2, P2, Z0, N1, Z0), "specific heat capacity", [
    ("J/kg/K", 1.0),
    ("kJ/kg/K", 1e3),
    ("J/g/K", 1e3),
    ("cal/g/K", 4184.0),
    ("BTU/lb/R", 1055.05585262 / 0.45359237 / RANKINE),
]);

named_units!((N1, N1, P1, Z0, Z0), "viscosity", [
    ("Pa*s", 1.0),
    ("mPa*s", 1e-3),
    ("P", 0.1),
    ("cP", 1e-3),
]);
