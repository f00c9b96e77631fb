use super::*;
use ndarray::{Array, Dimension};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use typenum::{Integer, N1, N2, N3, P1, P2, P3, Z0};

const UNIT_SYMBOLS: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];

impl<
        Inner: fmt::Debug,
        T: Integer,
        L: Integer,
        M: Integer,
        I: Integer,
        THETA: Integer,
        N: Integer,
        J: Integer,
    > fmt::Debug for Quantity<Inner, SIUnit<T, L, M, I, THETA, N, J>>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)?;
        let unit = [T::I8, L::I8, M::I8, I::I8, THETA::I8, N::I8, J::I8]
            .iter()
            .zip(UNIT_SYMBOLS.iter())
            .filter_map(|(&u, &s)| match u {
                0 => None,
                1 => Some(s.to_owned()),
                _ => Some(format!("{s}^{u}")),
            })
            .collect::<Vec<String>>()
            .join(" ");

        write!(f, " {}", unit)
    }
}

macro_rules! impl_fmt {
    ($t:ident, $l:ident, $m:ident, $theta:ident, $n:ident, $unit:expr, $symbol:expr, $max_prefix:expr) => {
        impl<D: Dimension> fmt::Display
            for Quantity<Array<f64, D>, SIUnit<$t, $l, $m, Z0, $theta, $n, Z0>>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                (self / $unit).into_value().fmt(f)?;
                write!(f, " {}", $symbol)
            }
        }

        impl fmt::Display for Quantity<f64, SIUnit<$t, $l, $m, Z0, $theta, $n, Z0>> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (value, prefix) = with_prefix((*self / $unit).into_value(), $max_prefix);
                if !((1e-2..1e4).contains(&value.abs()) || value == 0.0) {
                    write!(f, "{:e} {}{}", value, prefix, $symbol)
                } else {
                    value.fmt(f)?;
                    write!(f, " {}{}", prefix, $symbol)
                }
            }
        }
    };
}

const M2: Area = Quantity(1.0, PhantomData);
const M3: Volume = Quantity(1.0, PhantomData);
const JMK: MolarEntropy = Quantity(1.0, PhantomData);
const JKGK: SpecificEntropy = Quantity(1.0, PhantomData);
const PAS: Viscosity = Quantity(1.0, PhantomData);
const GIGA: f64 = 1e9;

impl_fmt!(P1, Z0, Z0, Z0, Z0, SECOND, "s", Some(KILO));
impl_fmt!(Z0, P1, Z0, Z0, Z0, METER, "m", Some(MEGA));
impl_fmt!(Z0, Z0, P1, Z0, Z0, GRAM, "g", Some(MEGA));
impl_fmt!(Z0, Z0, Z0, Z0, P1, MOL, "mol", Some(MEGA));
impl_fmt!(Z0, Z0, Z0, P1, Z0, KELVIN, "K", None);
impl_fmt!(N2, P1, P1, Z0, Z0, NEWTON, "N", Some(GIGA));
impl_fmt!(N2, N1, P1, Z0, Z0, PASCAL, "Pa", Some(GIGA));
impl_fmt!(N2, P2, P1, Z0, Z0, JOULE, "J", Some(GIGA));
impl_fmt!(Z0, P2, Z0, Z0, Z0, M2, "m²", None);
impl_fmt!(Z0, P3, Z0, Z0, Z0, M3, "m³", None);
impl_fmt!(Z0, P3, Z0, Z0, N1, M3 / MOL, "m³/mol", None);
impl_fmt!(Z0, P3, N1, Z0, Z0, M3 / KILOGRAM, "m³/kg", None);
impl_fmt!(Z0, N3, P1, Z0, Z0, KILOGRAM / M3, "kg/m³", None);
impl_fmt!(Z0, Z0, P1, Z0, N1, GRAM / MOL, "g/mol", None);
impl_fmt!(N2, P2, P1, Z0, N1, JOULE / MOL, "J/mol", Some(GIGA));
impl_fmt!(N2, P2, P1, N1, Z0, JOULE / KELVIN, "J/K", Some(GIGA));
impl_fmt!(N2, P2, P1, N1, N1, JMK, "J/mol/K", Some(GIGA));
impl_fmt!(N2, P2, Z0, Z0, Z0, JOULE / KILOGRAM, "J/kg", Some(GIGA));
impl_fmt!(N2, P2, Z0, N1, Z0, JKGK, "J/kg/K", Some(GIGA));
impl_fmt!(N1, N1, P1, Z0, Z0, PAS, "Pa*s", Some(MEGA));

/// Scale `value` by the largest engineering prefix not exceeding it, up to
/// `max_prefix`.
fn with_prefix(value: f64, max_prefix: Option<f64>) -> (f64, &'static str) {
    let Some(p) = max_prefix else {
        return (value, "");
    };
    let abs_value = value.abs();
    let e: i8 = if abs_value > 1e-12 && abs_value < p {
        (abs_value.log10().floor() as i8).div_euclid(3) * 3
    } else {
        0
    };
    match PREFIX_SYMBOLS.get(&e) {
        Some(symbol) => (value / 10.0f64.powi(e as i32), symbol),
        None => (value, ""),
    }
}

static PREFIX_SYMBOLS: Lazy<HashMap<i8, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, ""),
        (-12, "p"),
        (-9, "n"),
        (-6, "µ"),
        (-3, "m"),
        (3, "k"),
        (6, "M"),
    ])
});
