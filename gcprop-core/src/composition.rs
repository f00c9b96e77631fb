//! Elemental composition of molecules and group fragments.
//!
//! Group records carry the formula of the fragment they describe (e.g.
//! `"CH3"` or `"COOH"`). Summing the compositions of all groups of a molecule
//! yields the total number of atoms, the number of heavy (non-hydrogen) atoms
//! and the molar weight, which are inputs of the correlations.
use crate::errors::{GcError, GcResult};
use crate::si::{MolarWeight, GRAM, MOL};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Standard atomic weights in g/mol.
const ATOMIC_WEIGHTS: &[(&str, f64)] = &[
    ("H", 1.008),
    ("B", 10.81),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("F", 18.998),
    ("Si", 28.085),
    ("P", 30.974),
    ("S", 32.065),
    ("Cl", 35.45),
    ("Se", 78.971),
    ("Br", 79.904),
    ("Sn", 118.71),
    ("I", 126.904),
];

fn atomic_weight(element: &str) -> Option<f64> {
    ATOMIC_WEIGHTS
        .iter()
        .find(|(symbol, _)| *symbol == element)
        .map(|&(_, m)| m)
}

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(|\)(\d*)|([A-Z][a-z]?)(\d*)").expect("formula token pattern is valid")
});

/// Number of atoms per element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composition(BTreeMap<String, usize>);

impl Composition {
    /// Parse a sum formula such as `"C6H4Cl2"` or `"CH3(CH2)2OH"`.
    ///
    /// Parentheses may be nested and carry an optional multiplier.
    pub fn from_formula(formula: &str) -> GcResult<Self> {
        let invalid = || GcError::InvalidFormula(formula.to_owned());
        let mut stack = vec![Self::default()];
        let mut position = 0;
        for token in TOKEN.captures_iter(formula) {
            let whole = token.get(0).ok_or_else(invalid)?;
            if whole.start() != position {
                return Err(invalid());
            }
            position = whole.end();

            if let Some(element) = token.get(2) {
                let element = element.as_str();
                if atomic_weight(element).is_none() {
                    return Err(GcError::UnknownElement(element.to_owned()));
                }
                let count = multiplier(token.get(3).map(|m| m.as_str()), formula)?;
                let top = stack.last_mut().ok_or_else(invalid)?;
                *top.0.entry(element.to_owned()).or_insert(0) += count;
            } else if whole.as_str() == "(" {
                stack.push(Self::default());
            } else {
                let inner = stack.pop().ok_or_else(invalid)?;
                let count = multiplier(token.get(1).map(|m| m.as_str()), formula)?;
                let top = stack.last_mut().ok_or_else(invalid)?;
                *top += &(&inner * count);
            }
        }
        if position != formula.len() || stack.len() != 1 {
            return Err(invalid());
        }
        let composition = stack.pop().ok_or_else(invalid)?;
        if composition.0.is_empty() {
            return Err(invalid());
        }
        Ok(composition)
    }

    /// Number of atoms of the given element.
    pub fn count(&self, element: &str) -> usize {
        self.0.get(element).copied().unwrap_or(0)
    }

    /// Total number of atoms, hydrogen included.
    pub fn total_atoms(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of atoms other than hydrogen.
    pub fn heavy_atoms(&self) -> usize {
        self.total_atoms() - self.count("H")
    }

    pub fn molar_weight(&self) -> MolarWeight {
        let m: f64 = self
            .0
            .iter()
            .filter_map(|(e, &n)| atomic_weight(e).map(|w| w * n as f64))
            .sum();
        m * GRAM / MOL
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum formula in Hill order: carbon, hydrogen, then alphabetical. Without
    /// carbon all elements are alphabetical.
    pub fn hill_formula(&self) -> String {
        let has_carbon = self.count("C") > 0;
        let mut elements: Vec<_> = self.0.iter().filter(|&(_, &n)| n > 0).collect();
        elements.sort_by_key(|(e, _)| match (has_carbon, e.as_str()) {
            (true, "C") => (0, String::new()),
            (true, "H") => (1, String::new()),
            _ => (2, (*e).clone()),
        });
        elements
            .into_iter()
            .map(|(e, &n)| if n == 1 { e.clone() } else { format!("{e}{n}") })
            .collect()
    }
}

fn multiplier(digits: Option<&str>, formula: &str) -> GcResult<usize> {
    match digits {
        None | Some("") => Ok(1),
        Some(d) => match d.parse() {
            Ok(0) | Err(_) => Err(GcError::InvalidFormula(formula.to_owned())),
            Ok(n) => Ok(n),
        },
    }
}

impl AddAssign<&Composition> for Composition {
    fn add_assign(&mut self, other: &Composition) {
        for (e, &n) in &other.0 {
            *self.0.entry(e.clone()).or_insert(0) += n;
        }
    }
}

impl Add for Composition {
    type Output = Composition;
    fn add(mut self, other: Composition) -> Composition {
        self += &other;
        self
    }
}

impl Mul<usize> for &Composition {
    type Output = Composition;
    fn mul(self, n: usize) -> Composition {
        Composition(self.0.iter().map(|(e, &c)| (e.clone(), c * n)).collect())
    }
}

impl std::iter::Sum for Composition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hill_formula())
    }
}
