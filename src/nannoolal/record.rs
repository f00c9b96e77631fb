use gcprop_core::parameter::{contribution_sum, FromGroups};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Nannoolal coefficients of one group or one group interaction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct NannoolalContribution {
    /// Normal boiling point
    #[serde(default)]
    pub tb: Option<f64>,
    /// Critical temperature
    #[serde(default)]
    pub tc: Option<f64>,
    /// Critical pressure
    #[serde(default)]
    pub pc: Option<f64>,
    /// Critical volume
    #[serde(default)]
    pub vc: Option<f64>,
    /// Vapor pressure slope
    #[serde(default)]
    pub pv: Option<f64>,
    /// Liquid viscosity slope
    #[serde(default)]
    pub bv: Option<f64>,
    /// Liquid viscosity reference temperature
    #[serde(default)]
    pub tv: Option<f64>,
}

impl NannoolalContribution {
    /// Contribution with every coefficient equal to zero.
    pub fn zero() -> Self {
        Self {
            tb: Some(0.0),
            tc: Some(0.0),
            pc: Some(0.0),
            vc: Some(0.0),
            pv: Some(0.0),
            bv: Some(0.0),
            tv: Some(0.0),
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(Option<f64>, Option<f64>) -> Option<f64>) -> Self {
        Self {
            tb: f(self.tb, other.tb),
            tc: f(self.tc, other.tc),
            pc: f(self.pc, other.pc),
            vc: f(self.vc, other.vc),
            pv: f(self.pv, other.pv),
            bv: f(self.bv, other.bv),
            tv: f(self.tv, other.tv),
        }
    }

    /// Add the coefficients present in `other`; missing ones count as zero.
    pub(crate) fn accumulate(self, other: &Self) -> Self {
        self.zip_with(*other, |a, b| match (a, b) {
            (Some(a), Some(b)) => Some(a + b),
            (a, None) => a,
            (None, b) => b,
        })
    }
}

/// Element-wise sum; a coefficient missing on either side stays missing.
impl Add for NannoolalContribution {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| Some(a? + b?))
    }
}

impl Mul<f64> for NannoolalContribution {
    type Output = Self;
    fn mul(self, factor: f64) -> Self {
        self.zip_with(self, |a, _| a.map(|a| a * factor))
    }
}

impl FromGroups<f64> for NannoolalContribution {
    fn from_groups(groups: &[(&Self, f64)]) -> Self {
        Self {
            tb: contribution_sum(groups, |r| r.tb),
            tc: contribution_sum(groups, |r| r.tc),
            pc: contribution_sum(groups, |r| r.pc),
            vc: contribution_sum(groups, |r| r.vc),
            pv: contribution_sum(groups, |r| r.pv),
            bv: contribution_sum(groups, |r| r.bv),
            tv: contribution_sum(groups, |r| r.tv),
        }
    }
}

impl fmt::Display for NannoolalContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("tb", self.tb),
            ("tc", self.tc),
            ("pc", self.pc),
            ("vc", self.vc),
            ("pv", self.pv),
            ("bv", self.bv),
            ("tv", self.tv),
        ];
        let values: Vec<_> = fields
            .iter()
            .filter_map(|(name, v)| v.map(|v| format!("{name}={v}")))
            .collect();
        write!(f, "({})", values.join(", "))
    }
}

/// Nannoolal group parameters.
///
/// Groups that take part in second-order interactions carry the letter of
/// their interaction class.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct NannoolalRecord {
    #[serde(flatten)]
    pub contribution: NannoolalContribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<char>,
}

impl fmt::Display for NannoolalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NannoolalRecord{}", self.contribution)?;
        if let Some(class) = self.interaction {
            write!(f, "[{class}]")?;
        }
        Ok(())
    }
}
