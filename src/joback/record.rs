use gcprop_core::parameter::{contribution_sum, FromGroups};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Joback group contributions.
///
/// Coefficients that are not available for a group are `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct JobackRecord {
    /// Critical temperature
    pub tc: Option<f64>,
    /// Critical pressure in bar
    pub pc: Option<f64>,
    /// Critical volume in cm³/mol
    pub vc: Option<f64>,
    /// Normal boiling point in K
    pub tb: Option<f64>,
    /// Melting point in K
    pub tf: Option<f64>,
    /// Enthalpy of formation (ideal gas, 298 K) in kJ/mol
    pub hf: Option<f64>,
    /// Gibbs energy of formation (ideal gas, 298 K) in kJ/mol
    pub gf: Option<f64>,
    /// Ideal gas heat capacity polynomial
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    /// Enthalpy of fusion in cal/mol
    pub hm: Option<f64>,
    /// Enthalpy of vaporization at Tb in cal/mol
    pub hv: Option<f64>,
    /// Liquid viscosity
    pub mua: Option<f64>,
    pub mub: Option<f64>,
}

impl JobackRecord {
    /// Build a record from a table row ordered as
    /// `[tc, pc, vc, tb, tf, hf, gf, a, b, c, d, hm, hv, mua, mub]`; NaN marks
    /// a missing coefficient.
    pub fn from_row(row: [f64; 15]) -> Self {
        let [tc, pc, vc, tb, tf, hf, gf, a, b, c, d, hm, hv, mua, mub] =
            row.map(|x| (!x.is_nan()).then_some(x));
        Self {
            tc,
            pc,
            vc,
            tb,
            tf,
            hf,
            gf,
            a,
            b,
            c,
            d,
            hm,
            hv,
            mua,
            mub,
        }
    }
}

impl FromGroups<f64> for JobackRecord {
    fn from_groups(groups: &[(&Self, f64)]) -> Self {
        Self {
            tc: contribution_sum(groups, |r| r.tc),
            pc: contribution_sum(groups, |r| r.pc),
            vc: contribution_sum(groups, |r| r.vc),
            tb: contribution_sum(groups, |r| r.tb),
            tf: contribution_sum(groups, |r| r.tf),
            hf: contribution_sum(groups, |r| r.hf),
            gf: contribution_sum(groups, |r| r.gf),
            a: contribution_sum(groups, |r| r.a),
            b: contribution_sum(groups, |r| r.b),
            c: contribution_sum(groups, |r| r.c),
            d: contribution_sum(groups, |r| r.d),
            hm: contribution_sum(groups, |r| r.hm),
            hv: contribution_sum(groups, |r| r.hv),
            mua: contribution_sum(groups, |r| r.mua),
            mub: contribution_sum(groups, |r| r.mub),
        }
    }
}

impl fmt::Display for JobackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("tc", self.tc),
            ("pc", self.pc),
            ("vc", self.vc),
            ("tb", self.tb),
            ("tf", self.tf),
            ("hf", self.hf),
            ("gf", self.gf),
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("d", self.d),
            ("hm", self.hm),
            ("hv", self.hv),
            ("mua", self.mua),
            ("mub", self.mub),
        ];
        let values: Vec<_> = fields
            .iter()
            .map(|(name, v)| match v {
                Some(v) => format!("{name}={v}"),
                None => format!("{name}=n.a."),
            })
            .collect();
        write!(f, "JobackRecord({})", values.join(", "))
    }
}
