use serde::{Deserialize, Serialize};
use std::fmt;

/// Field of an [Identifier] used to look up compounds in parameter files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierOption {
    Name,
    Cas,
    Smiles,
    Formula,
}

/// Names and keys of a compound. All fields are optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    /// Sum formula as given by the user; the formula derived from the groups
    /// is available through the composition of the estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Identifier {
    pub fn new(
        name: Option<&str>,
        cas: Option<&str>,
        smiles: Option<&str>,
        formula: Option<&str>,
    ) -> Self {
        Self {
            name: name.map(Into::into),
            cas: cas.map(Into::into),
            smiles: smiles.map(Into::into),
            formula: formula.map(Into::into),
        }
    }

    /// Identifier carrying only a name.
    pub fn from_name(name: &str) -> Self {
        Self::new(Some(name), None, None, None)
    }

    pub fn as_str(&self, option: IdentifierOption) -> Option<&str> {
        match option {
            IdentifierOption::Name => self.name.as_deref(),
            IdentifierOption::Cas => self.cas.as_deref(),
            IdentifierOption::Smiles => self.smiles.as_deref(),
            IdentifierOption::Formula => self.formula.as_deref(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("name", &self.name),
            ("cas", &self.cas),
            ("smiles", &self.smiles),
            ("formula", &self.formula),
        ];
        let ids: Vec<_> = fields
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
            .collect();
        write!(f, "Identifier({})", ids.join(", "))
    }
}
