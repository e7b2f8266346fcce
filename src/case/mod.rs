pub mod camel;
pub mod dot;
pub mod kebab;
pub mod steps;

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Naming convention a string can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Kebab,
    Camel,
    Dot,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Kebab, Case::Camel, Case::Dot];

    pub fn apply(self, input: &str) -> String {
        match self {
            Case::Kebab => kebab::to_kebab_case(input),
            Case::Camel => camel::to_camel_case(input),
            Case::Dot => dot::to_dot_case(input),
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" | "kebabcase" => Ok(Case::Kebab),
            "camel" | "camelcase" | "camel-case" => Ok(Case::Camel),
            "dot" | "dot.case" | "dotcase" | "dot-case" => Ok(Case::Dot),
            _ => Err(Error::UnknownCase(s.to_string())),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Kebab => write!(f, "kebab"),
            Case::Camel => write!(f, "camel"),
            Case::Dot => write!(f, "dot"),
        }
    }
}

/// Convert `input` to the given case.
pub fn convert(input: &str, case: Case) -> String {
    let output = case.apply(input);
    trace!(%case, input, output = output.as_str(), "converted");
    output
}
