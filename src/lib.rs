pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::{camel::to_camel_case, convert, dot::to_dot_case, kebab::to_kebab_case, Case};
pub use config::Config;
pub use error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub case: Case,
    pub output: String,
}

impl Conversion {
    pub fn new(input: impl Into<String>, case: Case) -> Self {
        let input = input.into();
        let output = convert(&input, case);
        Self {
            input,
            case,
            output,
        }
    }
}
