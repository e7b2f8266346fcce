use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown case: {0} (expected kebab, camel or dot)")]
    UnknownCase(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}
