//! Error types.

use thiserror::Error;

/// An easing name that does not match any curve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown easing curve: {name:?}")]
pub struct ParseEasingError {
    name: String,
}

impl ParseEasingError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Errors from loading or saving easing configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnknownEasing(#[from] ParseEasingError),

    /// Malformed JSON, or a curve name serde could not resolve.
    #[error("invalid easing config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
