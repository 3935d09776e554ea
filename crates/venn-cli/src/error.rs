//! Semantic error types for the terminal front end.
//!
//! Configuration problems are reported through [`CliError`]. I/O failures
//! travel as `eyre` reports, and evaluation failures stay [`EvalError`]
//! values inside the session until the caller decides how to present them.

use thiserror::Error;
use venn_expr::{EvalError, UniverseError};

/// Errors that can occur while configuring or running the front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configured universe or base sets are inconsistent.
    #[error("invalid universe: {0}")]
    Universe(#[from] UniverseError),

    /// A one-shot expression could not be evaluated.
    #[error("expression not evaluable: {0}")]
    Evaluation(#[from] EvalError),
}
