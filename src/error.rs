//! Error types for `fairsub`.
//!
//! Only recoverable failures live here: configuration and I/O problems that
//! prevent a function from being initialized. Misuse of an initialized
//! function (unknown elements, queries before `init`) panics instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No built-in configuration or data file matches the experiment name.
    #[error("unknown experiment: {0:?}")]
    UnknownExperiment(String),

    /// The experiment resolved but describes an empty universe.
    #[error("experiment {0:?} has an empty universe")]
    EmptyExperiment(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file line could not be parsed. Lines are 1-indexed.
    #[error("{}:{}: {}", .path.display(), .line, .message)]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The guess ladder growth rate must be finite and not vanishingly small.
    #[error("epsilon must be finite and at least 1e-6, got {0}")]
    InvalidEpsilon(f64),

    #[error("duplicate element id {0} in universe")]
    DuplicateElement(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
