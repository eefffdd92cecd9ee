//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvdError {
    /// The input is not a well-formed, non-empty 2-D matrix.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-finite entries, or the decomposition did not converge.
    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("SVD not fitted. Call fit() first.")]
    NotFitted,

    /// Rejected target rank.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, SvdError>;
