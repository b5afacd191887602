//! Input validation errors

use thiserror::Error;

/// Why a row cannot be compared.
///
/// Never surfaced past the classifier: every variant resolves to the
/// missing-input verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Company cell is absent, empty, or has no tokens left after normalization
    #[error("company name is missing or empty")]
    MissingCompany,

    /// Domain/email cell is absent or empty
    #[error("domain or email is missing or empty")]
    MissingDomain,
}

/// Result type for input validation
pub type InputResult<T> = Result<T, InputError>;

/// A verdict score outside 0-100, rejected when deserializing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score {0} is outside the 0-100 range")]
pub struct ScoreOutOfRange(pub u8);
