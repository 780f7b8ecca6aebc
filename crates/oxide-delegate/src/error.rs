//! Error types for delegation declarations.

use thiserror::Error;

/// Errors raised while validating a delegation declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegateError {
    /// The declaration listed no attributes.
    #[error("must provide attributes to delegate")]
    NoAttributes,

    /// The declaration did not name a delegation target.
    #[error("must set `to` to delegate")]
    MissingTarget,

    /// Two mutually exclusive selector keys were both set.
    #[error("cannot set `{first}` and `{second}` at the same time")]
    ConflictingSelectors {
        /// The first offending key.
        first: &'static str,
        /// The second offending key.
        second: &'static str,
    },
}

/// Result type alias for delegation operations.
pub type Result<T> = std::result::Result<T, DelegateError>;
