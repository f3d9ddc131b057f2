//! Error types for k2suffix.

use thiserror::Error;

/// Error type for k2suffix operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a syntactically valid hostname
    #[error("invalid domain: {0}")]
    DomainInvalid(String),

    /// The input is itself a public suffix with no registrable label
    #[error("domain not allowed (public suffix): {0}")]
    DomainNotAllowed(String),

    /// A rule could not be built
    #[error("invalid rule: {0}")]
    RuleFormat(#[from] RuleFormatError),

    /// A rule in a suffix list file could not be built
    #[error("invalid rule at line {line}: {source}")]
    ListFormat {
        line: usize,
        #[source]
        source: RuleFormatError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for errors caused by the queried name rather than by
    /// the rule data.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Error::DomainInvalid(_) | Error::DomainNotAllowed(_))
    }
}

/// Result type alias for k2suffix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for suffix rule construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleFormatError {
    /// Empty rule text
    #[error("empty rule")]
    EmptyRule,

    /// Rule contains an empty label (doubled, leading or trailing dot)
    #[error("empty label in rule: {0}")]
    EmptyLabel(String),

    /// Exception marker without any labels
    #[error("exception rule without labels: {0}")]
    EmptyException(String),

    /// Exception rule that would leave an empty suffix
    #[error("exception rule must have at least two labels: {0}")]
    ExceptionTooShort(String),

    /// Wildcard anywhere but the leftmost label, or combined with `!`
    #[error("wildcard must be the leftmost label: {0}")]
    MisplacedWildcard(String),

    /// Label with whitespace or other characters a rule can't contain
    #[error("invalid label in rule: {0}")]
    InvalidLabel(String),
}
