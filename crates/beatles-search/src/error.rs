//! Error types for matching and output formatting.

use thiserror::Error;

/// Errors raised while resolving a match request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A mode string named a strategy that does not exist.
    #[error("mode is not supported: {0:?} (expected rank or fuzzy)")]
    UnknownStrategy(String),
}

/// Errors raised while compiling an output template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder {{{name}}} in template (valid: {valid})")]
    UnknownPlaceholder { name: String, valid: String },

    #[error("empty placeholder {{}} at offset {0}")]
    EmptyPlaceholder(usize),

    #[error("unclosed placeholder starting at offset {0}")]
    UnclosedPlaceholder(usize),

    #[error("single '}}' at offset {0} (use '}}}}' for a literal brace)")]
    UnmatchedBrace(usize),
}

/// Convenience alias for match results.
pub type MatchResult<T> = std::result::Result<T, MatchError>;
