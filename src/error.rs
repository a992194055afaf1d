use thiserror::Error;

/// Errors that can occur while parsing or quoting attribute paths.
///
/// These are the only failure modes of the library; every other input is
/// valid and produces a result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstallableError {
    /// A quoted segment was opened with `"` and never closed.
    /// Carries the original selector text so callers can report it verbatim.
    #[error("missing closing quote in attribute selector: {0}")]
    MissingClosingQuote(String),

    /// An attribute name contains a `"` and cannot be represented in the
    /// quoted uri fragment grammar.
    #[error("attribute name cannot be quoted for a flake uri fragment")]
    MalformedAttributeName,
}
