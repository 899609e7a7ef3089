//! Error types for the S-expression reader

use thiserror::Error;

/// Errors raised while reading an S-expression
///
/// Malformed numeric literals are never errors; they are read as symbols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Tokens ran out while a value was still expected
    ///
    /// **Triggered by:** empty input, or a list missing its closing paren
    /// **Example:** `(+ 1 2`
    #[error("Unexpected end of file")]
    UnexpectedEof,

    /// A close paren appeared where a new value was expected
    ///
    /// **Triggered by:** a `)` with no matching `(` at that nesting level
    /// **Example:** `)` or `(a))` read twice
    #[error("Unexpected `)` at line {line}, column {column}")]
    UnexpectedCloseParen {
        /// Line number of the stray paren (1-indexed)
        line: usize,
        /// Column number of the stray paren (1-indexed)
        column: usize,
    },
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, SyntaxError>;
