//! # sexpr-reader - Lisp S-expression reader
//!
//! Reads parenthesized prefix notation into a tree of typed values:
//! integers, floats, symbols and nested lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use sexpr_reader::{parse, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = parse("(+ 32 7)")?;
//!
//! assert_eq!(
//!     value,
//!     Value::List(vec![Value::symbol("+"), Value::Int(32), Value::Int(7)])
//! );
//! assert_eq!(value.to_string(), "(+ 32 7)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Only the first expression
//!
//! [`parse`] reads exactly one expression. Anything after it is tokenized
//! but never read, and no error is reported for it:
//!
//! ```rust
//! use sexpr_reader::parse;
//!
//! let value = parse("(+ 32 7)(+ 3 5)").unwrap();
//! assert_eq!(value.to_string(), "(+ 32 7)");
//! ```
//!
//! Use [`parse_all`] to read every top-level expression instead.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Scanner → Tokens → Reader → Value
//! ```
//!
//! - [`Scanner`] - Splits text into `(`, `)` and atom tokens
//! - [`Reader`] - Reads tokens into values, classifying atoms with [`classify_atom`]
//! - [`Value`] - Integers, floats, [`Symbol`]s and lists
//!
//! ## Error Handling
//!
//! ```rust
//! use sexpr_reader::{parse, SyntaxError};
//!
//! assert_eq!(parse("(+ 1 2"), Err(SyntaxError::UnexpectedEof));
//! assert!(matches!(parse(")"), Err(SyntaxError::UnexpectedCloseParen { .. })));
//! ```
//!
//! ## Features
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for tokens and values

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Result, SyntaxError};
pub use lexer::{tokenize, SExprScanner, Token, TokenKind};
pub use parser::{classify_atom, SExprReader, Symbol, Value};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the reader.
pub type Scanner = SExprScanner;

/// Type alias for the S-expression reader.
/// Converts tokens into a tree of values.
pub type Reader = SExprReader;

/// Reads the first expression in `source`
///
/// Any text after the first complete expression is ignored, even if it is
/// malformed.
pub fn parse(source: &str) -> Result<Value> {
    let mut reader = Reader::new(tokenize(source));
    let value = reader.read()?;

    if !reader.is_at_end() {
        tracing::debug!(
            unread = reader.remaining(),
            "ignoring tokens after first expression"
        );
    }

    Ok(value)
}

/// Reads every top-level expression in `source`, in order
///
/// Empty input yields an empty vector.
pub fn parse_all(source: &str) -> Result<Vec<Value>> {
    Reader::new(tokenize(source)).read_all()
}
