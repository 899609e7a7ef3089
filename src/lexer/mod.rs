//! Lexical analysis for S-expressions
//!
//! Converts source text into a flat stream of paren and atom tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::{tokenize, SExprScanner};
pub use token::{Token, TokenKind};
