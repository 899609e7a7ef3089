//! S-expression reader
//!
//! Reads scanner tokens into [`Value`] trees by recursive descent.

mod ast;
mod atom;
mod sexpr_reader;

pub use ast::{Symbol, Value};
pub use atom::classify_atom;
pub use sexpr_reader::SExprReader;
