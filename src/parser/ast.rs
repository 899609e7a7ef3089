use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An identifier-like atom, compared by its text
///
/// Symbols are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from its name
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// The symbol's name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed S-expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    // Atoms
    /// 64-bit integer value
    Int(i64),
    /// 64-bit floating-point value
    Float(f64),
    /// Symbol (any atom that is not a number)
    Symbol(Symbol),

    // Composite
    /// Ordered list of values, one per matched `(`...`)` pair
    List(Vec<Value>),
}

impl Value {
    /// Shorthand for building a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// Get type name for error messages and debugging
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
        }
    }

    /// Check if value is an atom (anything but a list)
    pub fn is_atom(&self) -> bool {
        !matches!(self, Value::List(_))
    }

    /// Get value as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get value as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get value as symbol
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Get value as list elements
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// List nesting depth: 0 for atoms, 1 for `()` and flat lists
    pub fn depth(&self) -> usize {
        match self {
            Value::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Prints the value back as S-expression text
///
/// Floats always keep a fractional part or exponent (`3.0`, `1e300`) so the
/// output reads back as the same variant.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, val) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, ")")
            }
        }
    }
}
