#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single token from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }

    /// Check if this token opens a list
    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::LeftParen
    }

    /// Check if this token closes a list
    pub fn is_close(&self) -> bool {
        self.kind == TokenKind::RightParen
    }
}

/// Token kinds produced by the scanner
///
/// Atoms are not classified here; the reader decides whether an atom is
/// an integer, a float or a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Maximal run of non-whitespace, non-paren characters
    Atom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_predicates() {
        let open = Token::new(TokenKind::LeftParen, "(".to_string(), 1, 1);
        let close = Token::new(TokenKind::RightParen, ")".to_string(), 1, 2);
        let atom = Token::new(TokenKind::Atom, "x".to_string(), 1, 3);

        assert!(open.is_open() && !open.is_close());
        assert!(close.is_close() && !close.is_open());
        assert!(!atom.is_open() && !atom.is_close());
    }
}
