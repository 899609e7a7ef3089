use super::ast::Value;
use super::atom::classify_atom;
use crate::error::{Result, SyntaxError};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent reader turning tokens into [`Value`] trees
///
/// Each [`read`](Self::read) call consumes exactly one expression from the
/// front of the token stream and leaves the rest untouched for later calls.
///
/// Nested lists are read with native recursion, so stack usage grows with
/// paren nesting depth. Input nested deeply enough (tens of thousands of
/// levels on a default thread stack) will overflow the stack; callers
/// reading untrusted input should bound its size or read on a thread with
/// a larger stack.
pub struct SExprReader {
    tokens: Vec<Token>,
    current: usize,
}

impl SExprReader {
    /// Creates a new reader over the given tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        SExprReader { tokens, current: 0 }
    }

    /// Reads the next expression
    ///
    /// Fails with [`SyntaxError::UnexpectedEof`] when no tokens are left.
    pub fn read(&mut self) -> Result<Value> {
        let token = self.peek().ok_or(SyntaxError::UnexpectedEof)?;

        if token.is_open() {
            self.current += 1;
            return self.read_list_tail();
        }

        let result = match token.kind {
            TokenKind::RightParen => Err(SyntaxError::UnexpectedCloseParen {
                line: token.line,
                column: token.column,
            }),
            _ => Ok(classify_atom(&token.lexeme)),
        };

        self.current += 1;
        result
    }

    /// Reads expressions until the tokens run out
    pub fn read_all(&mut self) -> Result<Vec<Value>> {
        let mut values = Vec::new();

        while !self.is_at_end() {
            values.push(self.read()?);
        }

        Ok(values)
    }

    /// Check if every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Number of tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.current
    }

    /// Reads list elements after an opening `(` up to and including its `)`
    fn read_list_tail(&mut self) -> Result<Value> {
        tracing::trace!(position = self.current, "entering list");
        let mut items = Vec::new();

        loop {
            match self.peek() {
                None => return Err(SyntaxError::UnexpectedEof),
                Some(token) if token.is_close() => {
                    self.current += 1;
                    break;
                }
                Some(_) => items.push(self.read()?),
            }
        }

        tracing::trace!(len = items.len(), "leaving list");
        Ok(Value::List(items))
    }

    // Helper methods

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }
}
