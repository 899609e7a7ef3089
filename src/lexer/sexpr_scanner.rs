use super::token::{Token, TokenKind};

/// Scanner for S-expression source text
///
/// Splits text into `(`, `)` and atom tokens. Every paren is its own token
/// even when glued to other characters, so `(+` scans as `(` followed by
/// `+`. Whitespace, including the ASCII information separators, only
/// separates tokens. There is no string, quote or comment syntax, so
/// scanning cannot fail.
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Column where the current token started
    start_column: usize,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    ///
    /// Empty or all-whitespace source yields an empty vector.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token();
        }

        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            c if Self::is_separator(c) => {}

            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),

            _ => self.scan_atom(),
        }
    }

    fn scan_atom(&mut self) {
        while !self.is_at_end() && !Self::is_delimiter(self.peek()) {
            self.advance();
        }

        self.add_token(TokenKind::Atom);
    }

    fn is_delimiter(c: char) -> bool {
        Self::is_separator(c) || c == '(' || c == ')'
    }

    /// Unicode whitespace plus the ASCII information separators `\x1c`-`\x1f`
    fn is_separator(c: char) -> bool {
        c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens
            .push(Token::new(kind, lexeme, self.line, self.start_column));
    }
}

/// Tokenizes `source` in one call
pub fn tokenize(source: &str) -> Vec<Token> {
    SExprScanner::new(source).scan_tokens()
}
