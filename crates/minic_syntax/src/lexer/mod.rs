//! Tokenizer for minic source text.
//!
//! Handles:
//! - Keywords (registry-backed, reserved words included) and identifiers
//! - Integer/float literals, string literals with escapes, character literals
//! - Operators and punctuation with longest-match scanning
//! - `//` line comments and `/* */` block comments
//!
//! The tokenizer is pull-based: [`Lexer::next_token`] hands out one token per call and keeps returning `Eof` once
//! the input is exhausted. Problems never abort scanning; they surface as [`TokenKind::Error`] tokens for the
//! parser to report.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `stream` - The `TokenSource` seam and the slice-backed `TokenStream`

mod stream;
pub mod tokens;

pub use stream::{TokenSource, TokenStream};
pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Position;
use minic_core::lang::operators::OperatorId;
use minic_core::lang::punctuation::PunctuationId;

/// Tokenizer state over a borrowed source string.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset just past the last consumed character.
    current_pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Produce the next token. After end of input this returns `Eof` on every call.
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_trivia() {
            return error;
        }

        let pos = self.position();
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Token::eof(pos);
        };

        let kind = match c {
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),
            '[' => TokenKind::Punctuation(PunctuationId::LBracket),
            ']' => TokenKind::Punctuation(PunctuationId::RBracket),
            '#' => TokenKind::Punctuation(PunctuationId::Hash),
            '.' => {
                if self.peek() == Some('.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    TokenKind::Punctuation(PunctuationId::Ellipsis)
                } else {
                    TokenKind::Punctuation(PunctuationId::Dot)
                }
            }
            '-' => {
                if self.match_char('>') {
                    TokenKind::Punctuation(PunctuationId::Arrow)
                } else {
                    self.operator(OperatorId::Minus, &[('-', OperatorId::MinusMinus)])
                }
            }
            '+' => self.operator(OperatorId::Plus, &[('+', OperatorId::PlusPlus)]),
            '*' => TokenKind::Operator(OperatorId::Star),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '%' => TokenKind::Operator(OperatorId::Percent),
            '~' => TokenKind::Operator(OperatorId::Tilde),
            '^' => TokenKind::Operator(OperatorId::Caret),
            '?' => TokenKind::Operator(OperatorId::Question),
            ':' => TokenKind::Operator(OperatorId::Colon),
            '=' => self.operator(OperatorId::Assign, &[('=', OperatorId::EqEq)]),
            '!' => self.operator(OperatorId::Bang, &[('=', OperatorId::NotEq)]),
            '<' => self.operator(OperatorId::Lt, &[('=', OperatorId::LtEq), ('<', OperatorId::Shl)]),
            '>' => self.operator(OperatorId::Gt, &[('=', OperatorId::GtEq), ('>', OperatorId::Shr)]),
            '&' => self.operator(OperatorId::Amp, &[('&', OperatorId::AndAnd)]),
            '|' => self.operator(OperatorId::Pipe, &[('|', OperatorId::OrOr)]),

            '"' => self.scan_string(),
            '\'' => self.scan_char(start),

            '0'..='9' => self.scan_number(start),
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => TokenKind::Error(format!("unexpected character '{c}'")),
        };

        Token::new(kind, pos)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Try the two-character forms first, fall back to the single-character operator.
    fn operator(&mut self, simple: OperatorId, compounds: &[(char, OperatorId)]) -> TokenKind {
        for (c, id) in compounds {
            if self.match_char(*c) {
                return TokenKind::Operator(*id);
            }
        }
        TokenKind::Operator(simple)
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    /// Skip whitespace and comments. Returns an error token for an unterminated block comment.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek_next() == Some('*') => {
                    let pos = self.position();
                    self.advance();
                    self.advance();
                    let mut closed = false;
                    while let Some(c) = self.advance() {
                        if c == '*' && self.match_char('/') {
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Some(Token::new(
                            TokenKind::Error("unterminated block comment".to_string()),
                            pos,
                        ));
                    }
                }
                _ => return None,
            }
        }
    }

    // ========================================================================
    // Literals and identifiers
    // ========================================================================

    /// Digits with at most one `.`; a dot makes the literal a float.
    fn scan_number(&mut self, start: usize) -> TokenKind {
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = self.source[start..self.current_pos].to_string();
        if seen_dot { TokenKind::Float(text) } else { TokenKind::Int(text) }
    }

    fn scan_string(&mut self) -> TokenKind {
        let mut value = String::new();
        loop {
            match self.advance() {
                None | Some('\n') => return TokenKind::Error("unterminated string literal".to_string()),
                Some('"') => return TokenKind::Str(value),
                Some('\\') => match self.advance() {
                    None => return TokenKind::Error("unterminated string literal".to_string()),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(other) => value.push(other),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// Character literals keep their raw text so escapes survive to the output.
    fn scan_char(&mut self, start: usize) -> TokenKind {
        if self.match_char('\'') {
            return TokenKind::Error("empty character literal".to_string());
        }
        loop {
            match self.advance() {
                None | Some('\n') => return TokenKind::Error("unterminated character literal".to_string()),
                Some('\'') => {
                    let text = &self.source[start + 1..self.current_pos - 1];
                    return TokenKind::Char(text.to_string());
                }
                Some('\\') => {
                    if self.advance().is_none() {
                        return TokenKind::Error("unterminated character literal".to_string());
                    }
                }
                Some(_) => {}
            }
        }
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Reserved-word lookup happens on the borrowed spelling; only identifiers allocate.
        match keyword_id(spelling) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(spelling.to_string()),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a whole source string. The result always ends with exactly one `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
