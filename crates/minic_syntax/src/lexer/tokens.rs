//! Token types for the minic tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including reserved-but-unsupported ones such as `struct`)
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Numeric literals keep their source text; the analyzer decides their type.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Position;
use minic_core::lang::keywords::{self, KeywordId};
use minic_core::lang::operators::{self, OperatorId};
use minic_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and literals ==========
    Ident(String),
    Int(String),
    Float(String),
    /// Unescaped string contents.
    Str(String),
    /// Raw text between the quotes, escapes untouched.
    Char(String),

    // ========== Special ==========
    /// Lexical error; the payload is the message.
    Error(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Int(text) | TokenKind::Float(text) => write!(f, "number '{text}'"),
            TokenKind::Str(_) => write!(f, "string literal"),
            TokenKind::Char(text) => write!(f, "character '{text}'"),
            TokenKind::Error(_) => write!(f, "invalid token"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

/// A token with its kind and source position (of its first character).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position) -> Self {
        Self { kind, pos }
    }

    pub fn eof(pos: Position) -> Self {
        Self::new(TokenKind::Eof, pos)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
