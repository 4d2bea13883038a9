//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers keep `matches!(...)` noise out of the parser and make the ID-based tokens easy to query.

use crate::lexer::{Token, TokenKind};
use minic_core::DataType;
use minic_core::lang::keywords::{self, KeywordId};
use minic_core::lang::operators::OperatorId;
use minic_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// `int`, `float`, `char` or `void`.
    pub fn is_type_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(k) if keywords::is_type_keyword(*k))
    }

    /// The data type named by a type keyword.
    pub fn data_type(&self) -> Option<DataType> {
        self.keyword_id().and_then(DataType::from_keyword)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}
