//! Pull-based token sources for the parser.
//!
//! The parser only ever asks for "the next token". [`Lexer`] answers that by scanning on demand; [`TokenStream`]
//! answers it from an already-tokenized slice (useful for `--tokens` dumps and for tests that hand-build tokens).

use super::{Lexer, Token};
use crate::ast::Position;

/// Anything that can hand out tokens one at a time.
///
/// Implementations must return `Eof` once exhausted, and keep returning it.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// Cursor over a token slice. Synthesizes `Eof` when the slice runs out, even if the slice has no `Eof` of its own.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }
}

impl TokenSource for TokenStream<'_> {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                token.clone()
            }
            None => {
                let pos = self.tokens.last().map(|t| t.pos).unwrap_or_default();
                Token::eof(pos)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{TokenKind, lex};

    #[test]
    fn test_stream_matches_lexer() {
        let source = "int main() { return 0; }";
        let tokens = lex(source);
        let mut stream = TokenStream::new(&tokens);
        let mut lexer = Lexer::new(source);
        for _ in 0..tokens.len() + 2 {
            assert_eq!(stream.next_token(), TokenSource::next_token(&mut lexer));
        }
    }

    #[test]
    fn test_stream_synthesizes_eof() {
        let tokens = vec![Token::new(TokenKind::Ident("x".to_string()), Position::new(3, 7))];
        let mut stream = TokenStream::new(&tokens);
        assert!(matches!(stream.next_token().kind, TokenKind::Ident(_)));
        let eof = stream.next_token();
        assert!(eof.kind.is_eof());
        assert_eq!(eof.pos, Position::new(3, 7));
        assert!(stream.next_token().kind.is_eof());
    }
}
