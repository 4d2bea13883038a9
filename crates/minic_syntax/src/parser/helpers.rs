/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Error construction that prefers the tokenizer's own message for error tokens
/// - Panic-mode recovery (`recover`, `synchronize`)
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.current.kind.is_eof()
    }

    /// Return the lookahead token without consuming it.
    fn peek(&self) -> &Token {
        &self.current
    }

    fn current_pos(&self) -> Position {
        self.current.pos
    }

    /// Pull the next token from the source and return the one that was current.
    fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        let previous = std::mem::replace(&mut self.current, next);
        self.previous_pos = previous.pos;
        if !previous.kind.is_eof() {
            self.consumed += 1;
        }
        previous
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    /// `const` or `static`.
    fn check_qualifier(&self) -> bool {
        self.peek().keyword_id().is_some_and(keywords::is_qualifier)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> Result<Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(what))
        }
    }

    fn expect_op(&mut self, id: OperatorId, what: &str) -> Result<Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(what))
        }
    }

    /// Consume an identifier and return its spelling and position.
    fn expect_ident(&mut self, what: &str) -> Result<(String, Position), CompileError> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            let pos = self.advance().pos;
            Ok((name, pos))
        } else {
            Err(self.error_here(what))
        }
    }

    /// Build an "expected X, found Y" error at the lookahead.
    ///
    /// An error token from the tokenizer is reported with its own message instead, as a lexical error.
    fn error_here(&self, what: &str) -> CompileError {
        let token = self.peek();
        match &token.kind {
            TokenKind::Error(message) => errors::lexical(message, token.pos),
            found => errors::expected_token(what, &found.to_string(), token.pos),
        }
    }

    /// Run a recursive rule one nesting level deeper.
    ///
    /// Past [`MAX_NESTING_DEPTH`] the rule is not entered and a syntax error is returned instead; a `{` at that
    /// point is skipped as a whole group so its closing brace does not unbalance the enclosing blocks.
    fn nested<T>(&mut self, rule: fn(&mut Self) -> Result<T, CompileError>) -> Result<T, CompileError> {
        if self.nesting >= MAX_NESTING_DEPTH {
            let error = errors::nesting_too_deep(MAX_NESTING_DEPTH, self.current_pos());
            if self.check_punct(PunctuationId::LBrace) {
                self.skip_brace_group();
            }
            return Err(error);
        }
        self.nesting += 1;
        let result = rule(self);
        self.nesting -= 1;
        result
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    /// Record `error`, then skip ahead to a safe resumption point.
    ///
    /// `start` is the consumed-token count when the failing rule began; if recovery would leave the parser exactly
    /// where it started, one token is dropped so the caller's loop always makes progress.
    fn recover(&mut self, error: CompileError, start: usize) {
        tracing::debug!(pos = %error.pos, message = %error.message, "recovering from syntax error");
        self.errors.push(error);
        self.synchronize();
        if self.consumed == start && !self.is_at_end() && !self.at_closing_brace_in_block() {
            self.advance();
        }
        tracing::trace!(last_skipped = %self.previous_pos, resume = %self.current_pos(), "resynchronized");
    }

    /// Skip tokens until the synchronization set: end of input, `;`, `}` or a type keyword.
    ///
    /// A `;` is consumed. A `}` is consumed only at the top level; inside a block it is left for the block loop,
    /// which needs it to close the block. Type keywords are left in place to start the next declaration.
    ///
    /// At the top level a `{` starts the body of a declaration whose header failed; the whole brace group is
    /// skipped so its statements are not mistaken for declarations.
    fn synchronize(&mut self) {
        loop {
            let kind = &self.peek().kind;
            if kind.is_eof() || kind.is_type_keyword() {
                return;
            }
            if self.block_depth == 0 && kind.is_punctuation(PunctuationId::LBrace) {
                self.skip_brace_group();
                self.match_punct(PunctuationId::Semicolon);
                return;
            }
            if kind.is_punctuation(PunctuationId::Semicolon) {
                self.advance();
                return;
            }
            if kind.is_punctuation(PunctuationId::RBrace) {
                if self.block_depth == 0 {
                    self.advance();
                }
                return;
            }
            self.advance();
        }
    }

    /// Consume a `{ ... }` group including nested groups. Stops at end of input if the braces never balance.
    fn skip_brace_group(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.advance();
                    return;
                }
            }
            self.advance();
        }
    }

    fn at_closing_brace_in_block(&self) -> bool {
        self.block_depth > 0 && self.check_punct(PunctuationId::RBrace)
    }
}
