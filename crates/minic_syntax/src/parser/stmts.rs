/// Statement parsing.
///
/// Blocks run their own catch-and-resynchronize loop, so one bad statement costs one diagnostic and the rest of
/// the block is still parsed.
impl<S: TokenSource> Parser<S> {
    /// `{ statement* }`.
    fn block(&mut self) -> Result<Block, CompileError> {
        self.expect_punct(PunctuationId::LBrace, "'{'")?;
        self.block_depth += 1;

        let mut block = Block::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() && !self.errors.is_exhausted() {
            let start = self.consumed;
            match self.statement() {
                Ok(stmt) => block.add_child(stmt),
                Err(e) => self.recover(e, start),
            }
        }

        self.block_depth -= 1;
        self.expect_punct(PunctuationId::RBrace, "'}' to close the block")?;
        Ok(block)
    }

    fn statement(&mut self) -> Result<StmtNode, CompileError> {
        self.nested(Self::statement_body)
    }

    fn statement_body(&mut self) -> Result<StmtNode, CompileError> {
        let pos = self.current_pos();

        if self.check_punct(PunctuationId::LBrace) {
            let block = self.block()?;
            return Ok(Node::new(Statement::Compound(block), pos));
        }
        if self.peek().kind.is_type_keyword() || self.check_qualifier() {
            return self.local_declaration();
        }
        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(Node::new(Statement::Expr(None), pos));
        }

        if let Some(id) = self.peek().keyword_id() {
            match id {
                KeywordId::If => return self.if_statement(),
                KeywordId::While => return self.while_statement(),
                KeywordId::Return => return self.return_statement(),
                KeywordId::Break => {
                    self.advance();
                    self.expect_punct(PunctuationId::Semicolon, "';' after 'break'")?;
                    return Ok(Node::new(Statement::Break, pos));
                }
                KeywordId::Continue => {
                    self.advance();
                    self.expect_punct(PunctuationId::Semicolon, "';' after 'continue'")?;
                    return Ok(Node::new(Statement::Continue, pos));
                }
                KeywordId::Else => return Err(errors::unexpected_token("'else' without a matching 'if'", pos)),
                _ if !keywords::is_supported(id) => {
                    let what = format!("'{}'", keywords::as_str(id));
                    return Err(errors::unsupported_construct(&what, pos));
                }
                _ => {}
            }
        }

        let expr = self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';' after expression")?;
        Ok(Node::new(Statement::Expr(Some(expr)), pos))
    }

    /// Block-scoped variable declaration. A `(` after the name means someone tried to nest a function.
    fn local_declaration(&mut self) -> Result<StmtNode, CompileError> {
        let qualifiers = self.qualifiers();
        let ty = self.type_specifier("type")?;
        let (name, pos) = self.declarator_name(ty)?;
        if self.check_punct(PunctuationId::LParen) {
            return Err(errors::nested_function(&name, pos));
        }
        let var = self.variable_rest(qualifiers, ty, name)?;
        Ok(Node::new(Statement::VarDecl(var), pos))
    }

    fn if_statement(&mut self) -> Result<StmtNode, CompileError> {
        let pos = self.advance().pos;
        let condition = self.condition("if")?;
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_keyword(KeywordId::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Node::new(
            Statement::If(IfStmt {
                condition,
                then_branch,
                else_branch,
            }),
            pos,
        ))
    }

    fn while_statement(&mut self) -> Result<StmtNode, CompileError> {
        let pos = self.advance().pos;
        let condition = self.condition("while")?;
        let body = Box::new(self.statement()?);
        Ok(Node::new(Statement::While(WhileStmt { condition, body }), pos))
    }

    /// `( expression )` after `if` / `while`.
    fn condition(&mut self, keyword: &str) -> Result<ExprNode, CompileError> {
        self.expect_punct(PunctuationId::LParen, &format!("'(' after '{keyword}'"))?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')' after condition")?;
        Ok(condition)
    }

    fn return_statement(&mut self) -> Result<StmtNode, CompileError> {
        let pos = self.advance().pos;
        let value = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_punct(PunctuationId::Semicolon, "';' after 'return'")?;
        Ok(Node::new(Statement::Return(value), pos))
    }
}
