/// Declaration parsing: functions, variables and preprocessor directives.
///
/// A declaration is `qualifiers? type IDENT` followed by either `(` (function) or anything else (variable). The
/// single token after the identifier decides which.
impl<S: TokenSource> Parser<S> {
    fn declaration(&mut self) -> Result<DeclNode, CompileError> {
        if self.check_punct(PunctuationId::Hash) {
            return self.directive();
        }

        let qualifiers = self.qualifiers();
        let ty = self.type_specifier("declaration")?;
        let (name, pos) = self.declarator_name(ty)?;

        if self.check_punct(PunctuationId::LParen) {
            let func = self.function_rest(qualifiers, ty, name)?;
            Ok(Node::new(Declaration::Function(func), pos))
        } else {
            let var = self.variable_rest(qualifiers, ty, name)?;
            Ok(Node::new(Declaration::Variable(var), pos))
        }
    }

    /// Zero or more of `const` / `static`, in any order.
    fn qualifiers(&mut self) -> Qualifiers {
        let mut qualifiers = Qualifiers::default();
        loop {
            if self.match_keyword(KeywordId::Const) {
                qualifiers.is_const = true;
            } else if self.match_keyword(KeywordId::Static) {
                qualifiers.is_static = true;
            } else {
                return qualifiers;
            }
        }
    }

    /// Consume a type keyword. Reserved type-like keywords (`struct`, `extern`, ...) are reported as unsupported.
    fn type_specifier(&mut self, what: &str) -> Result<DataType, CompileError> {
        if let Some(ty) = self.peek().kind.data_type() {
            self.advance();
            return Ok(ty);
        }
        if let Some(id) = self.peek().keyword_id().filter(|id| !keywords::is_supported(*id)) {
            let what = format!("'{}'", keywords::as_str(id));
            return Err(errors::unsupported_construct(&what, self.current_pos()));
        }
        Err(self.error_here(what))
    }

    fn declarator_name(&mut self, ty: DataType) -> Result<(String, Position), CompileError> {
        if let TokenKind::Ident(_) = self.peek().kind {
            return self.expect_ident("identifier");
        }
        let token = self.peek();
        match &token.kind {
            TokenKind::Error(message) => Err(errors::lexical(message, token.pos)),
            found => Err(errors::missing_identifier_after_type(ty, &found.to_string(), token.pos)),
        }
    }

    fn function_rest(
        &mut self,
        qualifiers: Qualifiers,
        return_type: DataType,
        name: String,
    ) -> Result<FunctionDecl, CompileError> {
        self.expect_punct(PunctuationId::LParen, "'('")?;
        let params = self.parameters()?;
        self.expect_punct(PunctuationId::RParen, "')' after parameters")?;
        if !self.check_punct(PunctuationId::LBrace) {
            return Err(self.error_here("'{' to start the function body"));
        }
        let body = self.block()?;

        Ok(FunctionDecl {
            qualifiers,
            return_type,
            name,
            params,
            body,
        })
    }

    /// Parameter list contents: empty, `void`, or comma-separated `type IDENT` pairs.
    fn parameters(&mut self) -> Result<Vec<Param>, CompileError> {
        let mut params = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        loop {
            let ty = self.type_specifier("parameter type")?;
            if ty == DataType::Void && params.is_empty() && self.check_punct(PunctuationId::RParen) {
                break;
            }
            let (name, pos) = self.expect_ident("parameter name")?;
            params.push(Param { ty, name, pos });
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        Ok(params)
    }

    /// Optional `= initializer`, then the terminating `;`.
    fn variable_rest(&mut self, qualifiers: Qualifiers, ty: DataType, name: String) -> Result<VarDecl, CompileError> {
        let init = if self.match_op(OperatorId::Assign) {
            Some(self.assignment()?)
        } else {
            None
        };
        self.expect_punct(PunctuationId::Semicolon, "';' after variable declaration")?;

        Ok(VarDecl {
            qualifiers,
            ty,
            name,
            init,
        })
    }

    // ========================================================================
    // Preprocessor directives
    // ========================================================================

    fn directive(&mut self) -> Result<DeclNode, CompileError> {
        let pos = self.advance().pos; // '#'

        if self.match_keyword(KeywordId::Include) {
            let include = self.include_target()?;
            return Ok(Node::new(Declaration::Directive(include), pos));
        }

        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            _ => return Err(self.error_here("directive name after '#'")),
        };
        self.advance();

        // Tokens carry no line breaks, so the directive body runs until something that can start a declaration.
        while !self.is_at_end()
            && !self.peek().kind.is_type_keyword()
            && !self.check_qualifier()
            && !self.check_punct(PunctuationId::Hash)
        {
            self.advance();
        }
        tracing::debug!(directive = %name, "skipped unsupported directive");
        Ok(Node::new(Declaration::Directive(Directive::Unknown { name }), pos))
    }

    /// `"file"` or `<path/to/file.h>`; the angle form is glued back together from its tokens.
    fn include_target(&mut self) -> Result<Directive, CompileError> {
        if let TokenKind::Str(path) = &self.peek().kind {
            let path = path.clone();
            self.advance();
            return Ok(Directive::Include { path, system: false });
        }

        self.expect_op(OperatorId::Lt, "'<' or a quoted file name after #include")?;
        let mut path = String::new();
        loop {
            match &self.peek().kind {
                TokenKind::Ident(part) | TokenKind::Int(part) | TokenKind::Float(part) => path.push_str(part),
                TokenKind::Keyword(id) => path.push_str(keywords::as_str(*id)),
                TokenKind::Punctuation(PunctuationId::Dot) => path.push('.'),
                TokenKind::Operator(OperatorId::Slash) => path.push('/'),
                TokenKind::Operator(OperatorId::Minus) => path.push('-'),
                _ => break,
            }
            self.advance();
        }
        if path.is_empty() {
            return Err(self.error_here("file name in #include"));
        }
        self.expect_op(OperatorId::Gt, "'>' to close #include")?;

        Ok(Directive::Include { path, system: true })
    }
}
