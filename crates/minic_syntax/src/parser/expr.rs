/// Operator tables for the left-associative binary levels, loosest first.
const LOGICAL_OR: &[(OperatorId, BinaryOp)] = &[(OperatorId::OrOr, BinaryOp::Or)];
const LOGICAL_AND: &[(OperatorId, BinaryOp)] = &[(OperatorId::AndAnd, BinaryOp::And)];
const EQUALITY: &[(OperatorId, BinaryOp)] = &[(OperatorId::EqEq, BinaryOp::Eq), (OperatorId::NotEq, BinaryOp::NotEq)];
const RELATIONAL: &[(OperatorId, BinaryOp)] = &[
    (OperatorId::Lt, BinaryOp::Lt),
    (OperatorId::Gt, BinaryOp::Gt),
    (OperatorId::LtEq, BinaryOp::LtEq),
    (OperatorId::GtEq, BinaryOp::GtEq),
];
const ADDITIVE: &[(OperatorId, BinaryOp)] = &[(OperatorId::Plus, BinaryOp::Add), (OperatorId::Minus, BinaryOp::Sub)];
const MULTIPLICATIVE: &[(OperatorId, BinaryOp)] = &[
    (OperatorId::Star, BinaryOp::Mul),
    (OperatorId::Slash, BinaryOp::Div),
    (OperatorId::Percent, BinaryOp::Mod),
];

type ExprResult = Result<ExprNode, CompileError>;

/// Expression parsing methods.
///
/// Every level is a left-associative loop except assignment and the conditional, which recurse on their right
/// operand. Nodes take the position of their first token.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Full expression, including the `,` sequencing operator.
    fn expression(&mut self) -> ExprResult {
        let mut left = self.assignment()?;
        while self.match_punct(PunctuationId::Comma) {
            let right = self.assignment()?;
            left = binary(left, BinaryOp::Comma, right);
        }
        Ok(left)
    }

    /// Any target is accepted here; the analyzer rejects targets that are not variables.
    fn assignment(&mut self) -> ExprResult {
        let target = self.ternary()?;
        if !self.match_op(OperatorId::Assign) {
            return Ok(target);
        }
        let value = self.assignment()?;
        let pos = target.pos;
        Ok(Node::new(
            Expr::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            pos,
        ))
    }

    fn ternary(&mut self) -> ExprResult {
        self.nested(Self::conditional)
    }

    /// `cond ? expression : ternary`.
    fn conditional(&mut self) -> ExprResult {
        let condition = self.logical_or()?;
        if !self.match_op(OperatorId::Question) {
            return Ok(condition);
        }
        let then_expr = self.expression()?;
        self.expect_op(OperatorId::Colon, "':' in conditional expression")?;
        let else_expr = self.ternary()?;

        let pos = condition.pos;
        Ok(Node::new(
            Expr::Ternary {
                condition: Box::new(condition),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
            },
            pos,
        ))
    }

    fn logical_or(&mut self) -> ExprResult {
        self.binary_level(LOGICAL_OR, Self::logical_and)
    }

    fn logical_and(&mut self) -> ExprResult {
        self.binary_level(LOGICAL_AND, Self::equality)
    }

    fn equality(&mut self) -> ExprResult {
        self.binary_level(EQUALITY, Self::relational)
    }

    fn relational(&mut self) -> ExprResult {
        self.binary_level(RELATIONAL, Self::additive)
    }

    fn additive(&mut self) -> ExprResult {
        self.binary_level(ADDITIVE, Self::multiplicative)
    }

    fn multiplicative(&mut self) -> ExprResult {
        self.binary_level(MULTIPLICATIVE, Self::unary)
    }

    /// One left-associative precedence level: `next (op next)*`.
    fn binary_level(&mut self, ops: &[(OperatorId, BinaryOp)], next: fn(&mut Self) -> ExprResult) -> ExprResult {
        let mut left = next(self)?;
        while let Some(op) = self.match_binary(ops) {
            let right = next(self)?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn match_binary(&mut self, ops: &[(OperatorId, BinaryOp)]) -> Option<BinaryOp> {
        let id = self.peek().operator_id()?;
        let (_, op) = ops.iter().find(|(candidate, _)| *candidate == id)?;
        self.advance();
        Some(*op)
    }

    fn unary(&mut self) -> ExprResult {
        self.nested(Self::prefix)
    }

    fn prefix(&mut self) -> ExprResult {
        if let Some(op) = self.peek().operator_id().and_then(UnaryOp::from_operator) {
            let pos = self.advance().pos;
            let operand = self.unary()?;
            return Ok(Node::new(Expr::Unary(op, Box::new(operand)), pos));
        }
        self.postfix()
    }

    /// Calls, plus the postfix forms the grammar reserves but does not implement.
    fn postfix(&mut self) -> ExprResult {
        let mut expr = self.primary()?;
        loop {
            if self.check_punct(PunctuationId::LParen) {
                expr = self.finish_call(expr)?;
            } else if self.check_punct(PunctuationId::LBracket) {
                return Err(errors::unsupported_construct("array indexing", self.current_pos()));
            } else if self.check_punct(PunctuationId::Dot) || self.check_punct(PunctuationId::Arrow) {
                return Err(errors::unsupported_construct("member access", self.current_pos()));
            } else if self.check_op(OperatorId::PlusPlus) || self.check_op(OperatorId::MinusMinus) {
                return Err(errors::unsupported_construct("postfix increment/decrement", self.current_pos()));
            } else {
                break;
            }
        }

        if let Some(id) = self.peek().operator_id() {
            let info = operators::info_for(id);
            if info.support == Support::Reserved {
                let what = format!("operator '{}'", info.spelling);
                return Err(errors::unsupported_construct(&what, self.current_pos()));
            }
        }
        Ok(expr)
    }

    /// `callee ( args )`. A callee that is not a bare name is recorded as [`UNKNOWN_CALLEE`].
    fn finish_call(&mut self, callee: ExprNode) -> ExprResult {
        let pos = callee.pos;
        let name = match callee.node {
            Expr::Ident(name) => name,
            other => {
                tracing::debug!(callee = %other.kind(), "call target is not an identifier");
                UNKNOWN_CALLEE.to_string()
            }
        };

        self.advance(); // '('
        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.assignment()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "')' after arguments")?;

        Ok(Node::new(Expr::Call(CallExpr { name, args }), pos))
    }

    fn primary(&mut self) -> ExprResult {
        let pos = self.current_pos();
        let expr = match &self.peek().kind {
            TokenKind::Ident(name) => Expr::Ident(name.clone()),
            TokenKind::Int(text) => Expr::Literal(Literal::Int(text.clone())),
            TokenKind::Float(text) => Expr::Literal(Literal::Float(text.clone())),
            TokenKind::Str(text) => Expr::Literal(Literal::Str(text.clone())),
            TokenKind::Char(text) => Expr::Literal(Literal::Char(text.clone())),
            TokenKind::Keyword(KeywordId::True) => Expr::Literal(Literal::Int("true".to_string())),
            TokenKind::Keyword(KeywordId::False) => Expr::Literal(Literal::Int("false".to_string())),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen, "')' after expression")?;
                return Ok(inner);
            }
            TokenKind::Error(message) => return Err(errors::lexical(message, pos)),
            found => return Err(errors::invalid_primary(&found.to_string(), pos)),
        };
        self.advance();
        Ok(Node::new(expr, pos))
    }
}

fn binary(left: ExprNode, op: BinaryOp, right: ExprNode) -> ExprNode {
    let pos = left.pos;
    Node::new(Expr::Binary(Box::new(left), op, Box::new(right)), pos)
}
