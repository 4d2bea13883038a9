//! Check expressions and infer their types.
//!
//! This module owns the expression-checking entrypoint (`check_expr`) and delegates operators and calls to themed
//! submodules. Checking is error-accumulating: an expression that cannot be typed yields `void`, and every node
//! visited gets its inferred type written to [`Node::ty`].
//!
//! ## See also
//! - [`super::Analyzer`]: the analyzer entrypoint.

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use minic_core::DataType;

use super::Analyzer;

mod calls;
mod ops;

impl Analyzer {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Infer the type of `expr`, record it on the node and return it.
    pub(crate) fn check_expr(&mut self, expr: &mut ExprNode) -> DataType {
        let pos = expr.pos;
        let ty = match &mut expr.node {
            Expr::Ident(name) => self.check_ident(name, pos),
            Expr::Literal(lit) => literal_type(lit),
            Expr::Binary(left, op, right) => self.check_binary(left, *op, right),
            Expr::Unary(op, operand) => self.check_unary(*op, operand),
            Expr::Assign { target, value } => self.check_assign(target, value),
            Expr::Ternary {
                condition,
                then_expr,
                else_expr,
            } => self.check_ternary(condition, then_expr, else_expr),
            Expr::Call(call) => self.check_call(call, pos),
        };
        expr.ty = Some(ty);
        ty
    }

    fn check_ident(&mut self, name: &str, pos: Position) -> DataType {
        match self.symbols.resolve(name) {
            Some(symbol) => symbol.ty,
            None => {
                self.report(errors::undeclared_identifier(name, pos));
                DataType::Void
            }
        }
    }
}

/// Number literals are `float` when their text has a decimal point. String literals are typed `char`.
fn literal_type(lit: &Literal) -> DataType {
    match lit {
        Literal::Int(text) if text.contains('.') => DataType::Float,
        Literal::Int(_) => DataType::Int,
        Literal::Float(_) => DataType::Float,
        Literal::Char(_) | Literal::Str(_) => DataType::Char,
    }
}
