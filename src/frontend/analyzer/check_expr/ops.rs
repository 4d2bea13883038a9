//! Check operators, assignment and the conditional expression.
//!
//! Result types:
//!
//! - comparisons and `&&`/`||` yield `int`
//! - arithmetic yields [`promote_arithmetic`](minic_core::lang::types::promote_arithmetic) of its operands
//! - `,` yields its right operand
//! - any `void` operand makes the whole expression `void`

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use crate::frontend::symbols::SymbolKind;
use minic_core::DataType;
use minic_core::lang::types;

use super::Analyzer;

impl Analyzer {
    pub(in crate::frontend::analyzer::check_expr) fn check_binary(
        &mut self,
        left: &mut ExprNode,
        op: BinaryOp,
        right: &mut ExprNode,
    ) -> DataType {
        let left_ty = self.check_expr(left);
        let right_ty = self.check_expr(right);

        if op == BinaryOp::Comma {
            return right_ty;
        }
        if left_ty == DataType::Void || right_ty == DataType::Void {
            return DataType::Void;
        }
        if op.is_comparison() || op.is_logical() {
            DataType::Int
        } else {
            types::promote_arithmetic(left_ty, right_ty)
        }
    }

    pub(in crate::frontend::analyzer::check_expr) fn check_unary(
        &mut self,
        op: UnaryOp,
        operand: &mut ExprNode,
    ) -> DataType {
        if matches!(op, UnaryOp::PreInc | UnaryOp::PreDec) {
            self.check_assign_target(operand);
        }
        let operand_ty = self.check_expr(operand);
        if operand_ty == DataType::Void {
            return DataType::Void;
        }
        match op {
            UnaryOp::Not => DataType::Int,
            UnaryOp::Plus | UnaryOp::Neg | UnaryOp::BitNot | UnaryOp::PreInc | UnaryOp::PreDec => operand_ty,
        }
    }

    /// `target = value` yields the target's type.
    pub(in crate::frontend::analyzer::check_expr) fn check_assign(
        &mut self,
        target: &mut ExprNode,
        value: &mut ExprNode,
    ) -> DataType {
        let target_ok = self.check_assign_target(target);
        let before = self.error_count();
        let target_ty = self.check_expr(target);
        let value_ty = self.check_expr(value);

        if target_ok && self.error_count() == before && !types::compatible(target_ty, value_ty) {
            self.report(errors::type_mismatch(target_ty, value_ty, value.pos));
        }
        if let Expr::Ident(name) = &target.node {
            if let Some(symbol) = self.symbols.lookup_mut(name) {
                if let SymbolKind::Variable(info) = &mut symbol.kind {
                    info.is_initialized = true;
                }
            }
        }
        target_ty
    }

    /// The target of `=`, `++` or `--` must name a non-const variable or parameter.
    ///
    /// Undeclared names are left for [`check_expr`](Analyzer::check_expr) to report. Returns `false` when an error
    /// was recorded here.
    fn check_assign_target(&mut self, target: &ExprNode) -> bool {
        let Expr::Ident(name) = &target.node else {
            self.report(errors::invalid_assignment_target(target.pos));
            return false;
        };
        let Some(symbol) = self.symbols.resolve(name) else {
            return true;
        };
        if symbol.is_const() {
            self.report(errors::assign_to_const(name, target.pos));
            false
        } else if symbol.is_function() {
            self.report(errors::invalid_assignment_target(target.pos));
            false
        } else {
            true
        }
    }

    /// `cond ? a : b`: equal branch types keep that type, mixed numeric branches promote like arithmetic.
    pub(in crate::frontend::analyzer::check_expr) fn check_ternary(
        &mut self,
        condition: &mut ExprNode,
        then_expr: &mut ExprNode,
        else_expr: &mut ExprNode,
    ) -> DataType {
        let before = self.error_count();
        let cond_ty = self.check_expr(condition);
        if cond_ty == DataType::Void && self.error_count() == before {
            self.report(errors::void_condition("?:", condition.pos));
        }

        let then_ty = self.check_expr(then_expr);
        let else_ty = self.check_expr(else_expr);
        if then_ty == DataType::Void || else_ty == DataType::Void {
            DataType::Void
        } else if then_ty == else_ty {
            then_ty
        } else {
            types::promote_arithmetic(then_ty, else_ty)
        }
    }
}
