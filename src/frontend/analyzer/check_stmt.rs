//! Statement checking: blocks, control flow, returns.

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use minic_core::DataType;
use minic_core::lang::types;

use super::Analyzer;

/// Debug name given to scopes opened by compound statements.
const BLOCK_SCOPE_NAME: &str = "block";

impl Analyzer {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Check each statement of a block in the current scope; the caller decides whether a new scope is needed.
    pub(crate) fn check_block_statements(&mut self, block: &mut Block) {
        for stmt in &mut block.statements {
            if self.is_exhausted() {
                break;
            }
            self.check_statement(stmt);
        }
    }

    pub(crate) fn check_statement(&mut self, stmt: &mut StmtNode) {
        let pos = stmt.pos;
        match &mut stmt.node {
            Statement::Compound(block) => {
                self.symbols.enter_scope(BLOCK_SCOPE_NAME);
                self.check_block_statements(block);
                self.symbols.exit_scope();
            }
            Statement::VarDecl(var) => {
                self.check_var_decl(var, pos);
                stmt.ty = Some(var.ty);
            }
            Statement::If(if_stmt) => {
                self.check_condition(&mut if_stmt.condition, "if");
                self.check_statement(&mut if_stmt.then_branch);
                if let Some(else_branch) = &mut if_stmt.else_branch {
                    self.check_statement(else_branch);
                }
            }
            Statement::While(while_stmt) => {
                self.check_condition(&mut while_stmt.condition, "while");
                self.loop_depth += 1;
                self.check_statement(&mut while_stmt.body);
                self.loop_depth -= 1;
            }
            Statement::Return(value) => {
                let ty = self.check_return(value.as_mut(), pos);
                stmt.ty = Some(ty);
            }
            Statement::Break => {
                if self.loop_depth == 0 {
                    self.report(errors::break_outside_loop(pos));
                }
            }
            Statement::Continue => {
                if self.loop_depth == 0 {
                    self.report(errors::continue_outside_loop(pos));
                }
            }
            Statement::Expr(Some(expr)) => {
                self.check_expr(expr);
            }
            Statement::Expr(None) => {}
        }
    }

    /// A condition must produce a value. Silent when the condition itself already failed.
    fn check_condition(&mut self, condition: &mut ExprNode, construct: &str) {
        let before = self.error_count();
        let ty = self.check_expr(condition);
        if ty == DataType::Void && self.error_count() == before {
            self.report(errors::void_condition(construct, condition.pos));
        }
    }

    /// Compare the returned value against the enclosing function's return type and yield the value's type.
    ///
    /// A bare `return;` has type `void`, which only a `void` function accepts. A `void` function accepts nothing
    /// else.
    fn check_return(&mut self, value: Option<&mut ExprNode>, pos: Position) -> DataType {
        let before = self.error_count();
        let (found, value_pos) = match value {
            Some(expr) => (self.check_expr(expr), expr.pos),
            None => (DataType::Void, pos),
        };

        let Some(expected) = self.current_return_type else {
            return found;
        };
        if self.error_count() > before {
            return found;
        }

        let accepted = if expected == DataType::Void {
            found == DataType::Void
        } else {
            types::compatible(expected, found)
        };
        if !accepted {
            self.report(errors::return_mismatch(expected, found, value_pos));
        }
        found
    }
}
