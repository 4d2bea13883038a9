//! Check function calls.
//!
//! The callee must resolve to a function symbol. Built-ins are only consulted when no declaration matches. Arguments are always checked, so their
//! nodes get annotated and their errors reported, but they are not matched against the declared parameter list.

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use minic_core::DataType;

use super::Analyzer;

impl Analyzer {
    /// Yield the callee's return type, or `void` when the callee is unusable.
    pub(in crate::frontend::analyzer::check_expr) fn check_call(&mut self, call: &mut CallExpr, pos: Position) -> DataType {
        let callee = match self.symbols.resolve(&call.name) {
            None => {
                self.report(errors::undeclared_function(&call.name, pos));
                None
            }
            Some(symbol) if !symbol.is_function() => {
                self.report(errors::not_a_function(&call.name, pos));
                None
            }
            Some(symbol) => Some(symbol.ty),
        };

        for arg in &mut call.args {
            self.check_expr(arg);
        }
        callee.unwrap_or(DataType::Void)
    }
}
