//! Declaration checking: functions, parameters and variables.

use crate::frontend::ast::*;
use crate::frontend::diagnostics::errors;
use crate::frontend::symbols::*;
use minic_core::DataType;
use minic_core::lang::types;

use super::Analyzer;

impl Analyzer {
    // ========================================================================
    // Declarations
    // ========================================================================

    pub(crate) fn check_declaration(&mut self, decl: &mut DeclNode) {
        let pos = decl.pos;
        match &mut decl.node {
            Declaration::Function(func) => {
                self.check_function(func, pos);
                decl.ty = Some(func.return_type);
            }
            Declaration::Variable(var) => {
                self.check_var_decl(var, pos);
                decl.ty = Some(var.ty);
            }
            Declaration::Directive(_) => {}
        }
    }

    /// Declare the function in the enclosing scope, then check its body in a fresh scope holding the parameters.
    ///
    /// The function is visible inside its own body, so direct recursion resolves.
    fn check_function(&mut self, func: &mut FunctionDecl, pos: Position) {
        let info = FunctionInfo {
            params: func.params.iter().map(|p| (p.name.clone(), p.ty)).collect(),
            is_builtin: false,
            is_variadic: false,
        };
        self.declare(Symbol::function(&func.name, func.return_type, info, pos));

        self.symbols.enter_scope(func.name.clone());
        let saved_return = self.current_return_type.replace(func.return_type);
        let saved_loops = std::mem::take(&mut self.loop_depth);

        for param in &func.params {
            if param.ty == DataType::Void {
                self.report(errors::void_variable(&param.name, param.pos));
            }
            self.declare(Symbol::parameter(&param.name, param.ty, param.pos));
        }
        self.check_block_statements(&mut func.body);

        self.loop_depth = saved_loops;
        self.current_return_type = saved_return;
        self.symbols.exit_scope();
    }

    /// Shared by global and local variable declarations.
    ///
    /// The initializer is checked before the name is declared, so `int x = x;` refers to an outer `x`.
    pub(crate) fn check_var_decl(&mut self, var: &mut VarDecl, pos: Position) {
        if var.ty == DataType::Void {
            self.report(errors::void_variable(&var.name, pos));
        }

        if let Some(init) = &mut var.init {
            let before = self.error_count();
            let init_ty = self.check_expr(init);
            let fresh_error = self.error_count() > before;
            if var.ty != DataType::Void && !fresh_error && !types::compatible(var.ty, init_ty) {
                self.report(errors::type_mismatch(var.ty, init_ty, init.pos));
            }
        }

        let info = VariableInfo {
            is_const: var.qualifiers.is_const,
            is_static: var.qualifiers.is_static,
            is_initialized: var.init.is_some(),
        };
        self.declare(Symbol::variable(&var.name, var.ty, info, pos));
    }

    /// Insert into the current scope, reporting a duplicate against the earlier declaration.
    fn declare(&mut self, symbol: Symbol) {
        let name = symbol.name.clone();
        let pos = symbol.pos;
        if !self.symbols.insert(symbol) {
            let previous = self.symbols.lookup_local(&name).map_or(pos, |s| s.pos);
            self.report(errors::duplicate_declaration(&name, previous, pos));
        }
    }
}
