//! Scope table for minic.
//!
//! Scopes form a single live chain from the innermost block out to the global scope, stored as a stack. Entering a
//! function body or compound statement pushes a scope; leaving it pops the scope and drops every symbol declared
//! directly inside. Lookups walk the chain innermost-first, so inner declarations shadow outer ones.
//!
//! Built-in functions are not stored in any scope. A name that no scope knows falls back to
//! [`ScopeTable::builtin`], so a user declaration named `printf` is an ordinary global.

use std::collections::HashMap;
use std::fmt;

use crate::frontend::ast::Position;
use minic_core::DataType;
use minic_core::lang::builtins::{self, BUILTIN_RETURN_TYPE};

/// Name of the outermost scope.
pub const GLOBAL_SCOPE_NAME: &str = "global";

/// Stack of nested scopes; index 0 is the global scope and the last entry is the current scope.
#[derive(Debug)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl Default for ScopeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTable {
    /// Create a table holding only the empty global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(GLOBAL_SCOPE_NAME, 0)],
        }
    }

    /// Symbol for a built-in function, or `None` if `name` is not one.
    pub fn builtin(name: &str) -> Option<Symbol> {
        let id = builtins::from_str(name)?;
        Some(Symbol::function(
            builtins::as_str(id),
            BUILTIN_RETURN_TYPE,
            FunctionInfo {
                params: Vec::new(),
                is_builtin: true,
                is_variadic: true,
            },
            Position::default(),
        ))
    }

    /// Resolve `name` through the scope chain, then through the built-ins.
    pub fn resolve(&self, name: &str) -> Option<Symbol> {
        self.lookup(name).cloned().or_else(|| Self::builtin(name))
    }

    /// Push a new empty scope one level deeper and make it current.
    pub fn enter_scope(&mut self, name: impl Into<String>) {
        let level = self.current_level() + 1;
        self.scopes.push(Scope::new(name, level));
    }

    /// Pop the current scope, dropping its symbols. A no-op at the global scope.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        } else {
            tracing::debug!("exit_scope called at the global scope; ignored");
        }
    }

    /// Declare `symbol` in the current scope.
    ///
    /// Returns `false` and leaves the table untouched if the current scope already holds the name. Names from
    /// enclosing scopes do not count, so shadowing succeeds.
    pub fn insert(&mut self, mut symbol: Symbol) -> bool {
        let level = self.current_level();
        let scope = self.current_mut();
        if scope.index.contains_key(&symbol.name) {
            return false;
        }
        symbol.scope_level = level;
        scope.index.insert(symbol.name.clone(), scope.symbols.len());
        scope.symbols.push(symbol);
        true
    }

    /// Find `name`, searching from the current scope outwards.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.scopes.iter_mut().rev().find_map(|scope| scope.get_mut(name))
    }

    /// Find `name` in the current scope only.
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.current().get(name)
    }

    /// Nesting level of the current scope (0 = global).
    pub fn current_level(&self) -> usize {
        self.current().level
    }

    pub fn current_name(&self) -> &str {
        &self.current().name
    }

    pub fn current(&self) -> &Scope {
        // The global scope is never popped, so the stack is never empty.
        &self.scopes[self.scopes.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Symbols declared at the global scope, in declaration order.
    pub fn global_symbols(&self) -> &[Symbol] {
        &self.scopes[0].symbols
    }
}

/// One level of the scope chain.
#[derive(Debug)]
pub struct Scope {
    /// Debug name: `global`, the function name, or `block`.
    pub name: String,
    pub level: usize,
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl Scope {
    fn new(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
            symbols: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Symbols declared directly in this scope, in insertion order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        let i = *self.index.get(name)?;
        self.symbols.get_mut(i)
    }
}

/// A named, typed entity recorded in a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Variable/parameter type, or a function's return type.
    pub ty: DataType,
    pub pos: Position,
    /// Level of the scope the symbol was inserted into; set by [`ScopeTable::insert`].
    pub scope_level: usize,
}

impl Symbol {
    pub fn variable(name: impl Into<String>, ty: DataType, info: VariableInfo, pos: Position) -> Self {
        Self::new(name, SymbolKind::Variable(info), ty, pos)
    }

    pub fn parameter(name: impl Into<String>, ty: DataType, pos: Position) -> Self {
        Self::new(name, SymbolKind::Parameter, ty, pos)
    }

    pub fn function(name: impl Into<String>, return_type: DataType, info: FunctionInfo, pos: Position) -> Self {
        Self::new(name, SymbolKind::Function(info), return_type, pos)
    }

    fn new(name: impl Into<String>, kind: SymbolKind, ty: DataType, pos: Position) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            pos,
            scope_level: 0,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function(_))
    }

    pub fn is_const(&self) -> bool {
        matches!(&self.kind, SymbolKind::Variable(info) if info.is_const)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SymbolKind::Function(info) => {
                let params: Vec<String> = info.params.iter().map(|(name, ty)| format!("{ty} {name}")).collect();
                let variadic = if info.is_variadic { "..." } else { "" };
                write!(f, "function {} {}({}{variadic})", self.ty, self.name, params.join(", "))?;
                if info.is_builtin {
                    write!(f, " [builtin]")?;
                }
                Ok(())
            }
            SymbolKind::Variable(info) => {
                write!(f, "variable ")?;
                if info.is_static {
                    write!(f, "static ")?;
                }
                if info.is_const {
                    write!(f, "const ")?;
                }
                write!(f, "{} {}", self.ty, self.name)
            }
            SymbolKind::Parameter => write!(f, "parameter {} {}", self.ty, self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Variable(VariableInfo),
    Function(FunctionInfo),
    Parameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariableInfo {
    pub is_const: bool,
    pub is_static: bool,
    pub is_initialized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionInfo {
    /// Declared parameters as `(name, type)`; empty for built-ins.
    pub params: Vec<(String, DataType)>,
    pub is_builtin: bool,
    /// Accepts any number of arguments.
    pub is_variadic: bool,
}
