//! Semantic analyzer for minic.
//!
//! Walks a parsed [`Program`] once, in source order, maintaining a [`ScopeTable`] and recording the inferred type of
//! every expression on its node. Declarations become visible from the point they appear, so a function may call
//! itself and anything declared above it, but nothing declared below it.
//!
//! ## Notes
//!
//! - **Error accumulation**: Errors are collected (not fatal) so one run reports as many issues as possible. The
//!   error budget from [`AnalyzerConfig`] caps the count; once it is reached the walk stops early.
//! - **Void as poison**: an expression that failed to type (undeclared name, void call, ...) yields `void`. Parents of
//!   a void child are themselves void, and checks whose operand already produced an error stay silent, so one mistake
//!   is reported once.
//! - **Annotation**: the analyzer takes `&mut Program` and fills [`Node::ty`] on declarations, returns and every
//!   expression node, including those inside erroneous statements.
//!
//! ## What is validated
//!
//! - Identifiers and called functions are declared and visible
//! - No name is declared twice in the same scope
//! - Variables and parameters are not `void`
//! - Initializers, assignments and returns are type compatible
//! - `if`/`while` conditions produce a value
//! - `break`/`continue` only appear inside loops
//! - `const` variables are never assigned after their declaration
//!
//! ## Examples
//!
//! ```rust
//! use minic::frontend::{analyzer, parser};
//!
//! let mut program = parser::parse_source("int main() { float x = 1 + 2.5; return 0; }")
//!     .into_result()
//!     .expect("parse failed");
//! analyzer::analyze(&mut program).expect("analysis failed");
//! ```
//!
//! ## See also
//!
//! - [`symbols`](super::symbols) – scope table
//! - [`diagnostics`](super::diagnostics) – error catalog and rendering

mod check_decl;
mod check_expr;
mod check_stmt;

#[cfg(test)]
mod tests;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::{CompileError, DEFAULT_MAX_ERRORS, Diagnostics};
use crate::frontend::symbols::*;
use minic_core::DataType;

/// Knobs for a single analyzer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Stop after this many errors (0 = unlimited).
    pub max_errors: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// What a successful analysis leaves behind besides the annotated tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    /// Global-scope symbols in declaration order, built-ins first.
    pub globals: Vec<Symbol>,
}

/// Single-pass semantic checker.
pub struct Analyzer {
    pub(crate) symbols: ScopeTable,
    errors: Diagnostics,
    config: AnalyzerConfig,
    /// Number of enclosing `while` bodies.
    pub(crate) loop_depth: usize,
    /// Declared return type of the function being checked; `None` at the top level.
    pub(crate) current_return_type: Option<DataType>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            symbols: ScopeTable::new(),
            errors: Diagnostics::new(config.max_errors),
            config,
            loop_depth: 0,
            current_return_type: None,
        }
    }

    /// Check every top-level declaration, annotating the tree in place.
    ///
    /// Returns the global symbols on success, or every diagnostic collected (errors plus any budget warning) if at
    /// least one error was found.
    pub fn check_program(&mut self, program: &mut Program) -> Result<AnalysisOutput, Vec<CompileError>> {
        for decl in &mut program.declarations {
            if self.errors.is_exhausted() {
                break;
            }
            self.check_declaration(decl);
        }

        let diagnostics = std::mem::replace(&mut self.errors, Diagnostics::new(self.config.max_errors));
        tracing::debug!(errors = diagnostics.error_count(), "semantic analysis finished");
        if diagnostics.has_errors() {
            Err(diagnostics.into_vec())
        } else {
            Ok(AnalysisOutput {
                globals: self.symbols.global_symbols().to_vec(),
            })
        }
    }

    /// The scope table; after [`check_program`](Self::check_program) only the global scope is left.
    pub fn symbols(&self) -> &ScopeTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> ScopeTable {
        self.symbols
    }

    pub(crate) fn report(&mut self, error: CompileError) {
        tracing::trace!(%error, "semantic error");
        self.errors.push(error);
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.errors.is_exhausted()
    }

    /// Errors recorded so far; used to keep a failed operand from triggering a second report in its parent.
    pub(crate) fn error_count(&self) -> usize {
        self.errors.error_count()
    }
}

/// Analyze a program with the default configuration.
#[tracing::instrument(skip_all, fields(declarations = program.declarations.len()))]
pub fn analyze(program: &mut Program) -> Result<(), Vec<CompileError>> {
    Analyzer::default().check_program(program).map(|_| ())
}
