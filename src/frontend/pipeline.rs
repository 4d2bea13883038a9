//! Front-end pipeline: parse, then analyze if the parse was clean.
//!
//! This is the one-call entrypoint the CLI and the integration tests use. The result always carries the (possibly
//! partial) tree and every diagnostic from whichever phases ran.

use crate::frontend::analyzer::{Analyzer, AnalyzerConfig};
use crate::frontend::ast::Program;
use crate::frontend::diagnostics::{CompileError, DEFAULT_MAX_ERRORS};
use crate::frontend::parser::{self, ParseConfig};
use crate::frontend::symbols::Symbol;

/// Settings shared by every front-end phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Per-phase error budget (0 = unlimited).
    pub max_errors: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::default().with_max_errors(self.max_errors)
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default().with_max_errors(self.max_errors)
    }
}

/// Everything the front end produced for one source text.
#[derive(Debug, Clone)]
pub struct FrontendOutput {
    /// Annotated if analysis ran, otherwise the bare (possibly partial) parse tree.
    pub program: Program,
    /// Global symbols after analysis; empty when parsing failed.
    pub symbols: Vec<Symbol>,
    /// Diagnostics in the order they were found: syntax first, then semantic.
    pub diagnostics: Vec<CompileError>,
    /// `true` if the semantic phase ran.
    pub analyzed: bool,
}

impl FrontendOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(CompileError::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Parse `source` and, when it has no syntax errors, run semantic analysis on the result.
#[tracing::instrument(skip_all, fields(source_len = source.len(), max_errors = config.max_errors))]
pub fn run(source: &str, config: &FrontendConfig) -> FrontendOutput {
    let parsed = parser::parse_source_with_config(source, config.parse_config());
    if !parsed.is_ok() {
        tracing::debug!(errors = parsed.errors.len(), "syntax errors found, skipping analysis");
        return FrontendOutput {
            program: parsed.program,
            symbols: Vec::new(),
            diagnostics: parsed.errors,
            analyzed: false,
        };
    }

    let mut program = parsed.program;
    let mut diagnostics = parsed.errors;
    let mut analyzer = Analyzer::new(config.analyzer_config());
    match analyzer.check_program(&mut program) {
        Ok(_) => {}
        Err(errors) => diagnostics.extend(errors),
    }

    FrontendOutput {
        program,
        symbols: analyzer.symbols().global_symbols().to_vec(),
        diagnostics,
        analyzed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::diagnostics::ErrorKind;

    #[test]
    fn test_clean_program_has_symbols() {
        let out = run("int x = 1; int main() { return x; }", &FrontendConfig::default());
        assert!(!out.has_errors());
        assert!(out.analyzed);
        let names: Vec<_> = out.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["x", "main"]);
    }

    #[test]
    fn test_syntax_errors_skip_analysis() {
        let out = run("int main() { return undeclared }", &FrontendConfig::default());
        assert!(!out.analyzed);
        assert!(out.symbols.is_empty());
        assert!(out.diagnostics.iter().all(|d| d.kind == ErrorKind::Syntax));
    }

    #[test]
    fn test_semantic_errors_counted() {
        let out = run("int main() { break; return y; }", &FrontendConfig::default());
        assert!(out.analyzed);
        assert_eq!(out.error_count(), 2);
        assert_eq!(out.warning_count(), 0);
    }

    #[test]
    fn test_budget_applies_per_phase() {
        let out = run("int main() { a; b; c; return 0; }", &FrontendConfig::new().with_max_errors(1));
        assert_eq!(out.error_count(), 1);
        assert_eq!(out.warning_count(), 1);
    }
}
