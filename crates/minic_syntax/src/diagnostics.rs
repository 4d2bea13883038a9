//! Diagnostics and error reporting for minic.
//!
//! Every phase records problems as [`CompileError`] values instead of unwinding, so a single run can report every
//! independent fault it finds. [`Diagnostics`] is the shared accumulator that enforces the error budget.
//!
//! Rendering comes in two flavors: [`format_error`] (plain ANSI, no dependencies on the terminal) and
//! [`to_report`], which builds a [`miette`] report with a labeled source snippet.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource};
use thiserror::Error;

use crate::ast::Position;

/// Default cap on recorded errors before a phase stops early.
pub const DEFAULT_MAX_ERRORS: usize = 50;

/// A compile-time diagnostic with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {pos}: {message}")]
pub struct CompileError {
    pub message: String,
    pub pos: Position,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, pos: Position) -> Self {
        Self {
            message: message.into(),
            pos,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>, pos: Position) -> Self {
        Self::new(ErrorKind::Lexical, message, pos)
    }

    pub fn syntax(message: impl Into<String>, pos: Position) -> Self {
        Self::new(ErrorKind::Syntax, message, pos)
    }

    pub fn semantic(message: impl Into<String>, pos: Position) -> Self {
        Self::new(ErrorKind::Semantic, message, pos)
    }

    pub fn warning(message: impl Into<String>, pos: Position) -> Self {
        Self::new(ErrorKind::Warning, message, pos)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Surfaced by the tokenizer as an error token.
    Lexical,
    Syntax,
    Semantic,
    Warning,
}

impl ErrorKind {
    pub const fn severity(self) -> Severity {
        match self {
            ErrorKind::Warning => Severity::Warning,
            ErrorKind::Lexical | ErrorKind::Syntax | ErrorKind::Semantic => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Semantic => write!(f, "semantic error"),
            ErrorKind::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================================
// Accumulator with error budget
// ============================================================================

/// Ordered diagnostic list with a cap on the number of errors.
///
/// Warnings never count towards the cap. When the cap is reached a single "too many errors" warning is appended
/// and [`is_exhausted`](Self::is_exhausted) turns true; callers stop processing at their next loop boundary.
/// A cap of `0` disables the budget.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    items: Vec<CompileError>,
    max_errors: usize,
    error_count: usize,
    exhausted: bool,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ERRORS)
    }
}

impl Diagnostics {
    pub fn new(max_errors: usize) -> Self {
        Self {
            items: Vec::new(),
            max_errors,
            error_count: 0,
            exhausted: false,
        }
    }

    /// Record a diagnostic. Returns `false` once the budget is spent (the diagnostic is dropped).
    pub fn push(&mut self, diagnostic: CompileError) -> bool {
        if self.exhausted {
            return false;
        }
        if !diagnostic.is_error() {
            self.items.push(diagnostic);
            return true;
        }

        let pos = diagnostic.pos;
        self.items.push(diagnostic);
        self.error_count += 1;
        if self.max_errors != 0 && self.error_count >= self.max_errors {
            tracing::warn!(max_errors = self.max_errors, "error budget exhausted, stopping early");
            self.items.push(errors::too_many_errors(self.max_errors, pos));
            self.exhausted = true;
        }
        true
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompileError> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<CompileError> {
        self.items
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Return the text of a 1-based line, without its terminator.
fn line_text(source: &str, line: usize) -> &str {
    source.lines().nth(line.saturating_sub(1)).unwrap_or("")
}

/// Convert a 1-based (line, column) position to a byte offset into `source`.
///
/// Columns count characters. Positions past the end clamp to the end of the line or source.
pub fn byte_offset(source: &str, pos: Position) -> usize {
    let mut line_start = 0;
    for _ in 1..pos.line {
        match source[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return source.len(),
        }
    }
    let line = &source[line_start..];
    let line_len = line.find('\n').unwrap_or(line.len());
    let in_line = line[..line_len]
        .char_indices()
        .nth(pos.column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line_len);
    line_start + in_line
}

/// Format a diagnostic with source context, using ANSI colors.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let red = "\x1b[31m";
    let cyan = "\x1b[36m";
    let yellow = "\x1b[33m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    let kind_color = match error.severity() {
        Severity::Error => red,
        Severity::Warning => yellow,
    };

    let line_num = error.pos.line;
    let col_num = error.pos.column.max(1);
    let text = line_text(source, line_num);
    let width = line_num.to_string().len();

    let mut out = String::new();
    out.push_str(&format!(
        "{bold}{kind_color}{kind}{reset}{bold}: {message}{reset}\n",
        kind = error.kind,
        message = error.message,
    ));
    out.push_str(&format!("  {cyan}-->{reset} {file_name}:{line_num}:{col_num}\n"));
    out.push_str(&format!("  {cyan}{:>width$} |{reset}\n", ""));
    out.push_str(&format!("  {cyan}{line_num:>width$} |{reset} {text}\n"));
    out.push_str(&format!(
        "  {cyan}{:>width$} |{reset} {}{kind_color}^{reset}\n",
        "",
        " ".repeat(col_num - 1),
    ));
    for note in &error.notes {
        out.push_str(&format!("  {cyan}= note:{reset} {note}\n"));
    }
    for hint in &error.hints {
        out.push_str(&format!("  {cyan}= hint:{reset} {hint}\n"));
    }
    out
}

/// Print a diagnostic with source context to stderr.
pub fn print_error(file_name: &str, source: &str, error: &CompileError) {
    eprintln!("{}", format_error(file_name, source, error));
}

/// A [`CompileError`] bound to its source text, renderable by `miette`.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
pub struct SourceReport {
    kind: ErrorKind,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label(collection)]
    labels: Vec<LabeledSpan>,
    #[help]
    help: Option<String>,
}

/// Build a `miette` report for a diagnostic.
pub fn to_report(file_name: &str, source: &str, error: &CompileError) -> miette::Report {
    let offset = byte_offset(source, error.pos);
    let len = usize::from(offset < source.len());
    let label = error.notes.first().cloned().unwrap_or_else(|| "here".to_string());
    let help = if error.hints.is_empty() {
        None
    } else {
        Some(error.hints.join("\n"))
    };
    miette::Report::new(SourceReport {
        kind: error.kind,
        message: error.message.clone(),
        source_code: NamedSource::new(file_name, source.to_string()),
        labels: vec![LabeledSpan::new(Some(label), offset, len)],
        help,
    })
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for every diagnostic the front end emits.
pub mod errors {
    use super::*;
    use minic_core::DataType;

    // --- syntax --------------------------------------------------------------

    pub fn expected_token(expected: &str, found: &str, pos: Position) -> CompileError {
        CompileError::syntax(format!("expected {expected}, found {found}"), pos)
    }

    pub fn unexpected_token(found: &str, pos: Position) -> CompileError {
        CompileError::syntax(format!("unexpected {found}"), pos)
    }

    pub fn invalid_primary(found: &str, pos: Position) -> CompileError {
        CompileError::syntax(format!("expected expression, found {found}"), pos)
    }

    pub fn missing_identifier_after_type(ty: DataType, found: &str, pos: Position) -> CompileError {
        CompileError::syntax(format!("expected identifier after type '{ty}', found {found}"), pos)
    }

    pub fn unsupported_construct(what: &str, pos: Position) -> CompileError {
        CompileError::syntax(format!("{what} is not supported"), pos)
            .with_note("minic accepts int/float/char/void declarations, if/else, while, return, break and continue")
    }

    pub fn nesting_too_deep(limit: usize, pos: Position) -> CompileError {
        CompileError::syntax(format!("expression or statement nested too deeply (limit {limit})"), pos)
    }

    pub fn nested_function(name: &str, pos: Position) -> CompileError {
        CompileError::syntax(format!("function '{name}' cannot be defined inside another function"), pos)
            .with_hint("move the definition to the top level")
    }

    pub fn lexical(message: &str, pos: Position) -> CompileError {
        CompileError::lexical(message.to_string(), pos)
    }

    // --- semantic ------------------------------------------------------------

    pub fn undeclared_identifier(name: &str, pos: Position) -> CompileError {
        CompileError::semantic(format!("undeclared identifier '{name}'"), pos)
            .with_hint("declare it before use")
    }

    pub fn undeclared_function(name: &str, pos: Position) -> CompileError {
        CompileError::semantic(format!("call to undeclared function '{name}'"), pos)
    }

    pub fn duplicate_declaration(name: &str, previous: Position, pos: Position) -> CompileError {
        CompileError::semantic(format!("'{name}' is already declared in this scope"), pos)
            .with_note(format!("previous declaration at {previous}"))
    }

    pub fn type_mismatch(expected: DataType, found: DataType, pos: Position) -> CompileError {
        CompileError::semantic(format!("type mismatch: expected '{expected}', found '{found}'"), pos)
    }

    pub fn return_mismatch(expected: DataType, found: DataType, pos: Position) -> CompileError {
        let err = CompileError::semantic(
            format!("return type mismatch: function returns '{expected}', found '{found}'"),
            pos,
        );
        if expected == DataType::Void {
            err.with_hint("a void function must use a bare 'return;'")
        } else {
            err
        }
    }

    pub fn void_condition(construct: &str, pos: Position) -> CompileError {
        CompileError::semantic(format!("condition of '{construct}' has no value (void)"), pos)
    }

    pub fn void_variable(name: &str, pos: Position) -> CompileError {
        CompileError::semantic(format!("variable '{name}' declared void"), pos)
    }

    pub fn break_outside_loop(pos: Position) -> CompileError {
        CompileError::semantic("'break' statement not within a loop", pos)
    }

    pub fn continue_outside_loop(pos: Position) -> CompileError {
        CompileError::semantic("'continue' statement not within a loop", pos)
    }

    pub fn not_a_function(name: &str, pos: Position) -> CompileError {
        CompileError::semantic(format!("'{name}' is not a function"), pos)
    }

    pub fn assign_to_const(name: &str, pos: Position) -> CompileError {
        CompileError::semantic(format!("cannot assign to const variable '{name}'"), pos)
    }

    pub fn invalid_assignment_target(pos: Position) -> CompileError {
        CompileError::semantic("left side of assignment must be a variable", pos)
    }

    // --- budget --------------------------------------------------------------

    pub fn too_many_errors(max: usize, pos: Position) -> CompileError {
        CompileError::warning(format!("too many errors ({max}), stopping"), pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        let source = "line 1\nline 2\nline 3";
        assert_eq!(byte_offset(source, Position::new(1, 1)), 0);
        assert_eq!(byte_offset(source, Position::new(2, 1)), 7);
        assert_eq!(byte_offset(source, Position::new(2, 3)), 9);
        assert_eq!(byte_offset(source, Position::new(3, 99)), source.len());
        assert_eq!(byte_offset(source, Position::new(9, 1)), source.len());
    }

    #[test]
    fn test_byte_offset_counts_characters() {
        let source = "/* é */ int x;";
        assert_eq!(byte_offset(source, Position::new(1, 9)), 9);
    }

    #[test]
    fn test_budget_stops_after_cap() {
        let mut diags = Diagnostics::new(2);
        assert!(diags.push(CompileError::syntax("a", Position::new(1, 1))));
        assert!(!diags.is_exhausted());
        assert!(diags.push(CompileError::syntax("b", Position::new(2, 1))));
        assert!(diags.is_exhausted());
        assert!(!diags.push(CompileError::syntax("c", Position::new(3, 1))));

        let items = diags.into_vec();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].kind, ErrorKind::Warning);
        assert!(items[2].message.contains("too many errors"));
    }

    #[test]
    fn test_warnings_do_not_count_towards_budget() {
        let mut diags = Diagnostics::new(1);
        diags.push(CompileError::warning("w", Position::new(1, 1)));
        assert!(!diags.is_exhausted());
        assert_eq!(diags.error_count(), 0);
    }

    #[test]
    fn test_zero_cap_is_unlimited() {
        let mut diags = Diagnostics::new(0);
        for i in 0..200 {
            diags.push(CompileError::semantic("e", Position::new(i + 1, 1)));
        }
        assert!(!diags.is_exhausted());
        assert_eq!(diags.error_count(), 200);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "int x = ;\n";
        let err = errors::invalid_primary("';'", Position::new(1, 9));
        let text = format_error("t.c", source, &err);
        assert!(text.contains("t.c:1:9"));
        assert!(text.contains("int x = ;"));
        assert!(text.contains(&format!("{}\x1b[31m^", " ".repeat(8))));
    }

    #[test]
    fn test_display_includes_kind_and_position() {
        let err = errors::break_outside_loop(Position::new(4, 5));
        assert_eq!(err.to_string(), "semantic error at 4:5: 'break' statement not within a loop");
    }
}
