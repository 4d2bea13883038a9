//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use miette::{GraphicalReportHandler, GraphicalTheme};

use crate::format::{format_diff, format_source};
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::lexer::{self, TokenKind};
use crate::frontend::parser;
use crate::frontend::pipeline::{self, FrontendConfig, FrontendOutput};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Extensions picked up by `fmt` when walking a directory.
const SOURCE_EXTENSIONS: &[&str] = &["c", "h"];

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render diagnostics as miette reports, one after another. Colors are used only when stderr is a terminal.
pub fn render_diagnostics(file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let theme = if std::io::stderr().is_terminal() {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    render_with(&GraphicalReportHandler::new_themed(theme), file_path, source, errors)
}

fn render_with(handler: &GraphicalReportHandler, file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let mut out = String::new();
    for err in errors {
        let report = diagnostics::to_report(file_path, source, err);
        if handler.render_report(&mut out, &*report).is_err() {
            // Fall back to the one-line form rather than losing the diagnostic.
            out.push_str(&err.to_string());
        }
        out.push('\n');
    }
    out
}

fn summary(output: &FrontendOutput) -> String {
    format!(
        "{} error(s), {} warning(s)",
        output.error_count(),
        output.warning_count()
    )
}

/// Fail with every diagnostic rendered, or pass through when there are none.
fn ensure_clean(file_path: &str, source: &str, output: &FrontendOutput) -> CliResult<()> {
    if !output.has_errors() {
        return Ok(());
    }
    let mut msg = render_diagnostics(file_path, source, &output.diagnostics);
    msg.push_str(&summary(output));
    Err(CliError::failure(msg))
}

/// Tokenize and display tokens (`--tokens`).
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);

    let mut lexical_errors = Vec::new();
    for tok in &tokens {
        println!("{:>4}:{:<4} {}", tok.pos.line, tok.pos.column, tok.kind);
        if let TokenKind::Error(message) = &tok.kind {
            lexical_errors.push(CompileError::lexical(message.clone(), tok.pos));
        }
    }

    if lexical_errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(
            render_diagnostics(file_path, &source, &lexical_errors).trim_end(),
        ))
    }
}

/// Parse and display the syntax tree (`--ast`). The tree is printed even when it is partial.
pub fn parse_file(file_path: &str, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let parsed = parser::parse_source_with_config(&source, config.parse_config());
    print!("{}", parsed.program);

    if parsed.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(
            render_diagnostics(file_path, &source, &parsed.errors).trim_end(),
        ))
    }
}

/// Run the front end and list the global symbols (`--symbols`).
pub fn symbols_file(file_path: &str, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = pipeline::run(&source, config);
    ensure_clean(file_path, &source, &output)?;

    for symbol in &output.symbols {
        println!("{symbol}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and analyze a file (the default action).
pub fn check_file(file_path: &str, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = pipeline::run(&source, config);
    ensure_clean(file_path, &source, &output)?;

    println!("✓ {file_path}: no errors found");
    Ok(ExitCode::SUCCESS)
}

/// Format C source files.
pub fn format_files(path: &str, check_mode: bool, diff_mode: bool) -> CliResult<ExitCode> {
    let files = collect_source_files(Path::new(path));

    if files.is_empty() {
        return Err(CliError::failure("No .c or .h files found"));
    }

    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match fs::read_to_string(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading {}: {}", file_path.display(), e);
                error_count += 1;
                continue;
            }
        };

        let formatted = match format_source(&source) {
            Ok(formatted) => formatted,
            Err(e) => {
                let name = file_path.display().to_string();
                eprintln!("Error formatting {name}: {e}");
                for err in e.errors() {
                    diagnostics::print_error(&name, &source, err);
                }
                error_count += 1;
                continue;
            }
        };
        let changed = source != formatted;

        if diff_mode && changed {
            println!("--- {}", file_path.display());
            if let Ok(Some(diff)) = format_diff(&source) {
                print!("{}", diff);
            }
            println!();
        }

        if check_mode || diff_mode {
            if changed {
                if check_mode {
                    println!("Would reformat: {}", file_path.display());
                }
                needs_formatting = true;
            }
        } else if changed {
            if let Err(e) = fs::write(file_path, &formatted) {
                eprintln!("Error writing {}: {}", file_path.display(), e);
                error_count += 1;
            } else {
                println!("Formatted: {}", file_path.display());
                formatted_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting {
            let msg = if diff_mode { "need formatting" } else { "would be reformatted" };
            return Err(CliError::failure(format!("\n{} file(s) {}", files.len(), msg)));
        }
        println!("✓ {} file(s) already formatted", files.len());
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn collect_source_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if is_source_file(path) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                    if !name.starts_with('.') && name != "target" {
                        files.extend(collect_source_files(&entry_path));
                    }
                } else if is_source_file(&entry_path) {
                    files.push(entry_path);
                }
            }
        }
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("main.c")));
        assert!(is_source_file(Path::new("include/defs.h")));
        assert!(!is_source_file(Path::new("notes.txt")));
        assert!(!is_source_file(Path::new("Makefile")));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.c").err().map(|e| e.message);
        assert!(err.is_some_and(|m| m.starts_with("Cannot access file")));
    }

    #[test]
    fn test_render_diagnostics_mentions_message() {
        let source = "int main() { return y; }";
        let output = pipeline::run(source, &FrontendConfig::default());
        let rendered = render_diagnostics("main.c", source, &output.diagnostics);
        assert!(rendered.contains("undeclared identifier 'y'"));
    }

    #[test]
    fn test_plain_theme_points_at_source_location() {
        let source = "int main() { return y; }";
        let output = pipeline::run(source, &FrontendConfig::default());
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        let rendered = render_with(&handler, "main.c", source, &output.diagnostics);
        assert!(rendered.contains("[main.c:1:21]"), "{rendered}");
        assert!(!rendered.contains('\x1b'), "{rendered}");
    }
}
