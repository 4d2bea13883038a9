//! CLI module for minic
//!
//! ## Commands
//!
//! - `minic <file>` - Parse and analyze a file, reporting every diagnostic
//! - `minic --tokens <file>` / `--ast <file>` / `--symbols <file>` - Debug dumps of each phase
//! - `minic fmt <file|dir>` - Format C source files
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::frontend::diagnostics::DEFAULT_MAX_ERRORS;
use crate::frontend::pipeline::FrontendConfig;
use crate::version::MINIC_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for a reduced C-like language
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version = MINIC_VERSION)]
#[command(about = "Parse and check a reduced C-like language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Stop each phase after this many errors (0 = unlimited)
    #[arg(long = "max-errors", value_name = "N", default_value_t = DEFAULT_MAX_ERRORS, global = true)]
    pub max_errors: usize,

    // Debug/development flags
    /// Tokenize only and print the token stream
    #[arg(long = "tokens", value_name = "FILE", conflicts_with = "file")]
    pub tokens_file: Option<PathBuf>,

    /// Parse only and print the syntax tree
    #[arg(long = "ast", value_name = "FILE", conflicts_with = "file")]
    pub ast_file: Option<PathBuf>,

    /// Analyze and print the global symbols
    #[arg(long = "symbols", value_name = "FILE", conflicts_with = "file")]
    pub symbols_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format C source files
    Fmt {
        /// File or directory to format
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = FrontendConfig::new().with_max_errors(cli.max_errors);
    tracing::debug!(max_errors = config.max_errors, "starting minic");

    // Handle debug flags first
    if let Some(file) = cli.tokens_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.ast_file {
        return commands::parse_file(&file.to_string_lossy(), &config);
    }
    if let Some(file) = cli.symbols_file {
        return commands::symbols_file(&file.to_string_lossy(), &config);
    }

    match cli.command {
        Some(Command::Fmt { path, check, diff }) => commands::format_files(&path.to_string_lossy(), check, diff),
        None => {
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), &config)
            } else {
                Err(CliError::failure("no input file (try `minic --help`)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["minic", "main.c"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("main.c")));
        assert_eq!(cli.max_errors, DEFAULT_MAX_ERRORS);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_max_errors() {
        let cli = Cli::try_parse_from(["minic", "--max-errors", "3", "main.c"]).unwrap();
        assert_eq!(cli.max_errors, 3);
    }

    #[test]
    fn test_cli_parse_fmt() {
        let cli = Cli::try_parse_from(["minic", "fmt", "src/", "--check"]).unwrap();
        if let Some(Command::Fmt { check, diff, path }) = cli.command {
            assert!(check);
            assert!(!diff);
            assert_eq!(path, PathBuf::from("src/"));
        } else {
            panic!("Expected Fmt command");
        }
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["minic", "--tokens", "a.c"]).unwrap();
        assert!(cli.tokens_file.is_some());

        let cli = Cli::try_parse_from(["minic", "--ast", "a.c"]).unwrap();
        assert!(cli.ast_file.is_some());

        let cli = Cli::try_parse_from(["minic", "--symbols", "a.c"]).unwrap();
        assert!(cli.symbols_file.is_some());
    }

    #[test]
    fn test_cli_debug_flag_conflicts_with_file() {
        assert!(Cli::try_parse_from(["minic", "--ast", "a.c", "b.c"]).is_err());
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["minic"]).unwrap();
        assert!(execute(cli).is_err());
    }
}
