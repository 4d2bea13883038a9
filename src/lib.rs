#![forbid(unsafe_code)]
//! minic: front end for a reduced C-like language
//!
//! This crate ties the syntax crate (tokenizer, parser with panic-mode recovery, syntax tree) to the pieces that need
//! whole-program context: the scope table, the semantic analyzer and a canonical pretty-printer. The `minic` binary
//! exposes them through a small CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("...")` with a clear
//!   explanation.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::analyzer;
pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::pipeline;
pub use frontend::symbols;

pub use format::{FormatConfig, check_formatted, format_source, format_source_with_config};
