//! minic compiler front end
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into the syntax tree, with error recovery
//! - `ast`: syntax tree definitions
//! - `diagnostics`: error values, the error catalog and rendering
//! - `symbols`: scope table
//! - `analyzer`: semantic checks and type annotation
//! - `pipeline`: parse + analyze in one call

// Syntax components are provided by the minic_syntax crate.
pub use minic_syntax::{ast, diagnostics, lexer, parser};

pub mod analyzer;
pub mod pipeline;
pub mod symbols;
