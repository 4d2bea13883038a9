//! Syntax front end for minic: tokenizer, syntax tree, parser, diagnostics.
//!
//! This crate stops at the tree. Name resolution and type checking live in the `minic` crate and work on the
//! [`ast::Program`] produced here.
//!
//! ## Notes
//! - Vocabulary identity (keywords/operators/punctuation) comes from `minic_core::lang` registries.
//! - Parsing never aborts on the first error: the parser records a diagnostic, resynchronizes, and keeps going.
//!
//! ## Examples
//! ```rust
//! use minic_syntax::parser;
//!
//! let out = parser::parse_source("int x = 1; int main() { return x; }");
//! assert!(out.is_ok());
//! assert_eq!(out.program.declarations.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
