//! Parser for minic.
//!
//! Recursive descent with one token of lookahead over a fixed precedence ladder, from loosest to tightest:
//! `,` → `=` → `?:` → `||` → `&&` → `== !=` → `< > <= >=` → `+ -` → `* / %` → prefix unary → postfix → primary.
//!
//! Syntax errors never abort the pass. Each grammar rule returns `Result`; the declaration and block loops catch
//! the error, record it, and resynchronize (see `Parser::synchronize`) before carrying on.
//!
//! ## Examples
//!
//! ```rust
//! use minic_syntax::parser;
//!
//! let out = parser::parse_source("int main() { int ; int y = 1; return y; }");
//! assert_eq!(out.errors.len(), 1);
//! assert_eq!(out.program.declarations.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{CompileError, DEFAULT_MAX_ERRORS, Diagnostics, errors};
use crate::lexer::{Lexer, Token, TokenKind, TokenSource, TokenStream};
use minic_core::DataType;
use minic_core::lang::keywords::{self, KeywordId};
use minic_core::lang::operators::{self, OperatorId};
use minic_core::lang::punctuation::PunctuationId;
use minic_core::lang::registry::Support;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
