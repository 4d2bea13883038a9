//! Provide the canonical language vocabulary and pure type policy for the minic front end.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic tables and helpers that both
//! the syntax crate (tokenizer, parser) and the semantic analyzer use, so the two never disagree about what a
//! keyword is spelled like or how `int + float` promotes.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no AST types.
//! - Current scope: keywords, operators, punctuation, the data-type registry with compatibility/promotion
//!   policy, and the fixed set of built-in functions.

pub mod lang;

pub use lang::types::DataType;
