//! Define the reserved keyword vocabulary for minic.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and support status.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Reserved-but-unsupported words (`struct`, `for`, `switch`, ...) are still keywords so they can never be used
//!   as identifiers; the parser reports them as unsupported constructs.
//! - Directive words (`include`, `define`, ...) are keywords everywhere, matching the reference tokenizer.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert!(keywords::is_type_keyword(KeywordId::Float));
//! assert!(!keywords::is_type_keyword(KeywordId::Const));
//! ```

use super::registry::{Standard, Support};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Types
    Int,
    Float,
    Char,
    Void,

    // Modifiers
    Static,
    Extern,
    Const,
    Volatile,
    Typedef,

    // Aggregates
    Struct,
    Union,
    Enum,

    // Control flow
    If,
    Else,
    While,
    For,
    Do,
    Switch,
    Case,
    Default,
    Return,
    Break,
    Continue,

    // Literals
    True,
    False,

    // Preprocessor directive names
    Include,
    Define,
    Ifdef,
    Endif,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Type,
    Modifier,
    Aggregate,
    ControlFlow,
    Literal,
    Directive,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub standard: Standard,
    pub support: Support,
}

/// Registry of all keywords, grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Types
    info(KeywordId::Int, "int", KeywordCategory::Type, Standard::C89, Support::Supported),
    info(KeywordId::Float, "float", KeywordCategory::Type, Standard::C89, Support::Supported),
    info(KeywordId::Char, "char", KeywordCategory::Type, Standard::C89, Support::Supported),
    info(KeywordId::Void, "void", KeywordCategory::Type, Standard::C89, Support::Supported),
    // Modifiers
    info(KeywordId::Static, "static", KeywordCategory::Modifier, Standard::C89, Support::Supported),
    info(KeywordId::Extern, "extern", KeywordCategory::Modifier, Standard::C89, Support::Reserved),
    info(KeywordId::Const, "const", KeywordCategory::Modifier, Standard::C89, Support::Supported),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Modifier, Standard::C89, Support::Reserved),
    info(KeywordId::Typedef, "typedef", KeywordCategory::Modifier, Standard::C89, Support::Reserved),
    // Aggregates
    info(KeywordId::Struct, "struct", KeywordCategory::Aggregate, Standard::C89, Support::Reserved),
    info(KeywordId::Union, "union", KeywordCategory::Aggregate, Standard::C89, Support::Reserved),
    info(KeywordId::Enum, "enum", KeywordCategory::Aggregate, Standard::C89, Support::Reserved),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, Standard::C89, Support::Supported),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, Standard::C89, Support::Supported),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, Standard::C89, Support::Supported),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, Standard::C89, Support::Reserved),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow, Standard::C89, Support::Reserved),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, Standard::C89, Support::Reserved),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow, Standard::C89, Support::Reserved),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow, Standard::C89, Support::Reserved),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, Standard::C89, Support::Supported),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, Standard::C89, Support::Supported),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow, Standard::C89, Support::Supported),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, Standard::C99, Support::Supported),
    info(KeywordId::False, "false", KeywordCategory::Literal, Standard::C99, Support::Supported),
    // Preprocessor directive names
    info(KeywordId::Include, "include", KeywordCategory::Directive, Standard::C89, Support::Supported),
    info(KeywordId::Define, "define", KeywordCategory::Directive, Standard::C89, Support::Reserved),
    info(KeywordId::Ifdef, "ifdef", KeywordCategory::Directive, Standard::C89, Support::Reserved),
    info(KeywordId::Endif, "endif", KeywordCategory::Directive, Standard::C89, Support::Reserved),
];

/// Resolve a spelling to its keyword identifier.
///
/// ## Returns
/// - `Some(KeywordId)` if `spelling` is reserved, `None` otherwise.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.id)
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Return `true` for the keywords that begin a declaration type (`int`, `float`, `char`, `void`).
///
/// These double as members of the parser's synchronization set.
pub const fn is_type_keyword(id: KeywordId) -> bool {
    matches!(id, KeywordId::Int | KeywordId::Float | KeywordId::Char | KeywordId::Void)
}

/// Return `true` if the keyword may prefix a declaration type (`const`, `static`).
pub const fn is_qualifier(id: KeywordId) -> bool {
    matches!(id, KeywordId::Const | KeywordId::Static)
}

/// Return `true` if the grammar supports the keyword.
pub fn is_supported(id: KeywordId) -> bool {
    info_for(id).support == Support::Supported
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    standard: Standard,
    support: Support,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        standard,
        support,
    }
}
