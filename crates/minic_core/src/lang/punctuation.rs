//! Punctuation vocabulary.
//!
//! Delimiters, separators and structural markers used by the lexer/parser.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::Ellipsis), "...");
//! ```

use super::registry::Support;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// `;` and `,`.
    Separator,
    /// `.` and `->`.
    Access,
    /// `#` and `...`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Arrow,
    Ellipsis,
    Hash,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub support: Support,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator, Support::Supported),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, Support::Supported),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter, Support::Supported),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter, Support::Supported),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter, Support::Supported),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter, Support::Supported),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter, Support::Reserved),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter, Support::Reserved),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access, Support::Supported),
    info(PunctuationId::Arrow, "->", PunctuationCategory::Access, Support::Reserved),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker, Support::Reserved),
    info(PunctuationId::Hash, "#", PunctuationCategory::Marker, Support::Supported),
];

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a spelling to a punctuation identifier.
pub fn from_str(spelling: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == spelling).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    support: Support,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        support,
    }
}
