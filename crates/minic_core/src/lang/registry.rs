//! Shareable metadata for `minic_core::lang` registries.
//!
//! Every registry (keywords, operators, punctuation, built-ins) records the same small provenance facts: which C
//! revision introduced the item and whether the minic grammar actually supports it. These types are `Copy` so the
//! registries can live in `const` tables.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the lexer/parser.

/// The C language revision a vocabulary item first appeared in.
///
/// ## Examples
/// ```rust
/// use minic_core::lang::registry::Standard;
///
/// assert_eq!(Standard::C89.as_str(), "C89");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Standard {
    C89,
    C99,
}

impl Standard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Standard::C89 => "C89",
            Standard::C99 => "C99",
        }
    }
}

/// Whether the minic grammar accepts a vocabulary item.
///
/// `Reserved` items are still recognized by the tokenizer (so they never become identifiers) but the parser
/// rejects them with an "unsupported" diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Support {
    Supported,
    Reserved,
}

/// Shared metadata shape for simple registry items.
///
/// Registries that need extra per-item data (operator precedence, keyword category) wrap the same fields in their
/// own info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub standard: Standard,
    pub support: Support,
}
