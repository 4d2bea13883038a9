//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser and pretty-printer share:
//! precedence, associativity and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact (`"=="` never resolves to `"="`).
//! - `precedence` is a relative ordering where higher binds tighter. The scale mirrors the parser's ladder:
//!   sequencing (1) < assignment (2) < ternary (3) < `||` (4) < `&&` (5) < equality (6) < relational (7) <
//!   additive (8) < multiplicative (9) < unary prefix (10).
//! - `+` and `-` are registered once with infix precedence; the parser also accepts them as unary prefixes.
//! - Bitwise operators are tokenized but have no grammar slot yet (see [`Support::Reserved`]).
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

use super::registry::Support;

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Assignment
    Assign,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,

    // Increment / decrement
    PlusPlus,
    MinusMinus,

    // Conditional
    Question,
    Colon,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub support: Support,
}

/// Precedence of the `,` sequencing operator (lowest binding power).
pub const COMMA_PRECEDENCE: u8 = 1;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", 8, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Minus, "-", 8, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Star, "*", 9, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Slash, "/", 9, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Percent, "%", 9, Associativity::Left, Fixity::Infix, Support::Supported),
    // Assignment
    op(OperatorId::Assign, "=", 2, Associativity::Right, Fixity::Infix, Support::Supported),
    // Comparison
    op(OperatorId::EqEq, "==", 6, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::NotEq, "!=", 6, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Lt, "<", 7, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Gt, ">", 7, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::LtEq, "<=", 7, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::GtEq, ">=", 7, Associativity::Left, Fixity::Infix, Support::Supported),
    // Logical
    op(OperatorId::AndAnd, "&&", 5, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::OrOr, "||", 4, Associativity::Left, Fixity::Infix, Support::Supported),
    op(OperatorId::Bang, "!", 10, Associativity::Right, Fixity::Prefix, Support::Supported),
    // Bitwise
    op(OperatorId::Amp, "&", 0, Associativity::Left, Fixity::Infix, Support::Reserved),
    op(OperatorId::Pipe, "|", 0, Associativity::Left, Fixity::Infix, Support::Reserved),
    op(OperatorId::Caret, "^", 0, Associativity::Left, Fixity::Infix, Support::Reserved),
    op(OperatorId::Tilde, "~", 10, Associativity::Right, Fixity::Prefix, Support::Supported),
    op(OperatorId::Shl, "<<", 0, Associativity::Left, Fixity::Infix, Support::Reserved),
    op(OperatorId::Shr, ">>", 0, Associativity::Left, Fixity::Infix, Support::Reserved),
    // Increment / decrement
    op(OperatorId::PlusPlus, "++", 10, Associativity::Right, Fixity::Prefix, Support::Supported),
    op(OperatorId::MinusMinus, "--", 10, Associativity::Right, Fixity::Prefix, Support::Supported),
    // Conditional
    op(OperatorId::Question, "?", 3, Associativity::Right, Fixity::Infix, Support::Supported),
    op(OperatorId::Colon, ":", 3, Associativity::Right, Fixity::Infix, Support::Supported),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    support: Support,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
        support,
    }
}
