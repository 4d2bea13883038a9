//! Built-in function vocabulary.
//!
//! minic accepts calls to a small fixed set of library routines without a prior declaration. They are variadic,
//! their arguments are not checked against a signature, and every call yields `int`.
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::builtins::{self, BuiltinFnId};
//!
//! assert_eq!(builtins::from_str("printf"), Some(BuiltinFnId::Printf));
//! assert_eq!(builtins::as_str(BuiltinFnId::Scanf), "scanf");
//! assert_eq!(builtins::from_str("puts"), None);
//! ```

use super::registry::{LangItemInfo, Standard, Support};
use super::types::DataType;

/// Stable identifier for a built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFnId {
    Printf,
    Scanf,
}

/// Metadata for a built-in function.
pub type BuiltinFnInfo = LangItemInfo<BuiltinFnId>;

/// Registry of all built-in functions.
pub const BUILTIN_FUNCTIONS: &[BuiltinFnInfo] = &[
    info(BuiltinFnId::Printf, "printf", "Formatted print to stdout."),
    info(BuiltinFnId::Scanf, "scanf", "Formatted read from stdin."),
];

/// Every built-in returns `int`.
pub const BUILTIN_RETURN_TYPE: DataType = DataType::Int;

/// Return the canonical spelling for a built-in function.
pub fn as_str(id: BuiltinFnId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a built-in function.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BuiltinFnId) -> &'static BuiltinFnInfo {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| b.id == id)
        .expect("builtin info missing")
}

/// Resolve a name to a built-in function identifier (canonical spelling or alias).
pub fn from_str(name: &str) -> Option<BuiltinFnId> {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| {
            let aliases: &[&str] = b.aliases;
            b.canonical == name || aliases.contains(&name)
        })
        .map(|b| b.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: BuiltinFnId, canonical: &'static str, description: &'static str) -> BuiltinFnInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        standard: Standard::C89,
        support: Support::Supported,
    }
}
