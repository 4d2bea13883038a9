//! Data-type vocabulary and the type policy shared by the analyzer and the pretty-printer.
//!
//! minic has exactly four data types. This module owns their spellings, their mapping from type keywords, and the
//! two policy rules the analyzer relies on:
//!
//! - [`compatible`]: may a value of one type be used where another is expected?
//! - [`promote_arithmetic`]: what does an arithmetic operator yield for two operand types?
//!
//! ## Notes
//! - `void` denotes "no usable value". It is compatible with nothing, **not even itself**.
//! - Any two of `int`, `float`, `char` are pairwise compatible (implicit numeric conversion).
//!
//! ## Examples
//! ```rust
//! use minic_core::lang::types::{self, DataType};
//!
//! assert!(types::compatible(DataType::Int, DataType::Float));
//! assert!(!types::compatible(DataType::Void, DataType::Void));
//! assert_eq!(types::promote_arithmetic(DataType::Int, DataType::Float), DataType::Float);
//! assert_eq!(types::promote_arithmetic(DataType::Char, DataType::Char), DataType::Int);
//! ```

use std::fmt;

use super::keywords::KeywordId;

/// The closed set of minic data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Float,
    Char,
    Void,
}

/// All data types, in declaration order.
pub const DATA_TYPES: &[DataType] = &[DataType::Int, DataType::Float, DataType::Char, DataType::Void];

impl DataType {
    /// Return the C spelling of the type.
    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Char => "char",
            DataType::Void => "void",
        }
    }

    /// Return the type keyword that spells this type.
    pub const fn keyword(self) -> KeywordId {
        match self {
            DataType::Int => KeywordId::Int,
            DataType::Float => KeywordId::Float,
            DataType::Char => KeywordId::Char,
            DataType::Void => KeywordId::Void,
        }
    }

    /// Map a type keyword to its data type; `None` for every other keyword.
    pub const fn from_keyword(id: KeywordId) -> Option<DataType> {
        match id {
            KeywordId::Int => Some(DataType::Int),
            KeywordId::Float => Some(DataType::Float),
            KeywordId::Char => Some(DataType::Char),
            KeywordId::Void => Some(DataType::Void),
            _ => None,
        }
    }

    /// Return `true` for `int`, `float` and `char`.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, DataType::Void)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether a value of type `found` may be used where `expected` is required.
///
/// The relation is symmetric.
pub const fn compatible(expected: DataType, found: DataType) -> bool {
    expected.is_numeric() && found.is_numeric()
}

/// Result type of an arithmetic operator (`+ - * / %`) over numeric operands.
///
/// `float` wins over everything; otherwise the result is `int` (so `char` operands promote to `int`).
pub const fn promote_arithmetic(lhs: DataType, rhs: DataType) -> DataType {
    if matches!(lhs, DataType::Float) || matches!(rhs, DataType::Float) {
        DataType::Float
    } else {
        DataType::Int
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_is_compatible_with_nothing() {
        for &t in DATA_TYPES {
            assert!(!compatible(DataType::Void, t), "void vs {t}");
            assert!(!compatible(t, DataType::Void), "{t} vs void");
        }
    }

    #[test]
    fn test_numeric_types_pairwise_compatible() {
        let numeric = [DataType::Int, DataType::Float, DataType::Char];
        for a in numeric {
            for b in numeric {
                assert!(compatible(a, b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_promotion() {
        assert_eq!(promote_arithmetic(DataType::Int, DataType::Int), DataType::Int);
        assert_eq!(promote_arithmetic(DataType::Int, DataType::Float), DataType::Float);
        assert_eq!(promote_arithmetic(DataType::Float, DataType::Char), DataType::Float);
        assert_eq!(promote_arithmetic(DataType::Char, DataType::Char), DataType::Int);
        assert_eq!(promote_arithmetic(DataType::Char, DataType::Int), DataType::Int);
    }

    #[test]
    fn test_keyword_mapping_round_trips() {
        for &t in DATA_TYPES {
            assert_eq!(DataType::from_keyword(t.keyword()), Some(t));
        }
        assert_eq!(DataType::from_keyword(KeywordId::Return), None);
    }
}
