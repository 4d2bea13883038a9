use std::collections::HashMap;

use minic_core::lang::builtins;
use minic_core::lang::keywords::{self, KeywordCategory};
use minic_core::lang::operators::{self, Fixity, OperatorId};
use minic_core::lang::punctuation;
use minic_core::lang::registry::Support;
use minic_core::lang::types::DataType;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert!(
            info.canonical.chars().all(|c| c.is_ascii_lowercase()),
            "keyword {:?} must be lowercase ascii so the identifier scanner can find it",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn type_keywords_match_data_types() {
    for info in keywords::KEYWORDS {
        let is_type = info.category == KeywordCategory::Type;
        assert_eq!(keywords::is_type_keyword(info.id), is_type, "{:?}", info.id);
        assert_eq!(DataType::from_keyword(info.id).is_some(), is_type, "{:?}", info.id);
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn supported_binary_operators_follow_the_precedence_ladder() {
    let prec = |id| operators::info_for(id).precedence;

    assert!(operators::COMMA_PRECEDENCE < prec(OperatorId::Assign));
    assert!(prec(OperatorId::Assign) < prec(OperatorId::Question));
    assert!(prec(OperatorId::Question) < prec(OperatorId::OrOr));
    assert!(prec(OperatorId::OrOr) < prec(OperatorId::AndAnd));
    assert!(prec(OperatorId::AndAnd) < prec(OperatorId::EqEq));
    assert!(prec(OperatorId::EqEq) < prec(OperatorId::Lt));
    assert!(prec(OperatorId::Lt) < prec(OperatorId::Plus));
    assert!(prec(OperatorId::Plus) < prec(OperatorId::Star));
    assert!(prec(OperatorId::Star) < prec(OperatorId::Bang));

    for info in operators::OPERATORS {
        if info.support == Support::Supported && info.fixity == Fixity::Infix {
            assert!(info.precedence > 0, "{:?} has no precedence slot", info.id);
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_disjoint_from_operators() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(operators::from_str(info.canonical), None, "{:?}", info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn builtins_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, builtins::BuiltinFnId> = HashMap::new();

    for info in builtins::BUILTIN_FUNCTIONS {
        assert_eq!(builtins::from_str(info.canonical), Some(info.id));
        assert_eq!(builtins::as_str(info.id), info.canonical);
        assert_eq!(keywords::from_str(info.canonical), None, "builtin shadows a keyword");
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate builtin spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}
