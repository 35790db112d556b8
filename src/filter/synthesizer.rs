//! Expression synthesis from canonical keywords.

use crate::domain::{CanonicalSet, FilterExpression, RawSelector};

use super::normalizer::{normalize, Vocabulary};

/// Join `set` with the vocabulary's OR operator.
///
/// An empty set yields the dimension default.
pub fn synthesize(set: &CanonicalSet, vocabulary: &Vocabulary) -> FilterExpression {
    if set.is_empty() {
        return FilterExpression::new(vocabulary.default_expression);
    }

    let keywords: Vec<&str> = set.iter().copied().collect();
    FilterExpression::new(keywords.join(vocabulary.join))
}

/// Resolve a raw selector to an expression for `vocabulary`.
///
/// Default selectors short-circuit without tokenizing.
pub fn expression_for(raw: &RawSelector, vocabulary: &Vocabulary) -> FilterExpression {
    if vocabulary.is_default_selector(raw) {
        return FilterExpression::new(vocabulary.default_expression);
    }

    synthesize(&normalize(raw, vocabulary), vocabulary)
}
