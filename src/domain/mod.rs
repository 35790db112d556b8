//! Domain values for capture filter construction.
//!
//! These types carry no behavior beyond what the filter providers and
//! the composer need to exchange strings safely.

mod expression;
mod mode;
mod selector;

pub use expression::FilterExpression;
pub use mode::FilterMode;
pub use selector::RawSelector;

use std::collections::BTreeSet;

/// A keyword the capture engine understands for one dimension value.
pub type CanonicalToken = &'static str;

/// Deduplicated canonical keywords; iterates in lexicographic order.
pub type CanonicalSet = BTreeSet<CanonicalToken>;
