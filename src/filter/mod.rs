//! Filter providers.
//!
//! Each provider owns one filter dimension (network protocol, transport
//! protocol, ...) and turns the user's loosely formatted selector into a
//! canonical BPF fragment. The composer merges that fragment into an
//! accumulated filter according to a [`FilterMode`].
//!
//! Providers never fail: input that cannot be understood falls back to
//! the dimension's "match everything" expression.

mod chain;
mod composer;
mod l3_proto;
mod l4_proto;
mod normalizer;
mod synthesizer;
mod vocabulary_provider;

pub use chain::FilterChain;
pub use composer::apply_filter;
pub use l3_proto::{L3Proto, L3ProtoFilterProvider};
pub use l4_proto::{L4Proto, L4ProtoFilterProvider};
pub use normalizer::{normalize, Vocabulary};
pub use synthesizer::{expression_for, synthesize};
pub use vocabulary_provider::{Dimension, VocabularyFilterProvider};

use std::sync::Arc;

use crate::domain::{FilterExpression, FilterMode, RawSelector};

/// Per-call context handed to every provider operation.
///
/// Providers accept it so all dimensions share one signature; none of
/// them currently reads it.
#[derive(Debug, Clone, Default)]
pub struct FilterContext {
    _private: (),
}

/// Dimension-agnostic filter state shared by providers.
#[derive(Debug, Clone, Default)]
pub struct PcapFilter {
    /// The user's selector for this dimension.
    pub raw: RawSelector,
}

impl PcapFilter {
    pub fn new(raw: impl Into<RawSelector>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Capability contract implemented once per filter dimension.
pub trait FilterProvider: Send + Sync {
    /// Dimension name used in diagnostics.
    fn dimension(&self) -> &'static str;

    /// The selector this provider was built from.
    fn raw(&self) -> &RawSelector;

    /// Synthesize this dimension's fragment.
    ///
    /// Always `Some` today; `None` is reserved for providers that may
    /// decline to contribute.
    fn get(&self, ctx: &FilterContext) -> Option<FilterExpression>;

    /// `"<Dimension>[<raw>] => (<expression>)"`, for logs only.
    fn describe(&self) -> String {
        match self.get(&FilterContext::default()) {
            Some(expression) => {
                format!("{}[{}] => ({})", self.dimension(), self.raw(), expression)
            }
            None => format!("{}[nil]", self.dimension()),
        }
    }

    /// Merge this provider's fragment into `existing`.
    fn apply(
        &self,
        ctx: &FilterContext,
        existing: Option<&str>,
        mode: FilterMode,
    ) -> Option<FilterExpression> {
        apply_filter(ctx, existing, self, mode)
    }
}

/// Filter dimensions with a provider implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Network layer protocol: `ip`, `ip6`.
    L3Proto,
    /// Transport layer protocol: `tcp`, `udp`.
    L4Proto,
}

/// Build the provider for `kind` over `filter`.
pub fn new_filter_provider(kind: ProviderKind, filter: Arc<PcapFilter>) -> Arc<dyn FilterProvider> {
    match kind {
        ProviderKind::L3Proto => Arc::new(L3ProtoFilterProvider::new(filter)),
        ProviderKind::L4Proto => Arc::new(L4ProtoFilterProvider::new(filter)),
    }
}
