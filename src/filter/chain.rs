//! Ordered application of several providers.

use std::sync::Arc;

use crate::domain::{FilterExpression, FilterMode};

use super::{apply_filter, FilterContext, FilterProvider};

/// A seed expression followed by providers applied in order.
#[derive(Clone, Default)]
pub struct FilterChain {
    seed: Option<FilterExpression>,
    steps: Vec<(Arc<dyn FilterProvider>, FilterMode)>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing expression instead of nothing.
    pub fn with_seed(mut self, seed: impl Into<FilterExpression>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Append a provider merged with `mode`.
    pub fn with_provider(mut self, provider: Arc<dyn FilterProvider>, mode: FilterMode) -> Self {
        self.steps.push((provider, mode));
        self
    }

    pub fn providers(&self) -> impl Iterator<Item = &Arc<dyn FilterProvider>> {
        self.steps.iter().map(|(provider, _)| provider)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Fold every provider into the seed.
    ///
    /// Returns `None` only when there is no seed and no provider
    /// contributed anything.
    pub fn build(&self, ctx: &FilterContext) -> Option<FilterExpression> {
        let mut accumulated = self.seed.clone();

        for (provider, mode) in &self.steps {
            accumulated = apply_filter(
                ctx,
                accumulated.as_ref().map(FilterExpression::as_str),
                &**provider,
                *mode,
            );
            tracing::debug!(
                dimension = provider.dimension(),
                raw = %provider.raw(),
                %mode,
                filter = accumulated.as_ref().map(FilterExpression::as_str).unwrap_or(""),
                "Applied filter provider"
            );
        }

        accumulated
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("seed", &self.seed)
            .field(
                "steps",
                &self
                    .steps
                    .iter()
                    .map(|(provider, mode)| format!("{} {}", mode, provider.describe()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
