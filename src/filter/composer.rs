//! Merging provider fragments into an accumulated filter.

use crate::domain::{FilterExpression, FilterMode};

use super::{FilterContext, FilterProvider};

/// Combine `provider`'s fragment with `existing` according to `mode`.
///
/// A missing or blank `existing` filter is the identity for every mode.
/// The provider is queried exactly once; if it declines, `existing` is
/// returned unchanged.
pub fn apply_filter<P>(
    ctx: &FilterContext,
    existing: Option<&str>,
    provider: &P,
    mode: FilterMode,
) -> Option<FilterExpression>
where
    P: FilterProvider + ?Sized,
{
    let existing = existing
        .filter(|e| !e.trim().is_empty())
        .map(FilterExpression::from);

    let Some(fragment) = provider.get(ctx) else {
        tracing::debug!(
            dimension = provider.dimension(),
            "Provider returned no expression, keeping existing filter"
        );
        return existing;
    };

    let combined = match (existing, mode) {
        (None, _) | (Some(_), FilterMode::Replace) => fragment,
        (Some(existing), FilterMode::And) => existing.and(&fragment),
        (Some(existing), FilterMode::Or) => existing.or(&fragment),
    };

    Some(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawSelector;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed fragment and counts how often it was asked.
    struct FixedProvider {
        raw: RawSelector,
        fragment: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FixedProvider {
        fn new(fragment: Option<&'static str>) -> Self {
            Self {
                raw: RawSelector::from("fixed"),
                fragment,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl FilterProvider for FixedProvider {
        fn dimension(&self) -> &'static str {
            "Fixed"
        }

        fn raw(&self) -> &RawSelector {
            &self.raw
        }

        fn get(&self, _ctx: &FilterContext) -> Option<FilterExpression> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.fragment.map(FilterExpression::from)
        }
    }

    fn apply(existing: Option<&str>, mode: FilterMode) -> Option<String> {
        let provider = FixedProvider::new(Some("tcp"));
        apply_filter(&FilterContext::default(), existing, &provider, mode)
            .map(FilterExpression::into_inner)
    }

    #[test]
    fn missing_existing_is_identity() {
        for mode in [FilterMode::And, FilterMode::Or, FilterMode::Replace] {
            assert_eq!(apply(None, mode).as_deref(), Some("tcp"));
        }
    }

    #[test]
    fn blank_existing_is_identity() {
        assert_eq!(apply(Some("   "), FilterMode::And).as_deref(), Some("tcp"));
    }

    #[test]
    fn non_blank_existing_is_kept_verbatim() {
        assert_eq!(
            apply(Some("  port 53  "), FilterMode::And).as_deref(),
            Some("(  port 53  ) and (tcp)")
        );
    }

    #[test]
    fn and_mode_conjoins() {
        assert_eq!(
            apply(Some("port 443"), FilterMode::And).as_deref(),
            Some("(port 443) and (tcp)")
        );
    }

    #[test]
    fn or_mode_disjoins() {
        assert_eq!(
            apply(Some("port 443"), FilterMode::Or).as_deref(),
            Some("(port 443) or (tcp)")
        );
    }

    #[test]
    fn replace_mode_discards_existing() {
        assert_eq!(
            apply(Some("port 443"), FilterMode::Replace).as_deref(),
            Some("tcp")
        );
    }

    #[test]
    fn queries_provider_exactly_once() {
        let provider = FixedProvider::new(Some("udp"));
        let _ = apply_filter(
            &FilterContext::default(),
            Some("host 10.0.0.1"),
            &provider,
            FilterMode::And,
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn declined_fragment_keeps_existing() {
        let provider = FixedProvider::new(None);
        let result = apply_filter(
            &FilterContext::default(),
            Some("port 53"),
            &provider,
            FilterMode::Replace,
        );
        assert_eq!(result.map(FilterExpression::into_inner).as_deref(), Some("port 53"));
    }

    #[test]
    fn works_through_trait_object() {
        let provider: Box<dyn FilterProvider> = Box::new(FixedProvider::new(Some("udp")));
        let result = provider.apply(&FilterContext::default(), Some("port 53"), FilterMode::And);
        assert_eq!(result.unwrap().as_str(), "(port 53) and (udp)");
    }
}
