//! Provider shared by every table-driven dimension.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::{FilterExpression, RawSelector};

use super::normalizer::Vocabulary;
use super::synthesizer::expression_for;
use super::{FilterContext, FilterProvider, PcapFilter};

/// A filter dimension backed by a static [`Vocabulary`].
pub trait Dimension: Send + Sync + 'static {
    fn vocabulary() -> &'static Vocabulary;
}

/// Resolves a selector against the vocabulary of `D`.
pub struct VocabularyFilterProvider<D: Dimension> {
    filter: Arc<PcapFilter>,
    _dimension: PhantomData<D>,
}

impl<D: Dimension> VocabularyFilterProvider<D> {
    pub fn new(filter: Arc<PcapFilter>) -> Self {
        Self {
            filter,
            _dimension: PhantomData,
        }
    }
}

impl<D: Dimension> Clone for VocabularyFilterProvider<D> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.filter))
    }
}

impl<D: Dimension> fmt::Debug for VocabularyFilterProvider<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyFilterProvider")
            .field("dimension", &D::vocabulary().dimension)
            .field("raw", &self.filter.raw)
            .finish()
    }
}

impl<D: Dimension> FilterProvider for VocabularyFilterProvider<D> {
    fn dimension(&self) -> &'static str {
        D::vocabulary().dimension
    }

    fn raw(&self) -> &RawSelector {
        &self.filter.raw
    }

    fn get(&self, _ctx: &FilterContext) -> Option<FilterExpression> {
        Some(expression_for(&self.filter.raw, D::vocabulary()))
    }
}

impl<D: Dimension> fmt::Display for VocabularyFilterProvider<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
