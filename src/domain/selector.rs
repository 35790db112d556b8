//! User-supplied selector text.

use std::fmt;
use std::sync::Arc;

/// The raw value of one filter dimension as typed by the user.
///
/// Cloning shares the underlying string; the text is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RawSelector(Arc<str>);

impl RawSelector {
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ASCII case-insensitive comparison against `other`.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for RawSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawSelector {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
