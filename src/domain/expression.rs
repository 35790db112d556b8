//! Boolean capture filter expressions.

use std::fmt;

/// A fragment of BPF filter syntax, e.g. `tcp or udp`.
///
/// The text is not validated here; the capture engine compiles it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterExpression(String);

impl FilterExpression {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `(self) and (other)`
    pub fn and(&self, other: &FilterExpression) -> Self {
        Self(format!("({}) and ({})", self.0, other.0))
    }

    /// `(self) or (other)`
    pub fn or(&self, other: &FilterExpression) -> Self {
        Self(format!("({}) or ({})", self.0, other.0))
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilterExpression {
    fn from(expression: &str) -> Self {
        Self(expression.to_string())
    }
}
