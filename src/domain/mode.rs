//! Composition modes.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// How a new fragment is merged into an accumulated filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// `(existing) and (new)`
    #[default]
    And,
    /// `(existing) or (new)`
    Or,
    /// Discard the existing filter.
    Replace,
}

impl FromStr for FilterMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "&&" => Ok(Self::And),
            "or" | "||" => Ok(Self::Or),
            "replace" | "set" => Ok(Self::Replace),
            _ => Err(FilterError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Replace => write!(f, "replace"),
        }
    }
}
