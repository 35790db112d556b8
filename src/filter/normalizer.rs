//! Token normalization for a single filter dimension.

use crate::domain::{CanonicalSet, CanonicalToken, RawSelector};

/// Separator between tokens in a raw selector.
const TOKEN_SEPARATOR: char = ',';

/// Static description of one filter dimension's input grammar.
#[derive(Debug)]
pub struct Vocabulary {
    /// Name used in diagnostics, e.g. `L4Proto`.
    pub dimension: &'static str,
    /// Expression that matches everything in this dimension.
    pub default_expression: &'static str,
    /// Selectors meaning "everything", compared case-insensitively.
    pub synonyms: &'static [&'static str],
    /// Numeric codes for the union of all members, compared exactly.
    pub combined_codes: &'static [&'static str],
    /// Alias to canonical keyword, compared exactly.
    pub aliases: &'static [(&'static str, CanonicalToken)],
    /// Logical OR operator used when joining keywords.
    pub join: &'static str,
}

impl Vocabulary {
    /// Whether `raw` selects the whole dimension without tokenizing.
    ///
    /// Synonyms and the default expression text match regardless of case,
    /// combined codes only verbatim.
    pub fn is_default_selector(&self, raw: &RawSelector) -> bool {
        raw.is_empty()
            || self.combined_codes.contains(&raw.as_str())
            || raw.eq_ignore_case(self.default_expression)
            || self.synonyms.iter().any(|synonym| raw.eq_ignore_case(synonym))
    }

    /// Case-sensitive alias lookup.
    pub fn lookup(&self, token: &str) -> Option<CanonicalToken> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, canonical)| *canonical)
    }
}

/// Map each comma-separated token of `raw` onto the vocabulary.
///
/// No whitespace trimming is done. Unknown tokens are dropped.
pub fn normalize(raw: &RawSelector, vocabulary: &Vocabulary) -> CanonicalSet {
    let mut set = CanonicalSet::new();

    for token in raw.as_str().split(TOKEN_SEPARATOR) {
        match vocabulary.lookup(token) {
            Some(canonical) => {
                set.insert(canonical);
            }
            None => {
                tracing::trace!(
                    dimension = vocabulary.dimension,
                    token,
                    "Dropping unrecognized token"
                );
            }
        }
    }

    set
}
