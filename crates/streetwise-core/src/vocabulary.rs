//! Street-type vocabulary.
//!
//! A [`Vocabulary`] is the ordered list of street types the parser
//! recognizes: the built-in table from [`dictionaries::street_types`] plus
//! any extra types from configuration.
//!
//! [`dictionaries::street_types`]: crate::dictionaries::street_types

use serde::{Deserialize, Serialize};

use crate::dictionaries::street_types::STREET_TYPES;

/// A recognized street type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StreetType {
    /// Canonical abbreviation ("Ave").
    pub abbr: String,
    /// Spelled-out form ("Avenue"). Defaults to the abbreviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// The word also appears as part of street names ("Forest Hill Rd").
    #[serde(default)]
    pub name_word: bool,
}

impl StreetType {
    /// Create a street type with an explicit long form.
    pub fn new(abbr: impl Into<String>, long: impl Into<String>, name_word: bool) -> Self {
        Self {
            abbr: abbr.into(),
            long: Some(long.into()),
            name_word,
        }
    }

    /// The long form, or the abbreviation when none was given.
    pub fn long(&self) -> &str {
        self.long.as_deref().unwrap_or(&self.abbr)
    }

}

/// Ordered street-type vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    types: Vec<StreetType>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        let types = STREET_TYPES
            .iter()
            .map(|t| StreetType::new(t.abbr, t.long, t.name_word))
            .collect();
        Self { types }
    }

    /// The built-in vocabulary extended with `extra`.
    ///
    /// An extra type whose abbreviation matches a built-in one replaces it in
    /// place; others are appended in the order given.
    pub fn with_extra(extra: &[StreetType]) -> Self {
        let mut vocab = Self::builtin();
        for ty in extra {
            let abbr = ty.abbr.trim();
            if abbr.is_empty() {
                tracing::warn!("ignoring extra street type with empty abbreviation");
                continue;
            }
            if let Some(existing) = vocab
                .types
                .iter_mut()
                .find(|t| t.abbr.eq_ignore_ascii_case(abbr))
            {
                *existing = ty.clone();
            } else {
                vocab.types.push(ty.clone());
            }
        }
        tracing::debug!(types = vocab.types.len(), extra = extra.len(), "vocabulary built");
        vocab
    }

    /// Resolve a token to a street type.
    ///
    /// Matches the abbreviation or long form ignoring case and a trailing
    /// period. An abbreviation match beats a long-form match, so "Parkway"
    /// resolves to its own entry rather than to "Pkwy"; otherwise the first
    /// matching entry wins.
    pub fn resolve(&self, token: &str) -> Option<&StreetType> {
        let token = token.trim().trim_end_matches('.');
        if token.is_empty() {
            return None;
        }
        self.types
            .iter()
            .find(|t| t.abbr.eq_ignore_ascii_case(token))
            .or_else(|| self.types.iter().find(|t| t.long().eq_ignore_ascii_case(token)))
    }

    /// Whether `token` resolves to any street type.
    pub fn is_type(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }

    /// Position of the type with abbreviation `abbr` in resolution order.
    pub fn position(&self, abbr: &str) -> Option<usize> {
        self.types.iter().position(|t| t.abbr == abbr)
    }

    /// All types in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &StreetType> {
        self.types.iter()
    }

    /// Number of types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_long_forms() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.resolve("Boulevard").unwrap().abbr, "Blvd");
        assert_eq!(vocab.resolve("st.").unwrap().abbr, "St");
        assert!(vocab.resolve("Yonge").is_none());
        assert!(vocab.resolve("  ").is_none());
        assert_eq!(vocab.resolve("park").unwrap().abbr, "Pk");
        assert_eq!(vocab.resolve("terrace").unwrap().abbr, "Ter");
    }

    #[test]
    fn abbreviation_beats_long_form() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.resolve("Parkway").unwrap().abbr, "Parkway");
        assert_eq!(vocab.resolve("Pkwy").unwrap().abbr, "Pkwy");
        assert_eq!(vocab.resolve("ROADWAY").unwrap().abbr, "Roadway");
        assert_eq!(vocab.resolve("Rdwy").unwrap().abbr, "Rdwy");
    }

    #[test]
    fn extra_types_are_appended() {
        let vocab = Vocabulary::with_extra(&[StreetType::new("Qy", "Quay", false)]);
        assert_eq!(vocab.len(), Vocabulary::builtin().len() + 1);
        assert_eq!(vocab.resolve("quay").unwrap().abbr, "Qy");
        assert_eq!(vocab.position("Qy"), Some(vocab.len() - 1));
    }

    #[test]
    fn extra_type_replaces_builtin_in_place() {
        let builtin_pos = Vocabulary::builtin().position("Trl").unwrap();
        let vocab = Vocabulary::with_extra(&[StreetType::new("Trl", "Trail", true)]);
        assert_eq!(vocab.len(), Vocabulary::builtin().len());
        assert_eq!(vocab.position("Trl"), Some(builtin_pos));
        assert!(vocab.resolve("Trail").unwrap().name_word);
    }

    #[test]
    fn empty_extra_abbreviation_is_ignored() {
        let vocab = Vocabulary::with_extra(&[StreetType::new(" ", "Nothing", false)]);
        assert_eq!(vocab, Vocabulary::builtin());
    }

    #[test]
    fn long_defaults_to_abbreviation() {
        let ty: StreetType = serde_json::from_str(r#"{"abbr": "Esplanade"}"#).unwrap();
        assert_eq!(ty.long(), "Esplanade");
        assert!(!ty.name_word);
    }
}
