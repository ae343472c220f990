//! The street record.

use serde::{Deserialize, Serialize};

use crate::dictionaries::directions::Direction;

/// One street parsed from a listing line.
///
/// Records are immutable once built: the parser fills every field and the
/// rest of the crate only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Street {
    base: String,
    #[serde(rename = "type")]
    street_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
}

impl Street {
    /// Build a street from its base name and canonical type abbreviation.
    pub fn new(base: impl Into<String>, street_type: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            street_type: street_type.into(),
            direction: None,
            from: None,
            to: None,
            page: None,
        }
    }

    /// Set the direction qualifier.
    #[must_use]
    pub const fn with_direction(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    /// Set the end-points.
    #[must_use]
    pub fn with_limits(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from = from.filter(|s| !s.is_empty());
        self.to = to.filter(|s| !s.is_empty());
        self
    }

    /// Set the 1-based page the street was read from.
    #[must_use]
    pub const fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Base name without type or direction ("Bloor").
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Canonical type abbreviation ("St").
    pub fn street_type(&self) -> &str {
        &self.street_type
    }

    /// Direction qualifier, if any.
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Start of the listed segment.
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// End of the listed segment.
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Page of the listing the street came from.
    pub const fn page(&self) -> Option<usize> {
        self.page
    }

    /// Street name without its type: base plus direction ("Bloor W").
    pub fn name(&self) -> String {
        match self.direction {
            Some(dir) => format!("{} {dir}", self.base),
            None => self.base.clone(),
        }
    }

    /// Full listing form: base, type, direction ("Bloor St W").
    pub fn full_name(&self) -> String {
        match self.direction {
            Some(dir) => format!("{} {} {dir}", self.base, self.street_type),
            None => format!("{} {}", self.base, self.street_type),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_without_direction() {
        let street = Street::new("Yonge", "St");
        assert_eq!(street.name(), "Yonge");
        assert_eq!(street.full_name(), "Yonge St");
    }

    #[test]
    fn direction_follows_type_in_full_name() {
        let street = Street::new("Bloor", "St").with_direction(Some(Direction::West));
        assert_eq!(street.name(), "Bloor W");
        assert_eq!(street.full_name(), "Bloor St W");
        assert_eq!(street.to_string(), "Bloor St W");
    }

    #[test]
    fn empty_limits_are_dropped() {
        let street = Street::new("Bay", "St").with_limits(Some(String::new()), Some("Front St".into()));
        assert_eq!(street.from(), None);
        assert_eq!(street.to(), Some("Front St"));
    }

    #[test]
    fn json_shape() {
        let street = Street::new("Queen", "St")
            .with_direction(Some(Direction::East))
            .on_page(4);
        let json = serde_json::to_value(&street).unwrap();
        assert_eq!(json["base"], "Queen");
        assert_eq!(json["type"], "St");
        assert_eq!(json["direction"], "E");
        assert_eq!(json["page"], 4);
        assert!(json.get("from").is_none());
    }
}
