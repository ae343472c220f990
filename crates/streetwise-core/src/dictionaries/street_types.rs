//! Street-type suffix table.
//!
//! The order of [`STREET_TYPES`] is the resolution order: when a token could
//! match more than one entry, the first entry wins (after exact
//! abbreviation matches, see [`crate::Vocabulary::resolve`]).

/// One built-in street type: canonical abbreviation, long form, and whether
/// the word also shows up as part of street names ("Forest Hill Rd").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinType {
    /// Canonical abbreviation as printed in listings.
    pub abbr: &'static str,
    /// Spelled-out form.
    pub long: &'static str,
    /// The word is commonly a name word as well as a suffix.
    pub name_word: bool,
}

const fn entry(abbr: &'static str, long: &'static str, name_word: bool) -> BuiltinType {
    BuiltinType {
        abbr,
        long,
        name_word,
    }
}

/// Built-in street types, in resolution order.
pub const STREET_TYPES: &[BuiltinType] = &[
    entry("Ave", "Avenue", false),
    entry("Bdge", "Bridge", false),
    entry("Blvd", "Boulevard", false),
    entry("Crcl", "Circle", false),
    entry("Crct", "Circuit", false),
    entry("Cres", "Crescent", false),
    entry("Crt", "Court", false),
    entry("Cs", "Close", true),
    entry("Dr", "Drive", false),
    entry("Gdns", "Gardens", true),
    entry("Grv", "Grove", true),
    entry("Gt", "Gate", true),
    entry("Hill", "Hill", true),
    entry("Hts", "Heights", true),
    entry("Lane", "Lane", true),
    entry("Line", "Line", true),
    entry("Lwn", "Lawn", true),
    entry("Mews", "Mews", true),
    entry("Path", "Path", true),
    entry("Pk", "Park", true),
    entry("Pkwy", "Parkway", true),
    entry("Pl", "Place", false),
    entry("Ramp", "Ramp", false),
    entry("Rd", "Road", false),
    entry("Rdwy", "Roadway", false),
    entry("Sq", "Square", false),
    entry("St", "Street", false),
    entry("Ter", "Terrace", false),
    entry("Trl", "Trail", false),
    entry("View", "View", true),
    entry("Walk", "Walk", true),
    entry("Way", "Way", true),
    entry("Wds", "Woods", true),
    entry("Wood", "Wood", true),
    entry("Parkway", "Parkway", true),
    entry("Roadway", "Roadway", false),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find(abbr: &str) -> &'static BuiltinType {
        STREET_TYPES.iter().find(|t| t.abbr == abbr).unwrap()
    }

    #[test]
    fn name_words_are_flagged() {
        for abbr in ["Hill", "Pkwy", "Parkway", "Pk", "Gt", "View", "Wds"] {
            assert!(find(abbr).name_word, "{abbr} should be a name word");
        }
        assert!(!find("St").name_word);
        assert!(!find("Ave").name_word);
        assert!(!find("Roadway").name_word);
    }

    #[test]
    fn spelled_out_entries_come_last() {
        let tail: Vec<&str> = STREET_TYPES[STREET_TYPES.len() - 2..]
            .iter()
            .map(|t| t.abbr)
            .collect();
        assert_eq!(tail, vec!["Parkway", "Roadway"]);
        assert_eq!(STREET_TYPES.len(), 36);
    }

    #[test]
    fn abbreviations_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in STREET_TYPES {
            assert!(seen.insert(t.abbr.to_ascii_lowercase()), "duplicate {}", t.abbr);
        }
    }

    #[test]
    fn no_abbreviation_is_a_direction() {
        for t in STREET_TYPES {
            assert!(
                crate::dictionaries::directions::Direction::parse(t.abbr).is_none(),
                "{} collides with a direction",
                t.abbr
            );
        }
    }
}
