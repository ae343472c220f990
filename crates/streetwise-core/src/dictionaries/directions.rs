//! Compass direction qualifiers ("Bloor St W").

use serde::{Deserialize, Serialize};

/// Direction qualifier trailing a street type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Direction {
    /// N
    #[serde(rename = "N")]
    North,
    /// S
    #[serde(rename = "S")]
    South,
    /// E
    #[serde(rename = "E")]
    East,
    /// W
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Parse a direction token.
    ///
    /// Accepts the single letters (with or without a trailing period) and the
    /// spelled-out words, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim_end_matches('.');
        let dir = match token.to_ascii_lowercase().as_str() {
            "n" | "north" => Self::North,
            "s" | "south" => Self::South,
            "e" | "east" => Self::East,
            "w" | "west" => Self::West,
            _ => return None,
        };
        Some(dir)
    }

    /// The one-letter form used in listings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
