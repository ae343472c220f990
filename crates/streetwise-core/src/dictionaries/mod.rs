//! Dictionaries for street parsing.
//!
//! Provides the built-in street-type suffix table and the direction
//! qualifiers recognized after a street type.

pub mod directions;
pub mod street_types;
