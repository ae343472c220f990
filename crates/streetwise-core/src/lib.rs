//! Core library for streetwise.
//!
//! Extracts street names and street types from a paged street listing and
//! answers questions about them.
//!
//! # Modules
//!
//! - [`source`] - Loading listings (text or PDF) as pages
//! - [`parse`] - Splitting a listing line into name, type and end-points
//! - [`extract`] - Running the parser over every page
//! - [`directory`] - Lookups over the extracted streets
//! - [`quiz`] - Quiz generation and scoring
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use streetwise_core::{Directory, Source, Vocabulary, extract};
//!
//! let vocab = Vocabulary::builtin();
//! let source = Source::load(Utf8Path::new("streets.txt"), None).expect("listing");
//! let directory = Directory::new(extract(&source, &vocab).streets);
//!
//! for street in directory.type_of("Bloor", &vocab).unwrap_or_default() {
//!     println!("{street}");
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod directory;
pub mod error;
pub mod extract;
pub mod parse;
pub mod quiz;
pub mod source;
pub mod street;
pub mod text;
pub mod vocabulary;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionaries::directions::Direction;
pub use directory::{Directory, TypeCount};
pub use error::{
    ConfigError, ConfigResult, LookupError, LookupResult, QuizError, QuizResult, SourceError,
    SourceResult,
};
pub use extract::{Extraction, Extractor, Unparsed, extract};
pub use parse::parse_street;
pub use quiz::{
    ChoiceCount, FormatChoice, KindChoice, Outcome, Question, QuestionKind, Quiz, QuizSettings,
};
pub use source::Source;
pub use street::Street;
pub use vocabulary::{StreetType, Vocabulary};

/// Default listing size limit: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
