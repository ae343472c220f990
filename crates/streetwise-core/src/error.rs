//! Error types for streetwise-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a street listing.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The listing file does not exist.
    #[error("street listing not found: {path}")]
    NotFound {
        /// Path that was tried.
        path: Utf8PathBuf,
    },

    /// The listing file exceeds the configured size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Path of the listing.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// Reading the listing failed.
    #[error("failed to read {path}")]
    Io {
        /// Path of the listing.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Text extraction from a PDF failed.
    #[error("failed to extract text from {path}: {reason}")]
    Pdf {
        /// Path of the listing.
        path: Utf8PathBuf,
        /// Extractor message.
        reason: String,
    },

    /// PDF input was given but PDF support is not compiled in.
    #[error("{path} is a PDF but streetwise was built without the `pdf` feature")]
    PdfUnsupported {
        /// Path of the listing.
        path: Utf8PathBuf,
    },

    /// The listing contains no text.
    #[error("street listing is empty: {path}")]
    Empty {
        /// Path of the listing.
        path: Utf8PathBuf,
    },
}

/// Result type alias using [`SourceError`].
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur during street and type lookups.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No street matches the query.
    #[error("unknown street: {0}")]
    UnknownStreet(String),

    /// The query is not a recognized street type.
    #[error("unknown street type: {0}")]
    UnknownType(String),

    /// A count of zero streets was requested.
    #[error("count must be at least 1")]
    ZeroCount,
}

/// Result type alias using [`LookupError`].
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while generating or answering a quiz.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    /// The directory cannot supply the requested questions.
    #[error("not enough street data for a quiz: {0}")]
    NotEnoughData(String),

    /// Multiple choice needs at least two candidates.
    #[error("multiple choice needs at least 2 choices (got {0})")]
    TooFewChoices(usize),

    /// A quiz with zero questions was requested.
    #[error("a quiz needs at least 1 question")]
    NoQuestions,

    /// The response is neither a choice number nor a choice text.
    #[error("not one of the choices: {0}")]
    InvalidResponse(String),

    /// The question index is out of range.
    #[error("no question #{0}")]
    NoSuchQuestion(usize),

    /// The question was already answered.
    #[error("question #{0} was already answered")]
    AlreadyAnswered(usize),
}

/// Result type alias using [`QuizError`].
pub type QuizResult<T> = Result<T, QuizError>;
