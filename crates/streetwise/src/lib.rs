//! Library interface for the `streetwise` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`console`] - Line-oriented prompts used by `menu` and `quiz`

pub mod commands;
pub mod console;

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                    Log filter (e.g., debug, streetwise=trace)
    STREETWISE_LOG_PATH         Explicit log file path
    STREETWISE_LOG_DIR          Log directory
    STREETWISE_SOURCE           Street listing to read
    STREETWISE_MAX_PAGES        Read at most this many listing pages
    STREETWISE_QUIZ__QUESTIONS  Default number of quiz questions
";

/// Command-line interface definition for streetwise.
#[derive(Parser)]
#[command(name = "streetwise")]
#[command(about = "Look up and quiz yourself on street names and street types", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Street listing to read, text or PDF (overrides config)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub source: Option<Utf8PathBuf>,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu: street lookup, type lookup, quiz
    Menu(commands::menu::MenuArgs),

    /// Look up the type of a street, or streets of a type
    Lookup(commands::lookup::LookupArgs),

    /// Take a street quiz
    Quiz(commands::quiz::QuizArgs),

    /// Print the streets extracted from the listing
    Extract(commands::extract::ExtractArgs),

    /// List recognized street types with street counts
    Types(commands::types::TypesArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
