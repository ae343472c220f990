//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use streetwise_core::config::{Config, ConfigSources};
use streetwise_core::{ChoiceCount, FormatChoice, KindChoice};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    pdf_support: bool,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
            pdf_support: cfg!(feature = "pdf"),
        }
    }
}

#[derive(Serialize)]
struct QuizInfo {
    questions: usize,
    kind: KindChoice,
    format: FormatChoice,
    choices: ChoiceCount,
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup_count: Option<usize>,
    quiz: QuizInfo,
    street_types: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra_types: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources, source: Option<&str>) -> Self {
        let extra_types = config
            .extra_types
            .iter()
            .flatten()
            .map(|t| t.abbr.clone())
            .collect();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            source: source.map(str::to_string),
            max_pages: config.max_pages,
            input_limit: config.input_limit(),
            lookup_count: config.lookup_count,
            quiz: QuizInfo {
                questions: config.quiz.questions,
                kind: config.quiz.kind,
                format: config.quiz.format,
                choices: config.quiz.choices,
            },
            street_types: config.vocabulary().len(),
            extra_types,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `source` - Listing path after `--source` is applied
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    source: Option<&str>,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources, source),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    println!(
        "{}: {}",
        "PDF support".dimmed(),
        if package.pdf_support { "yes" } else { "no" }
    );

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }

    println!();
    println!("{}", "Listing".bold().underline());
    print_opt("Source", &cfg.source);
    print_opt("Max pages", &cfg.max_pages);
    match cfg.input_limit {
        Some(limit) => println!("{}: {} bytes", "Input limit".dimmed(), limit),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    println!("{}: {}", "Street types".dimmed(), cfg.street_types);
    if !cfg.extra_types.is_empty() {
        println!("{}: {}", "Extra types".dimmed(), cfg.extra_types.join(", "));
    }

    println!();
    println!("{}", "Lookup & Quiz".bold().underline());
    print_opt("Lookup count", &cfg.lookup_count);
    println!(
        "{}: {} questions, {:?} kind, {:?} format, {} choices",
        "Quiz".dimmed(),
        cfg.quiz.questions,
        cfg.quiz.kind,
        cfg.quiz.format,
        cfg.quiz.choices
    );

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
