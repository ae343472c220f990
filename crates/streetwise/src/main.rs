//! streetwise CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use streetwise::commands::{self, ListingOptions, menu::MenuDefaults};
use streetwise::{Cli, Commands};
use streetwise_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        source = ?cli.source,
        "CLI initialized"
    );

    let listing_options = ListingOptions {
        path: cli.source.or_else(|| config.source.clone()),
        max_pages: config.max_pages,
        max_bytes: config.input_limit(),
        progress: ListingOptions::wants_progress(cli.quiet, cli.json),
    };
    let load = || commands::load_listing(&listing_options, config.vocabulary());

    let result = match command {
        Commands::Menu(args) => load().and_then(|listing| {
            let defaults = MenuDefaults {
                lookup_count: config
                    .lookup_count
                    .unwrap_or(commands::lookup::DEFAULT_LOOKUP_COUNT),
                quiz: config.quiz,
            };
            commands::menu::cmd_menu(args, &listing, defaults)
        }),
        Commands::Lookup(args) => load().and_then(|listing| {
            commands::lookup::cmd_lookup(args, cli.json, &listing, config.lookup_count)
        }),
        Commands::Quiz(args) => load()
            .and_then(|listing| commands::quiz::cmd_quiz(args, cli.json, &listing, config.quiz)),
        Commands::Extract(args) => {
            load().and_then(|listing| commands::extract::cmd_extract(args, cli.json, &listing))
        }
        Commands::Types(args) => {
            load().and_then(|listing| commands::types::cmd_types(args, cli.json, &listing))
        }
        Commands::Info(args) => commands::info::cmd_info(
            args,
            cli.json,
            &config,
            &config_sources,
            listing_options.path.as_ref().map(|p| p.as_str()),
        ),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
