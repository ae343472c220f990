//! Command implementations.

use std::io::IsTerminal;

use anyhow::Context;
use camino::Utf8PathBuf;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use streetwise_core::{Directory, Extraction, Extractor, Source, Vocabulary};

pub mod extract;
pub mod info;
pub mod lookup;
pub mod menu;
pub mod quiz;
pub mod types;

/// How to find and read the street listing.
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Listing file, from `--source` or config.
    pub path: Option<Utf8PathBuf>,
    /// Page limit.
    pub max_pages: Option<usize>,
    /// File size limit; `None` disables the check.
    pub max_bytes: Option<usize>,
    /// Show a progress bar over pages.
    pub progress: bool,
}

impl ListingOptions {
    /// Whether a progress bar should be drawn for this run.
    pub fn wants_progress(quiet: bool, json: bool) -> bool {
        !quiet && !json && std::io::stderr().is_terminal()
    }
}

/// A loaded listing: extraction details plus the directory built from it.
#[derive(Debug)]
pub struct Listing {
    /// The street vocabulary used.
    pub vocab: Vocabulary,
    /// Extraction details.
    pub extraction: Extraction,
    /// Distinct streets for lookups and quizzes.
    pub directory: Directory,
}

/// Load the listing, extract its streets and build the directory.
pub fn load_listing(options: &ListingOptions, vocab: Vocabulary) -> anyhow::Result<Listing> {
    let path = options.path.as_deref().context(
        "no street listing given; pass --source FILE or set `source` in the configuration",
    )?;
    let source = Source::load(path, options.max_bytes)
        .with_context(|| format!("failed to load street listing {path}"))?
        .with_page_limit(options.max_pages);

    let bar = if options.progress {
        let bar = ProgressBar::new(source.page_count() as u64);
        bar.set_style(
            ProgressStyle::with_template("{msg} {wide_bar:.cyan/dim} {pos}/{len} pages")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        bar.set_message("Reading streets");
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut extractor = Extractor::new(&vocab);
    for (idx, page) in source.pages().iter().enumerate() {
        extractor.extract_page(idx + 1, page);
        bar.inc(1);
    }
    bar.finish_and_clear();
    let extraction = extractor.finish();

    if extraction.streets.is_empty() {
        tracing::warn!(path = %path, "no streets found in listing");
    }
    let directory = Directory::new(extraction.streets.iter().cloned());
    Ok(Listing {
        vocab,
        extraction,
        directory,
    })
}

/// Random source for sampling; seeded runs are reproducible.
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
