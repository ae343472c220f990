//! Extract command: print the streets parsed from the listing.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use streetwise_core::{Extraction, Street, Unparsed};
use tracing::{debug, instrument};

use super::Listing;

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Print each distinct street once, sorted by name.
    #[arg(long)]
    pub distinct: bool,

    /// Also print the lines that did not parse.
    #[arg(long)]
    pub unparsed: bool,
}

#[derive(Serialize)]
struct ExtractReport<'a> {
    pages: usize,
    lines: usize,
    furniture: usize,
    streets: Vec<&'a Street>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unparsed: Option<&'a [Unparsed]>,
}

impl<'a> ExtractReport<'a> {
    fn new(listing: &'a Listing, args: &ExtractArgs) -> Self {
        let Extraction {
            pages,
            lines,
            furniture,
            ..
        } = listing.extraction;
        let streets = if args.distinct {
            listing.directory.streets().iter().collect()
        } else {
            listing.extraction.streets.iter().collect()
        };
        Self {
            pages,
            lines,
            furniture,
            streets,
            unparsed: args
                .unparsed
                .then_some(listing.extraction.unparsed.as_slice()),
        }
    }
}

/// Print the extracted streets.
#[instrument(name = "cmd_extract", skip_all)]
pub fn cmd_extract(args: ExtractArgs, global_json: bool, listing: &Listing) -> anyhow::Result<()> {
    debug!(distinct = args.distinct, unparsed = args.unparsed, "executing extract command");
    let report = ExtractReport::new(listing, &args);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let width = report
        .streets
        .iter()
        .map(|s| s.full_name().len())
        .max()
        .unwrap_or(0);
    for street in &report.streets {
        let page = street.page().map_or_else(String::new, |p| format!("p{p}"));
        let limits = match (street.from(), street.to()) {
            (Some(from), Some(to)) => format!("{from} to {to}"),
            (Some(from), None) => from.to_string(),
            _ => String::new(),
        };
        let line = format!("{page:>4}  {:<width$}  {limits}", street.full_name());
        println!("{}", line.trim_end());
    }

    if let Some(unparsed) = report.unparsed {
        println!();
        println!(
            "{}",
            "Lines without a street type".if_supports_color(Stream::Stdout, |t| t.bold())
        );
        for u in unparsed {
            println!("  p{} l{}: {}", u.page, u.line, u.text);
        }
    }

    println!(
        "\n{} streets from {} pages ({} lines, {} unparsed)",
        report.streets.len(),
        report.pages,
        report.lines,
        listing.extraction.unparsed.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetwise_core::{Directory, Vocabulary};

    fn listing() -> Listing {
        let streets = vec![
            Street::new("Yonge", "St").on_page(1),
            Street::new("Bay", "St").on_page(1),
            Street::new("Yonge", "St").on_page(2),
        ];
        Listing {
            directory: Directory::new(streets.clone()),
            extraction: Extraction {
                streets,
                pages: 2,
                lines: 4,
                furniture: 0,
                unparsed: vec![Unparsed {
                    page: 2,
                    line: 2,
                    text: "The Kingsway".into(),
                }],
            },
            vocab: Vocabulary::builtin(),
        }
    }

    #[test]
    fn report_lists_every_street_by_default() {
        let listing = listing();
        let report = ExtractReport::new(&listing, &ExtractArgs::default());
        assert_eq!(report.streets.len(), 3);
        assert!(report.unparsed.is_none());
    }

    #[test]
    fn distinct_report_uses_the_directory() {
        let listing = listing();
        let args = ExtractArgs {
            distinct: true,
            unparsed: true,
        };
        let report = ExtractReport::new(&listing, &args);
        let names: Vec<String> = report.streets.iter().map(|s| s.full_name()).collect();
        assert_eq!(names, vec!["Bay St", "Yonge St"]);
        assert_eq!(report.unparsed.map(<[Unparsed]>::len), Some(1));
    }

    #[test]
    fn cmd_extract_succeeds() {
        assert!(cmd_extract(ExtractArgs::default(), false, &listing()).is_ok());
        assert!(cmd_extract(ExtractArgs::default(), true, &listing()).is_ok());
    }
}
