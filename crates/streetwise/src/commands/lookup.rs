//! Lookup command: the type of a street, or streets of a type.

use clap::{Args, Subcommand};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use streetwise_core::{Street, Vocabulary};
use tracing::{debug, instrument};

use super::Listing;

/// Streets listed by a type lookup when neither flag nor config says.
pub const DEFAULT_LOOKUP_COUNT: usize = 5;

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// What to look up.
    #[command(subcommand)]
    pub target: LookupTarget,
}

/// Lookup targets.
#[derive(Subcommand, Debug)]
pub enum LookupTarget {
    /// What type is a street? (e.g. `lookup street Bloor W`)
    Street {
        /// Street name: full ("Bloor St W"), with direction ("Bloor W"), or base ("Bloor").
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Which streets have a type? (e.g. `lookup type Ave -n 3`)
    Type {
        /// Street type, abbreviated or spelled out ("Ave", "Avenue").
        street_type: String,

        /// Number of streets to show.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for choosing which streets to show.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct TypeReport<'a> {
    #[serde(rename = "type")]
    street_type: &'a str,
    long: &'a str,
    streets: Vec<&'a Street>,
}

/// One line describing a street's type: `Bloor St W: St (Street)`.
pub fn describe_street(street: &Street, vocab: &Vocabulary) -> String {
    let long = vocab
        .resolve(street.street_type())
        .map_or(street.street_type(), |t| t.long());
    format!(
        "{}: {} ({long})",
        street.full_name(),
        street.street_type().if_supports_color(Stream::Stdout, |t| t.green())
    )
}

/// Run a lookup.
#[instrument(name = "cmd_lookup", skip_all)]
pub fn cmd_lookup(
    args: LookupArgs,
    global_json: bool,
    listing: &Listing,
    config_count: Option<usize>,
) -> anyhow::Result<()> {
    let Listing {
        vocab, directory, ..
    } = listing;

    match args.target {
        LookupTarget::Street { name } => {
            let name = name.join(" ");
            debug!(name = %name, "looking up street");
            let found = directory.type_of(&name, vocab)?;
            if global_json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                for street in found {
                    println!("{}", describe_street(street, vocab));
                }
            }
        }
        LookupTarget::Type {
            street_type,
            count,
            seed,
        } => {
            let count = count.or(config_count).unwrap_or(DEFAULT_LOOKUP_COUNT);
            debug!(street_type = %street_type, count, ?seed, "looking up type");
            let mut rng = super::rng(seed);
            let streets = directory.streets_of_type(&street_type, count, &mut rng, vocab)?;
            let ty = vocab.resolve(&street_type);
            let report = TypeReport {
                street_type: ty.map_or(street_type.as_str(), |t| t.abbr.as_str()),
                long: ty.map_or(street_type.as_str(), |t| t.long()),
                streets,
            };

            if global_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_type_report(&report);
            }
        }
    }
    Ok(())
}

fn print_type_report(report: &TypeReport<'_>) {
    if report.streets.is_empty() {
        println!(
            "No streets of type {} ({}) in the listing.",
            report.street_type, report.long
        );
        return;
    }
    println!(
        "{}",
        format!("{} ({})", report.street_type, report.long)
            .if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for street in &report.streets {
        println!("  {}", street.full_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetwise_core::{Directory, Extraction};

    fn listing() -> Listing {
        let vocab = Vocabulary::builtin();
        let streets = vec![
            Street::new("Yonge", "St"),
            Street::new("Spadina", "Ave"),
            Street::new("Spadina", "Rd"),
        ];
        Listing {
            directory: Directory::new(streets.clone()),
            extraction: Extraction {
                streets,
                ..Extraction::default()
            },
            vocab,
        }
    }

    #[test]
    fn describe_street_names_the_long_form() {
        owo_colors::set_override(false);
        let vocab = Vocabulary::builtin();
        let line = describe_street(&Street::new("Spadina", "Ave"), &vocab);
        assert_eq!(line, "Spadina Ave: Ave (Avenue)");
    }

    #[test]
    fn street_lookup_succeeds_for_known_street() {
        let args = LookupArgs {
            target: LookupTarget::Street {
                name: vec!["Spadina".into()],
            },
        };
        assert!(cmd_lookup(args, true, &listing(), None).is_ok());
    }

    #[test]
    fn street_lookup_fails_for_unknown_street() {
        let args = LookupArgs {
            target: LookupTarget::Street {
                name: vec!["Dundas".into()],
            },
        };
        let err = cmd_lookup(args, false, &listing(), None).unwrap_err();
        assert!(err.to_string().contains("unknown street"));
    }

    #[test]
    fn type_lookup_fails_for_zero_count() {
        let args = LookupArgs {
            target: LookupTarget::Type {
                street_type: "St".into(),
                count: Some(0),
                seed: Some(1),
            },
        };
        assert!(cmd_lookup(args, false, &listing(), None).is_err());
    }
}
