//! Types command: the street-type vocabulary with per-type counts.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use streetwise_core::TypeCount;
use tracing::{debug, instrument};

use super::Listing;

/// Arguments for the `types` subcommand.
#[derive(Args, Debug, Default)]
pub struct TypesArgs {
    /// Only list types that occur in the listing.
    #[arg(long)]
    pub present: bool,
}

fn selected(listing: &Listing, present: bool) -> Vec<TypeCount> {
    listing
        .directory
        .type_counts(&listing.vocab)
        .into_iter()
        .filter(|c| !present || c.count > 0)
        .collect()
}

/// List street types.
#[instrument(name = "cmd_types", skip_all)]
pub fn cmd_types(args: TypesArgs, global_json: bool, listing: &Listing) -> anyhow::Result<()> {
    debug!(present = args.present, "executing types command");
    let counts = selected(listing, args.present);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    for c in &counts {
        let abbr = format!("{:<6}", c.abbr);
        println!(
            "{} {:<12} {:>5}",
            abbr.if_supports_color(Stream::Stdout, |t| t.cyan()),
            c.long,
            c.count
        );
    }
    Ok(())
}
