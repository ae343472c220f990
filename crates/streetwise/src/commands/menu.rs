//! Menu command: the interactive street lookup and quiz loop.

use std::io::{BufRead, Write};

use clap::Args;
use rand::Rng;
use streetwise_core::{Quiz, QuizSettings};
use tracing::{debug, instrument};

use super::Listing;
use super::lookup::describe_street;
use super::quiz::run_quiz;
use crate::console::{Console, Reply};

/// Arguments for the `menu` subcommand.
#[derive(Args, Debug, Default)]
pub struct MenuArgs {
    /// Seed for type lookups and quizzes.
    #[arg(long)]
    pub seed: Option<u64>,
}

const MENU: &str = "\
1) What type is a street?
2) Which streets have a type?
3) Take a quiz
4) Quit";

/// Defaults the menu falls back on when the user just presses enter.
#[derive(Debug, Clone, Copy)]
pub struct MenuDefaults {
    /// Streets listed by a type lookup.
    pub lookup_count: usize,
    /// Quiz settings; only the question count is asked for.
    pub quiz: QuizSettings,
}

/// Run the menu loop until the user quits.
///
/// `exit` at any sub-prompt returns here; `quit` ends the session.
pub fn run_menu<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    listing: &Listing,
    defaults: MenuDefaults,
    rng: &mut G,
) -> anyhow::Result<()> {
    console.say(format!(
        "{} streets loaded. Type \"exit\" to return to this menu or \"quit\" to leave.",
        listing.directory.len()
    ))?;

    loop {
        console.say(format!("\n{MENU}"))?;
        let choice = console.prompt_until("Choose 1-4:", |s| match s {
            "1" | "2" | "3" | "4" => Ok(s.to_string()),
            _ => Err(format!("Please choose 1, 2, 3 or 4 (not {s:?}).")),
        })?;
        debug!(choice = ?choice, "menu choice");

        let keep_going = match choice {
            Reply::Answer(choice) => match choice.as_str() {
                "1" => street_lookup(console, listing)?,
                "2" => type_lookup(console, listing, defaults.lookup_count, rng)?,
                "3" => take_quiz(console, listing, defaults.quiz, rng)?,
                _ => false,
            },
            Reply::Back | Reply::Quit => false,
        };
        if !keep_going {
            break;
        }
    }

    console.say("Goodbye.")?;
    Ok(())
}

/// Look up street names until the user types `exit`.
///
/// Returns `false` when the user quit the session.
fn street_lookup<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    listing: &Listing,
) -> anyhow::Result<bool> {
    loop {
        let name = match console.prompt("Street name:")? {
            Reply::Answer(name) => name,
            Reply::Back => return Ok(true),
            Reply::Quit => return Ok(false),
        };
        if name.is_empty() {
            continue;
        }
        match listing.directory.type_of(&name, &listing.vocab) {
            Ok(found) => {
                for street in found {
                    console.say(describe_street(street, &listing.vocab))?;
                }
            }
            Err(err) => {
                debug!(input = %name, error = %err, "street lookup failed");
                console.complain(format!("{err}. Try a name like \"Yonge\" or \"Bloor St W\"."))?;
            }
        }
    }
}

fn type_lookup<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    listing: &Listing,
    default_count: usize,
    rng: &mut G,
) -> anyhow::Result<bool> {
    let vocab = &listing.vocab;
    let ty = match console.prompt_until("Street type:", |t| {
        vocab
            .resolve(t)
            .ok_or_else(|| format!("unknown street type: {t}. Try \"Ave\" or \"Road\"."))
    })? {
        Reply::Answer(ty) => ty,
        Reply::Back => return Ok(true),
        Reply::Quit => return Ok(false),
    };

    let count = match console.prompt_until(
        &format!("How many streets? [{default_count}]:"),
        |s| parse_count(s, default_count),
    )? {
        Reply::Answer(count) => count,
        Reply::Back => return Ok(true),
        Reply::Quit => return Ok(false),
    };

    let streets = listing
        .directory
        .streets_of_type(&ty.abbr, count, rng, vocab)?;
    if streets.is_empty() {
        console.say(format!(
            "No streets of type {} ({}) in the listing.",
            ty.abbr,
            ty.long()
        ))?;
    }
    for street in streets {
        console.say(format!("  {}", street.full_name()))?;
    }
    Ok(true)
}

fn take_quiz<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    listing: &Listing,
    settings: QuizSettings,
    rng: &mut G,
) -> anyhow::Result<bool> {
    let questions = match console.prompt_until(
        &format!("How many questions? [{}]:", settings.questions),
        |s| parse_count(s, settings.questions),
    )? {
        Reply::Answer(questions) => questions,
        Reply::Back => return Ok(true),
        Reply::Quit => return Ok(false),
    };

    let settings = QuizSettings {
        questions,
        ..settings
    };
    match Quiz::generate(&listing.directory, &listing.vocab, settings, rng) {
        Ok(mut quiz) => Ok(!run_quiz(console, &mut quiz)?.quit),
        Err(err) => {
            console.complain(format!("Cannot build a quiz: {err}"))?;
            Ok(true)
        }
    }
}

fn parse_count(input: &str, default: usize) -> Result<usize, String> {
    if input.is_empty() {
        return Ok(default);
    }
    match input.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("Please enter a whole number of at least 1 (not {input:?}).")),
        Ok(n) => Ok(n),
    }
}

/// Run the interactive menu on stdin/stdout.
#[instrument(name = "cmd_menu", skip_all)]
pub fn cmd_menu(args: MenuArgs, listing: &Listing, defaults: MenuDefaults) -> anyhow::Result<()> {
    debug!(seed = ?args.seed, "executing menu command");
    let mut rng = super::rng(args.seed);
    let mut console = Console::stdio();
    run_menu(&mut console, listing, defaults, &mut rng)
}
