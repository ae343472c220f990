//! Quiz command: an interactive street quiz on stdin/stdout.

use std::io::{BufRead, Write};

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use streetwise_core::quiz::Summary;
use streetwise_core::{ChoiceCount, FormatChoice, KindChoice, Quiz, QuizError, QuizSettings};
use tracing::{debug, instrument};

use super::Listing;
use crate::console::{Console, Reply};

/// Arguments for the `quiz` subcommand.
#[derive(Args, Debug, Default)]
pub struct QuizArgs {
    /// Number of questions.
    #[arg(short = 'n', long)]
    pub questions: Option<usize>,

    /// Question kinds: name a street of a type, name the type of a street, or both.
    #[arg(short, long, value_enum)]
    pub kind: Option<KindChoice>,

    /// Answer format: free response, multiple choice, or both.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatChoice>,

    /// Candidates per multiple-choice question: a count ("4") or a range
    /// drawn per question ("2-6").
    #[arg(long)]
    pub choices: Option<ChoiceCount>,

    /// Seed for reproducible quizzes.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl QuizArgs {
    /// Apply the flags over configured defaults.
    pub fn settings(&self, defaults: QuizSettings) -> QuizSettings {
        QuizSettings {
            questions: self.questions.unwrap_or(defaults.questions),
            kind: self.kind.unwrap_or(defaults.kind),
            format: self.format.unwrap_or(defaults.format),
            choices: self.choices.unwrap_or(defaults.choices),
        }
    }
}

/// How a quiz run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRun {
    /// Totals at the end of the run.
    pub summary: Summary,
    /// The user typed `quit` or closed the input.
    pub quit: bool,
}

/// Ask every question in turn, printing the running score.
///
/// Stops early on `exit` or `quit`; returns the totals so far.
pub fn run_quiz<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    quiz: &mut Quiz<'_>,
) -> std::io::Result<QuizRun> {
    let mut quit = false;
    let total = quiz.len();
    for index in 0..total {
        let question = quiz.questions()[index].clone();
        console.say(format!(
            "\nQuestion {} of {total}: {}",
            index + 1,
            question.prompt()
        ))?;
        for (n, choice) in question.choices().iter().enumerate() {
            console.say(format!("  {}) {choice}", n + 1))?;
        }

        let outcome = console.prompt_until("Answer:", |response| {
            quiz.answer(index, response).map_err(|err| match err {
                QuizError::InvalidResponse(r) if r.is_empty() => "Please enter an answer.".into(),
                QuizError::InvalidResponse(_) => format!(
                    "Enter a number from 1 to {} or one of the choices.",
                    question.choices().len()
                ),
                other => other.to_string(),
            })
        })?;
        let outcome = match outcome {
            Reply::Answer(outcome) => outcome,
            Reply::Back => {
                debug!(answered = quiz.answered(), "quiz left early");
                break;
            }
            Reply::Quit => {
                debug!(answered = quiz.answered(), "quit during quiz");
                quit = true;
                break;
            }
        };

        if outcome.correct {
            console.say("Correct!".if_supports_color(Stream::Stdout, |t| t.green()))?;
        } else {
            console.say(format!(
                "{} The answer is {}.",
                "Wrong.".if_supports_color(Stream::Stdout, |t| t.red()),
                outcome.expected
            ))?;
        }
        console.say(format!("Score: {}", quiz.summary()))?;
    }

    let summary = quiz.summary();
    console.say(format!(
        "\nFinal score: {}/{} ({} of {} questions answered)",
        summary.score, summary.answered, summary.answered, summary.total
    ))?;
    Ok(QuizRun { summary, quit })
}

/// Run an interactive quiz.
#[instrument(name = "cmd_quiz", skip_all)]
pub fn cmd_quiz(
    args: QuizArgs,
    global_json: bool,
    listing: &Listing,
    defaults: QuizSettings,
) -> anyhow::Result<()> {
    let settings = args.settings(defaults);
    debug!(?settings, seed = ?args.seed, "executing quiz command");

    let mut rng = super::rng(args.seed);
    let mut quiz = Quiz::generate(&listing.directory, &listing.vocab, settings, &mut rng)?;

    let mut console = Console::stdio();
    let run = run_quiz(&mut console, &mut quiz)?;
    if global_json {
        println!("{}", serde_json::to_string_pretty(&run.summary)?);
    }
    Ok(())
}
