//! Line-oriented console prompts.
//!
//! Generic over [`BufRead`] and [`Write`] so interactive commands run the
//! same against a terminal or scripted input. Typing `exit` at a prompt goes
//! back one level; `quit`, or closing the input, ends the session.

use std::io::{self, BufRead, Write};

use owo_colors::{OwoColorize, Stream};

const BACK_WORD: &str = "exit";
const QUIT_WORD: &str = "quit";

/// What the user typed at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T = String> {
    /// An accepted answer; a trimmed line for [`Console::prompt`].
    Answer(T),
    /// `exit`: leave the current prompt.
    Back,
    /// `quit` or end of input: leave the session.
    Quit,
}

/// Prompting console over an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print an input problem, to be followed by a re-prompt.
    pub fn complain(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        let message = message.to_string();
        writeln!(
            self.output,
            "{}",
            message.if_supports_color(Stream::Stdout, |m| m.yellow())
        )
    }

    /// Show `text` and read one line.
    pub fn prompt(&mut self, text: &str) -> io::Result<Reply> {
        write!(self.output, "{} ", text.if_supports_color(Stream::Stdout, |t| t.bold()))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Reply::Quit);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case(BACK_WORD) {
            Ok(Reply::Back)
        } else if line.eq_ignore_ascii_case(QUIT_WORD) {
            Ok(Reply::Quit)
        } else {
            Ok(Reply::Answer(line.to_string()))
        }
    }

    /// Prompt until `parse` accepts the input.
    ///
    /// Rejected input is reported with the parser's message and the prompt
    /// repeats. `exit` and `quit` pass through as [`Reply::Back`] and
    /// [`Reply::Quit`].
    pub fn prompt_until<T>(
        &mut self,
        text: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> io::Result<Reply<T>> {
        loop {
            let line = match self.prompt(text)? {
                Reply::Answer(line) => line,
                Reply::Back => return Ok(Reply::Back),
                Reply::Quit => return Ok(Reply::Quit),
            };
            match parse(&line) {
                Ok(value) => return Ok(Reply::Answer(value)),
                Err(message) => {
                    tracing::debug!(input = %line, %message, "input rejected");
                    self.complain(message)?;
                }
            }
        }
    }
}
