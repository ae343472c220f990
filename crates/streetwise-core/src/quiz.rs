//! Street quiz: question generation and scoring.
//!
//! Two kinds of question are asked:
//!
//! - **street**: "Which of the following streets is of type Ave?" (answer: a
//!   street name)
//! - **type**: "Which street type is Bloor W?" (answer: a street type)
//!
//! Either kind can be free response or multiple choice. Multiple-choice
//! candidates are shuffled once at generation time and keep that order.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::directory::Directory;
use crate::error::{QuizError, QuizResult};
use crate::street::Street;
use crate::text::normalize_key;
use crate::vocabulary::Vocabulary;

/// What a question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Given a type, name a street of that type.
    Street,
    /// Given a street, name its type.
    Type,
}

/// Which question kinds a quiz draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KindChoice {
    /// Only street questions.
    Street,
    /// Only type questions.
    Type,
    /// A random mix of both.
    #[default]
    Mixed,
}

/// Which answer formats a quiz draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum FormatChoice {
    /// Free response only.
    Free,
    /// Multiple choice only.
    Choice,
    /// A random mix of both.
    #[default]
    Mixed,
}

/// Candidates per multiple-choice question.
///
/// Either a fixed count (`4`) or an inclusive range (`"2-6"`) drawn from
/// afresh for every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceCount {
    min: usize,
    max: usize,
}

impl ChoiceCount {
    /// Every question offers `n` candidates.
    pub const fn fixed(n: usize) -> Self {
        Self { min: n, max: n }
    }

    /// Each question offers between `min` and `max` candidates.
    pub fn range(min: usize, max: usize) -> Result<Self, String> {
        if min > max {
            return Err(format!("choice range {min}-{max} is empty"));
        }
        Ok(Self { min, max })
    }

    /// Smallest candidate count.
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Largest candidate count.
    pub const fn max(&self) -> usize {
        self.max
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

impl Default for ChoiceCount {
    fn default() -> Self {
        Self { min: 2, max: 6 }
    }
}

impl fmt::Display for ChoiceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

impl FromStr for ChoiceCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid choice count {s:?}: expected N or MIN-MAX"))
        };
        match s.split_once('-') {
            Some((min, max)) => Self::range(parse(min)?, parse(max)?),
            None => parse(s).map(Self::fixed),
        }
    }
}

impl Serialize for ChoiceCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.min == self.max {
            serializer.serialize_u64(self.min as u64)
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for ChoiceCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Self::fixed(n)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Quiz generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Number of questions.
    pub questions: usize,
    /// Question kinds to ask.
    pub kind: KindChoice,
    /// Answer formats to use.
    pub format: FormatChoice,
    /// Candidates per multiple-choice question.
    pub choices: ChoiceCount,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions: 10,
            kind: KindChoice::Mixed,
            format: FormatChoice::Mixed,
            choices: ChoiceCount::default(),
        }
    }
}

/// One quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    kind: QuestionKind,
    target: String,
    expected: String,
    accepted: Vec<String>,
    choices: Vec<String>,
}

impl Question {
    /// What the question asks for.
    pub const fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// The street type or street name the question is about.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The answer the question was built around.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Multiple-choice candidates; empty for free response.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Whether the question is multiple choice.
    pub fn is_multiple_choice(&self) -> bool {
        !self.choices.is_empty()
    }

    /// The question text.
    pub fn prompt(&self) -> String {
        match self.kind {
            QuestionKind::Street if self.is_multiple_choice() => {
                format!("Which of the following streets is of type {}?", self.target)
            }
            QuestionKind::Street => format!("Name a street of type {}.", self.target),
            QuestionKind::Type => format!("Which street type is {}?", self.target),
        }
    }

    /// Every answer that scores, joined for display.
    pub fn answer_text(&self) -> String {
        match self.kind {
            QuestionKind::Street => self.expected.clone(),
            QuestionKind::Type => self.accepted.join(" or "),
        }
    }
}

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether the answer scored.
    pub correct: bool,
    /// The answer as understood (a choice text for multiple choice).
    pub given: String,
    /// The correct answer(s), for display.
    pub expected: String,
}

/// Running quiz totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Correct answers so far.
    pub score: usize,
    /// Questions answered so far.
    pub answered: usize,
    /// Questions in the quiz.
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.answered)
    }
}

/// A generated quiz with its running score.
#[derive(Debug, Clone)]
pub struct Quiz<'a> {
    directory: &'a Directory,
    vocab: &'a Vocabulary,
    questions: Vec<Question>,
    results: Vec<Option<bool>>,
    score: usize,
}

impl<'a> Quiz<'a> {
    /// Generate a quiz over `directory`.
    #[tracing::instrument(skip(directory, vocab, rng))]
    pub fn generate<R: Rng + ?Sized>(
        directory: &'a Directory,
        vocab: &'a Vocabulary,
        settings: QuizSettings,
        rng: &mut R,
    ) -> QuizResult<Self> {
        if settings.questions == 0 {
            return Err(QuizError::NoQuestions);
        }
        if settings.format != FormatChoice::Free && settings.choices.min() < 2 {
            return Err(QuizError::TooFewChoices(settings.choices.min()));
        }
        if directory.is_empty() {
            return Err(QuizError::NotEnoughData("no streets were extracted".into()));
        }

        let generator = Generator {
            directory,
            vocab,
            settings,
        };
        let questions = (0..settings.questions)
            .map(|_| generator.question(rng))
            .collect::<QuizResult<Vec<_>>>()?;

        tracing::debug!(questions = questions.len(), "quiz generated");
        Ok(Self {
            directory,
            vocab,
            results: vec![None; questions.len()],
            questions,
            score: 0,
        })
    }

    /// Questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Correct answers so far.
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Questions answered so far.
    pub fn answered(&self) -> usize {
        self.results.iter().filter(|r| r.is_some()).count()
    }

    /// Running totals.
    pub fn summary(&self) -> Summary {
        Summary {
            score: self.score,
            answered: self.answered(),
            total: self.len(),
        }
    }

    /// Score a response to question `index` (0-based).
    ///
    /// Multiple-choice questions take the 1-based choice number or the choice
    /// text; anything else is [`QuizError::InvalidResponse`] and leaves the
    /// question unanswered. Each question scores at most once.
    pub fn answer(&mut self, index: usize, response: &str) -> QuizResult<Outcome> {
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::NoSuchQuestion(index + 1))?;
        if self.results[index].is_some() {
            return Err(QuizError::AlreadyAnswered(index + 1));
        }

        let response = response.trim();
        if response.is_empty() {
            return Err(QuizError::InvalidResponse(String::new()));
        }

        let given = if question.is_multiple_choice() {
            self.select_choice(question, response)?.to_string()
        } else {
            response.to_string()
        };
        let correct = self.is_correct(question, &given);
        let outcome = Outcome {
            correct,
            given,
            expected: question.answer_text(),
        };

        self.results[index] = Some(correct);
        if correct {
            self.score += 1;
        }
        tracing::debug!(question = index + 1, correct, score = self.score, "answer scored");
        Ok(outcome)
    }

    fn select_choice<'q>(&self, question: &'q Question, response: &str) -> QuizResult<&'q str> {
        let choices = &question.choices;
        if let Ok(n) = response.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| choices.get(i))
                .map(String::as_str)
                .ok_or_else(|| QuizError::InvalidResponse(response.to_string()));
        }

        let key = normalize_key(response);
        let by_text = choices.iter().find(|c| normalize_key(c) == key);
        let by_type = || {
            let abbr = &self.vocab.resolve(response)?.abbr;
            choices.iter().find(|c| *c == abbr)
        };
        let chosen = match question.kind {
            QuestionKind::Street => by_text,
            QuestionKind::Type => by_text.or_else(by_type),
        };
        chosen
            .map(String::as_str)
            .ok_or_else(|| QuizError::InvalidResponse(response.to_string()))
    }

    fn is_correct(&self, question: &Question, given: &str) -> bool {
        match question.kind {
            QuestionKind::Street => {
                normalize_key(given) == normalize_key(&question.expected)
                    || self
                        .directory
                        .find_all(given, self.vocab)
                        .iter()
                        .any(|s| s.street_type() == question.target)
            }
            QuestionKind::Type => self
                .vocab
                .resolve(given)
                .is_some_and(|ty| question.accepted.contains(&ty.abbr)),
        }
    }
}

/// Builds individual questions.
struct Generator<'a> {
    directory: &'a Directory,
    vocab: &'a Vocabulary,
    settings: QuizSettings,
}

impl Generator<'_> {
    fn question<R: Rng + ?Sized>(&self, rng: &mut R) -> QuizResult<Question> {
        let kind = match self.settings.kind {
            KindChoice::Street => QuestionKind::Street,
            KindChoice::Type => QuestionKind::Type,
            KindChoice::Mixed if rng.gen_bool(0.5) => QuestionKind::Street,
            KindChoice::Mixed => QuestionKind::Type,
        };
        let multiple_choice = match self.settings.format {
            FormatChoice::Free => false,
            FormatChoice::Choice => true,
            FormatChoice::Mixed => rng.gen_bool(0.5),
        };

        let street = self
            .directory
            .streets()
            .choose(rng)
            .ok_or_else(|| QuizError::NotEnoughData("no streets were extracted".into()))?;

        let mut question = match kind {
            QuestionKind::Street => Question {
                kind,
                target: street.street_type().to_string(),
                expected: street.name(),
                accepted: vec![street.name()],
                choices: Vec::new(),
            },
            QuestionKind::Type => self.type_question(street),
        };

        if multiple_choice {
            let distractors = match kind {
                QuestionKind::Street => self.street_distractors(&question),
                QuestionKind::Type => self.type_distractors(&question),
            };
            if distractors.is_empty() {
                if self.settings.format == FormatChoice::Choice {
                    return Err(QuizError::NotEnoughData(format!(
                        "no wrong answers available for \"{}\"",
                        question.prompt()
                    )));
                }
                tracing::debug!(question = %question.target, "falling back to free response");
            } else {
                let wanted = self.settings.choices.draw(rng) - 1;
                let mut choices: Vec<String> = distractors
                    .choose_multiple(rng, wanted)
                    .cloned()
                    .collect();
                choices.push(question.expected.clone());
                choices.shuffle(rng);
                question.choices = choices;
            }
        }
        Ok(question)
    }

    /// Type question; every type the name occurs with is accepted.
    fn type_question(&self, street: &Street) -> Question {
        let name = street.name();
        let mut accepted: Vec<String> = Vec::new();
        for s in self.directory.find_all(&name, self.vocab) {
            if normalize_key(&s.name()) == normalize_key(&name)
                && !accepted.iter().any(|a| a == s.street_type())
            {
                accepted.push(s.street_type().to_string());
            }
        }
        if accepted.is_empty() {
            accepted.push(street.street_type().to_string());
        }
        Question {
            kind: QuestionKind::Type,
            target: name,
            expected: street.street_type().to_string(),
            accepted,
            choices: Vec::new(),
        }
    }

    /// Types in the directory that do not answer the question.
    fn type_distractors(&self, question: &Question) -> Vec<String> {
        self.directory
            .types_present(self.vocab)
            .into_iter()
            .filter(|t| !question.accepted.iter().any(|a| a == t))
            .map(str::to_string)
            .collect()
    }

    /// Street names that match no street of the question's type.
    fn street_distractors(&self, question: &Question) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for street in self.directory.streets() {
            if street.street_type() == question.target {
                continue;
            }
            let name = street.name();
            let shares_type = self
                .directory
                .find_all(&name, self.vocab)
                .iter()
                .any(|s| s.street_type() == question.target);
            if !shares_type && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
