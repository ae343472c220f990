//! Street name / street type parser.
//!
//! Splits a listing line such as `St Clair Ave W    Bathurst St    Yonge St`
//! into a base name ("St Clair"), a type ("Ave"), a direction (W), and the
//! segment end-points.
//!
//! The type is the first token, scanning left to right, that resolves in the
//! [`Vocabulary`] and ends the street name:
//!
//! - the first token is never a type, so "St Clair Ave" reads "St" as Saint
//!   and "Avenue Rd" keeps "Avenue" as its name;
//! - a name-word type ("Hill", "Park", ...) directly followed by another
//!   type is part of the name ("Forest Hill Rd");
//! - a direction right after the type is the street's qualifier.
//!
//! Lines without column spacing carry their end-points inline; those are
//! found by running the same scan over the remaining tokens.

use crate::dictionaries::directions::Direction;
use crate::street::Street;
use crate::text;
use crate::vocabulary::Vocabulary;

/// Tokens that join two end-points ("Front St - Bloor St").
const CONNECTORS: &[&str] = &["-", "\u{2013}", "\u{2014}", "to", "from", "and", "&"];

/// Street name, type and direction found at the start of a token run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Head {
    base: String,
    street_type: String,
    direction: Option<Direction>,
    /// Number of tokens the head spans.
    consumed: usize,
}

impl Head {
    fn full_name(&self) -> String {
        match self.direction {
            Some(dir) => format!("{} {} {dir}", self.base, self.street_type),
            None => format!("{} {}", self.base, self.street_type),
        }
    }
}

/// Parse one listing line into a [`Street`].
///
/// Returns `None` when the line has no street type after its first token.
pub fn parse_street(line: &str, vocab: &Vocabulary) -> Option<Street> {
    let cleaned = text::clean_line(line);
    let columns = text::split_columns(&cleaned);
    let first = columns.first()?;

    let tokens = clean_tokens(first);
    let head = split_head(&tokens, vocab)?;
    let rest = &tokens[head.consumed..];

    let (from, to) = if columns.len() > 1 {
        if !rest.is_empty() {
            tracing::trace!(
                line = %cleaned,
                ignored = %rest.join(" "),
                "trailing tokens in street column"
            );
        }
        let to = (columns.len() > 2).then(|| columns[2..].join(" "));
        (Some(columns[1].clone()), to)
    } else {
        split_limits(rest, vocab)
    };

    Some(
        Street::new(head.base, head.street_type)
            .with_direction(head.direction)
            .with_limits(from, to),
    )
}

/// Tokenize, dropping list punctuation around each token.
fn clean_tokens(text: &str) -> Vec<&str> {
    text::tokens(text)
        .map(|t| t.trim_matches(|c| matches!(c, ',' | ';' | ':')))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Find the street name, type and direction at the start of `tokens`.
fn split_head(tokens: &[&str], vocab: &Vocabulary) -> Option<Head> {
    for i in 1..tokens.len() {
        let Some(ty) = vocab.resolve(tokens[i]) else {
            continue;
        };
        let next = tokens.get(i + 1).copied();
        let direction = next.and_then(Direction::parse);

        if ty.name_word && direction.is_none() && next.is_some_and(|n| vocab.is_type(n)) {
            continue;
        }

        return Some(Head {
            base: tokens[..i].join(" "),
            street_type: ty.abbr.clone(),
            direction,
            consumed: i + 1 + usize::from(direction.is_some()),
        });
    }
    None
}

/// Split inline end-points into `from` and `to`.
fn split_limits(tokens: &[&str], vocab: &Vocabulary) -> (Option<String>, Option<String>) {
    let tokens = trim_connectors(tokens);
    if tokens.is_empty() {
        return (None, None);
    }
    match split_head(tokens, vocab) {
        Some(head) => {
            let rest = trim_connectors(&tokens[head.consumed..]);
            let to = (!rest.is_empty()).then(|| rest.join(" "));
            (Some(head.full_name()), to)
        }
        None => (Some(tokens.join(" ")), None),
    }
}

fn trim_connectors<'a, 'b>(mut tokens: &'b [&'a str]) -> &'b [&'a str] {
    while let Some((first, rest)) = tokens.split_first() {
        if CONNECTORS.iter().any(|c| c.eq_ignore_ascii_case(first)) {
            tokens = rest;
        } else {
            break;
        }
    }
    tokens
}
