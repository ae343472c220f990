//! Street directory: lookups over extracted streets.
//!
//! The directory keeps one record per distinct street (first occurrence in
//! the listing wins) sorted by name, with sorted key indexes so every lookup
//! is a binary search.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{LookupError, LookupResult};
use crate::parse::parse_street;
use crate::street::Street;
use crate::text::normalize_key;
use crate::vocabulary::Vocabulary;

/// Sorted `(key, street index)` pairs.
#[derive(Debug, Clone, Default)]
struct KeyIndex {
    entries: Vec<(String, usize)>,
}

impl KeyIndex {
    fn build(streets: &[Street], key: impl Fn(&Street) -> String) -> Self {
        let mut entries: Vec<(String, usize)> = streets
            .iter()
            .enumerate()
            .map(|(idx, street)| (normalize_key(&key(street)), idx))
            .collect();
        entries.sort();
        Self { entries }
    }

    /// Street indexes whose key equals `key`, in directory order.
    fn find(&self, key: &str) -> impl Iterator<Item = usize> + '_ {
        let start = self.entries.partition_point(|(k, _)| k.as_str() < key);
        let end = self.entries.partition_point(|(k, _)| k.as_str() <= key);
        self.entries[start..end].iter().map(|(_, idx)| *idx)
    }
}

/// Number of directory streets of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    /// Canonical abbreviation.
    pub abbr: String,
    /// Long form.
    pub long: String,
    /// Streets of this type.
    pub count: usize,
}

/// Street directory built from an extraction.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    streets: Vec<Street>,
    by_full: KeyIndex,
    by_name: KeyIndex,
    by_base: KeyIndex,
}

impl Directory {
    /// Build a directory, dropping repeated streets.
    pub fn new(streets: impl IntoIterator<Item = Street>) -> Self {
        let mut streets: Vec<Street> = streets.into_iter().collect();
        let total = streets.len();

        // Stable sort keeps listing order among equal names, so dedup keeps
        // the first occurrence.
        streets.sort_by_cached_key(|s| (normalize_key(&s.name()), s.street_type().to_string()));
        streets.dedup_by(|b, a| normalize_key(&a.full_name()) == normalize_key(&b.full_name()));

        tracing::debug!(total, distinct = streets.len(), "directory built");

        let by_full = KeyIndex::build(&streets, Street::full_name);
        let by_name = KeyIndex::build(&streets, Street::name);
        let by_base = KeyIndex::build(&streets, |s| s.base().to_string());
        Self {
            streets,
            by_full,
            by_name,
            by_base,
        }
    }

    /// All streets, sorted by name.
    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    /// Number of distinct streets.
    pub fn len(&self) -> usize {
        self.streets.len()
    }

    /// Whether the directory has no streets.
    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }

    /// Streets matching a free-text query, without erroring.
    ///
    /// Tries the full name ("Bloor St W"), then name and type without a
    /// direction ("Bloor St" finds both "Bloor St E" and "Bloor St W"), then
    /// the name ("Bloor W"), then the base name ("Bloor"). The first tier
    /// with matches wins.
    pub fn find(&self, query: &str, vocab: &Vocabulary) -> Vec<&Street> {
        self.tiers(query, vocab)
            .into_iter()
            .find(|tier| !tier.is_empty())
            .unwrap_or_default()
            .into_iter()
            .map(|idx| &self.streets[idx])
            .collect()
    }

    /// Streets matching a query in any tier, in directory order.
    ///
    /// Unlike [`find`](Self::find) this does not stop at the first tier, so
    /// "Lawrence Park" yields both "Lawrence Pk" and "Lawrence Park Ave".
    pub fn find_all(&self, query: &str, vocab: &Vocabulary) -> Vec<&Street> {
        let mut indexes: Vec<usize> = self.tiers(query, vocab).into_iter().flatten().collect();
        indexes.sort_unstable();
        indexes.dedup();
        indexes.into_iter().map(|idx| &self.streets[idx]).collect()
    }

    /// Street indexes per lookup tier, most specific first.
    fn tiers(&self, query: &str, vocab: &Vocabulary) -> Vec<Vec<usize>> {
        let key = normalize_key(query);
        if key.is_empty() {
            return Vec::new();
        }

        let parsed = parse_street(query, vocab);
        let full_key = parsed
            .as_ref()
            .map(|s| normalize_key(&s.full_name()))
            .unwrap_or_else(|| key.clone());

        let mut tiers = vec![self.by_full.find(&full_key).collect::<Vec<_>>()];
        if let Some(parsed) = parsed.as_ref().filter(|s| s.direction().is_none()) {
            tiers.push(
                self.by_base
                    .find(&normalize_key(parsed.base()))
                    .filter(|&idx| self.streets[idx].street_type() == parsed.street_type())
                    .collect(),
            );
        }
        tiers.push(self.by_name.find(&key).collect());
        tiers.push(self.by_base.find(&key).collect());
        tiers
    }

    /// What type is street `query`?
    ///
    /// Returns every street the query names; a bare base name such as
    /// "Bloor" can name several ("Bloor St E", "Bloor St W").
    #[tracing::instrument(skip(self, vocab))]
    pub fn type_of(&self, query: &str, vocab: &Vocabulary) -> LookupResult<Vec<&Street>> {
        let found = self.find(query, vocab);
        if found.is_empty() {
            return Err(LookupError::UnknownStreet(query.trim().to_string()));
        }
        Ok(found)
    }

    /// Up to `count` streets of type `street_type`, sorted by name.
    ///
    /// When more streets of the type exist than requested, a random sample
    /// is drawn from `rng`.
    #[tracing::instrument(skip(self, rng, vocab))]
    pub fn streets_of_type<R: Rng + ?Sized>(
        &self,
        street_type: &str,
        count: usize,
        rng: &mut R,
        vocab: &Vocabulary,
    ) -> LookupResult<Vec<&Street>> {
        let ty = vocab
            .resolve(street_type)
            .ok_or_else(|| LookupError::UnknownType(street_type.trim().to_string()))?;
        if count == 0 {
            return Err(LookupError::ZeroCount);
        }

        let mut matching = self.indexes_of_type(&ty.abbr);
        if matching.len() > count {
            matching = matching.choose_multiple(rng, count).copied().collect();
            matching.sort_unstable();
        }
        Ok(matching.into_iter().map(|idx| &self.streets[idx]).collect())
    }

    /// Street indexes of type `abbr`, in directory order.
    pub(crate) fn indexes_of_type(&self, abbr: &str) -> Vec<usize> {
        self.streets
            .iter()
            .enumerate()
            .filter(|(_, s)| s.street_type() == abbr)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Distinct types present in the directory, in vocabulary order.
    pub fn types_present<'v>(&self, vocab: &'v Vocabulary) -> Vec<&'v str> {
        vocab
            .iter()
            .filter(|t| self.streets.iter().any(|s| s.street_type() == t.abbr))
            .map(|t| t.abbr.as_str())
            .collect()
    }

    /// Street count for every vocabulary type, in vocabulary order.
    pub fn type_counts(&self, vocab: &Vocabulary) -> Vec<TypeCount> {
        vocab
            .iter()
            .map(|t| TypeCount {
                abbr: t.abbr.clone(),
                long: t.long().to_string(),
                count: self
                    .streets
                    .iter()
                    .filter(|s| s.street_type() == t.abbr)
                    .count(),
            })
            .collect()
    }
}
