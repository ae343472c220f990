//! Street extraction over listing pages.
//!
//! Runs [`parse_street`] over every line of every page, skipping page
//! furniture and recording lines that do not parse.

use serde::Serialize;

use crate::parse::parse_street;
use crate::source::Source;
use crate::street::Street;
use crate::text;
use crate::vocabulary::Vocabulary;

/// A listing line that did not yield a street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unparsed {
    /// 1-based page number.
    pub page: usize,
    /// 1-based line number within the page.
    pub line: usize,
    /// The cleaned line text.
    pub text: String,
}

/// Result of extracting streets from a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Streets in listing order.
    pub streets: Vec<Street>,
    /// Pages processed.
    pub pages: usize,
    /// Lines read, furniture included.
    pub lines: usize,
    /// Blank lines, page numbers and headers skipped.
    pub furniture: usize,
    /// Lines with content that did not parse.
    pub unparsed: Vec<Unparsed>,
}

/// Incremental extractor, fed one page at a time.
#[derive(Debug)]
pub struct Extractor<'v> {
    vocab: &'v Vocabulary,
    extraction: Extraction,
}

impl<'v> Extractor<'v> {
    /// Create an extractor using `vocab` to recognize street types.
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self {
            vocab,
            extraction: Extraction::default(),
        }
    }

    /// Extract the streets on one page.
    ///
    /// Returns the number of streets found on the page.
    pub fn extract_page(&mut self, page_no: usize, page: &str) -> usize {
        let before = self.extraction.streets.len();
        for (idx, raw) in page.lines().enumerate() {
            self.extraction.lines += 1;
            let line = text::clean_line(raw);
            if text::is_page_furniture(&line) {
                self.extraction.furniture += 1;
                continue;
            }
            match parse_street(&line, self.vocab) {
                Some(street) => self.extraction.streets.push(street.on_page(page_no)),
                None => {
                    tracing::debug!(page = page_no, line = idx + 1, text = %line, "line did not parse");
                    self.extraction.unparsed.push(Unparsed {
                        page: page_no,
                        line: idx + 1,
                        text: line,
                    });
                }
            }
        }
        self.extraction.pages += 1;
        self.extraction.streets.len() - before
    }

    /// Finish and return what was extracted.
    pub fn finish(self) -> Extraction {
        let e = &self.extraction;
        tracing::info!(
            pages = e.pages,
            lines = e.lines,
            streets = e.streets.len(),
            unparsed = e.unparsed.len(),
            "extraction finished"
        );
        self.extraction
    }
}

/// Extract every page of `source`.
#[tracing::instrument(skip_all, fields(path = %source.path(), pages = source.page_count()))]
pub fn extract(source: &Source, vocab: &Vocabulary) -> Extraction {
    let mut extractor = Extractor::new(vocab);
    for (idx, page) in source.pages().iter().enumerate() {
        extractor.extract_page(idx + 1, page);
    }
    extractor.finish()
}
