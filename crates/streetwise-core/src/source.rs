//! Street listing sources.
//!
//! A listing is a fixed-layout document split into pages. Plain text files
//! separate pages with form feeds (as `pdftotext` writes them); PDF files
//! are text-extracted first when the `pdf` feature is enabled.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{SourceError, SourceResult};

/// Page separator in extracted listing text.
pub const PAGE_BREAK: char = '\u{c}';

/// A loaded street listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    path: Utf8PathBuf,
    pages: Vec<String>,
}

impl Source {
    /// Load a listing from disk.
    ///
    /// `max_bytes` caps the file size; `None` disables the check.
    #[tracing::instrument(skip(path), fields(path = %path))]
    pub fn load(path: &Utf8Path, max_bytes: Option<usize>) -> SourceResult<Self> {
        let io_err = |source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !path.is_file() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        // Preflight: check file size via metadata before reading into memory.
        let size = std::fs::metadata(path.as_std_path()).map_err(io_err)?.len();
        if let Some(limit) = max_bytes
            && size > limit as u64
        {
            return Err(SourceError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }

        let text = if is_pdf(path) {
            read_pdf(path)?
        } else {
            std::fs::read_to_string(path.as_std_path()).map_err(io_err)?
        };

        let source = Self::from_text(path, &text);
        if source.pages.is_empty() {
            return Err(SourceError::Empty {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(pages = source.pages.len(), bytes = size, "listing loaded");
        Ok(source)
    }

    /// Build a listing from already-extracted text.
    ///
    /// Pages are split on form feeds; blank pages are dropped.
    pub fn from_text(path: impl AsRef<Utf8Path>, text: &str) -> Self {
        let pages = text
            .split(PAGE_BREAK)
            .filter(|page| !page.trim().is_empty())
            .map(str::to_string)
            .collect();
        Self {
            path: path.as_ref().to_path_buf(),
            pages,
        }
    }

    /// Keep only the first `limit` pages.
    #[must_use]
    pub fn with_page_limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit
            && self.pages.len() > limit
        {
            tracing::debug!(pages = self.pages.len(), limit, "truncating listing");
            self.pages.truncate(limit);
        }
        self
    }

    /// Where the listing was read from.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Page texts in order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn is_pdf(path: &Utf8Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Utf8Path) -> SourceResult<String> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| SourceError::Pdf {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Utf8Path) -> SourceResult<String> {
    Err(SourceError::PdfUnsupported {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8(path: std::path::PathBuf) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn splits_pages_on_form_feed() {
        let source = Source::from_text("listing.txt", "Yonge St\n\u{c}Bloor St W\n\u{c}\n");
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.pages()[1], "Bloor St W\n");
    }

    #[test]
    fn text_without_form_feed_is_one_page() {
        let source = Source::from_text("listing.txt", "Yonge St\nBay St\n");
        assert_eq!(source.page_count(), 1);
    }

    #[test]
    fn page_limit_truncates() {
        let source = Source::from_text("l.txt", "a St\u{c}b St\u{c}c St").with_page_limit(Some(2));
        assert_eq!(source.page_count(), 2);
        let source = Source::from_text("l.txt", "a St").with_page_limit(Some(39));
        assert_eq!(source.page_count(), 1);
    }

    #[test]
    fn load_reads_text_file() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(tmp.path().join("streets.txt"));
        fs::write(&path, "Yonge St\u{c}Bay St").unwrap();

        let source = Source::load(&path, None).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(tmp.path().join("missing.txt"));
        assert!(matches!(
            Source::load(&path, None),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(tmp.path().join("big.txt"));
        fs::write(&path, "Yonge St\n".repeat(100)).unwrap();
        assert!(matches!(
            Source::load(&path, Some(10)),
            Err(SourceError::TooLarge { limit: 10, .. })
        ));
    }

    #[test]
    fn blank_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(tmp.path().join("blank.txt"));
        fs::write(&path, "\n\u{c}\n").unwrap();
        assert!(matches!(
            Source::load(&path, None),
            Err(SourceError::Empty { .. })
        ));
    }
}
