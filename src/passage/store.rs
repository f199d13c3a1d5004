use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::BookCatalog;
use crate::errors::{BibleRefsError, Result};
use crate::resolution::ReferenceResolver;
use crate::types::{BibleData, BibleStatus, Passage};

use super::lookup::{find_verses, format_verses};
use super::reference::parse_passage_ref;

/// Source of verse text keyed by reference.
pub trait PassageStore {
    /// Looks up the passage for a single reference.
    ///
    /// Fails with `InvalidReference` when the reference cannot be parsed and
    /// with `PassageNotFound` when it parses but selects no verses.
    fn get_passage(&self, reference: &str) -> Result<Passage>;
}

/// Passage store backed by a Bible JSON file held in memory.
#[derive(Debug)]
pub struct JsonPassageStore {
    data: BibleData,
    catalog: &'static BookCatalog,
}

impl JsonPassageStore {
    /// Reads and parses the Bible data file at `path` once.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BibleRefsError::Bible {
                message: "bible data file not found".to_string(),
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| BibleRefsError::Bible {
            message: format!("failed to read bible data: {}", e),
            path: path.display().to_string(),
        })?;

        let data: BibleData =
            serde_json::from_str(&contents).map_err(|e| BibleRefsError::Bible {
                message: format!("failed to parse bible data: {}", e),
                path: path.display().to_string(),
            })?;

        info!(
            path = %path.display(),
            version = %data.version,
            books = data.books.len(),
            "loaded bible data"
        );

        Ok(Self::from_data(data))
    }

    /// Wraps already-loaded Bible data.
    pub fn from_data(data: BibleData) -> Self {
        Self {
            data,
            catalog: BookCatalog::standard(),
        }
    }

    /// Translation identifier of the loaded data.
    pub fn version(&self) -> &str {
        &self.data.version
    }
}

impl PassageStore for JsonPassageStore {
    /// The reference is normalized first, so abbreviations such as
    /// `"sl 23.1"` are accepted. The returned passage carries the canonical
    /// reference.
    fn get_passage(&self, reference: &str) -> Result<Passage> {
        let canonical = ReferenceResolver::new(self.catalog).normalize(reference.trim());

        let parsed = parse_passage_ref(self.catalog, &canonical).ok_or_else(|| {
            BibleRefsError::InvalidReference {
                reference: reference.to_string(),
            }
        })?;
        debug!(reference, canonical = %canonical, ?parsed, "looking up passage");

        let verses = find_verses(&self.data, &parsed);
        if verses.is_empty() {
            return Err(BibleRefsError::PassageNotFound {
                reference: canonical,
            });
        }

        Ok(Passage {
            reference: canonical,
            text: format_verses(&verses),
            verses,
        })
    }
}

/// Reports whether the Bible data file is present.
pub fn check_bible_status(path: &Path) -> BibleStatus {
    if path.is_file() {
        BibleStatus {
            is_available: true,
            message: format!("bible data available at {}", path.display()),
        }
    } else {
        BibleStatus {
            is_available: false,
            message: format!("bible data not found at {}", path.display()),
        }
    }
}

/// Default file name for the Bible data inside the project directory.
pub const DEFAULT_BIBLE_FILE: &str = "nvi.json";

/// Joins the default Bible file name onto `dir`.
pub fn default_bible_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_BIBLE_FILE)
}
