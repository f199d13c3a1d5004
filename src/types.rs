use serde::{Deserialize, Serialize};

/// Which half of the canon a book belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

#[allow(clippy::should_implement_trait)]
impl Testament {
    /// Returns the string representation of this testament.
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "old",
            Testament::New => "new",
        }
    }

    /// Parses a string into a `Testament`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<Testament> {
        match s {
            "old" => Some(Testament::Old),
            "new" => Some(Testament::New),
            _ => None,
        }
    }
}

/// One canonical book of the corpus together with every name that resolves to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    /// 1-based position in canonical order.
    pub position: u8,
    /// Display name, with diacritics and capitalization (e.g. "Gênesis").
    pub name: &'static str,
    /// Full names and abbreviations, matched case- and diacritic-insensitively.
    pub aliases: &'static [&'static str],
    pub testament: Testament,
    /// Books with a single chapter are cited as "Book Verse".
    pub single_chapter: bool,
}

/// The resolved form of one citation segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCitation {
    /// The trimmed segment exactly as it appeared in the input.
    pub segment: String,
    /// Canonical name of the matched book, `None` when nothing matched.
    pub book: Option<String>,
    pub chapter: Option<u32>,
    /// Verse or verse-range detail, e.g. "16", "8-3:3" or "1,5,9".
    pub verse_spec: Option<String>,
    /// The trailing chapter/verse text before normalization.
    pub raw_chapter_verse: Option<String>,
    pub single_chapter: bool,
}

impl ParsedCitation {
    /// A segment that could not be matched to any book.
    pub fn unresolved(segment: &str) -> Self {
        Self {
            segment: segment.to_string(),
            book: None,
            chapter: None,
            verse_spec: None,
            raw_chapter_verse: None,
            single_chapter: false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.book.is_some()
    }
}

/// Output of chapter/verse normalization: both parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterVerse {
    pub chapter: Option<u32>,
    pub verse: Option<String>,
}

/// A chapter and verse pair used as a range endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersePoint {
    pub chapter: u32,
    pub verse: u32,
}

/// A canonical reference broken down for passage lookup.
///
/// `chapter == None` selects the whole book; `start_verse == None` selects the
/// whole chapter. `end` closes an inclusive range that may cross chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageRef {
    pub book: String,
    pub chapter: Option<u32>,
    pub start_verse: Option<u32>,
    pub end: Option<VersePoint>,
}

impl PassageRef {
    pub fn is_whole_chapter(&self) -> bool {
        self.chapter.is_some() && self.start_verse.is_none()
    }
}

// ---------------------------------------------------------------------------
// Bible text
// ---------------------------------------------------------------------------

/// A single verse of stored Bible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVerse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleChapter {
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<BibleVerse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleBook {
    pub name: String,
    pub chapters: Vec<BibleChapter>,
}

/// A whole translation as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleData {
    /// Translation identifier, e.g. "NVI".
    pub version: String,
    pub books: Vec<BibleBook>,
}

/// The result of a passage lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// The reference as requested.
    pub reference: String,
    /// Verse texts joined by single spaces.
    pub text: String,
    pub verses: Vec<BibleVerse>,
}

/// Availability of the Bible data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleStatus {
    pub is_available: bool,
    pub message: String,
}
