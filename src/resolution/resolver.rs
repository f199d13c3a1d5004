use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::catalog::BookCatalog;
use crate::types::*;

use super::chapter_verse::parse_chapter_verse;

/// Splits a segment into a lazy book-name prefix and an optional trailing
/// chapter/verse part: `C`, `C.V`, `C.V a D.W`, with `[,:]N` continuations.
static RE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(.+?)(?:\s+([0-9]+(?:[.:][0-9]+(?:\s*[a-zA-Z]\s*[0-9]+[.:][0-9]+)?(?:[,:][0-9]+)*)?))?\s*$",
    )
    .unwrap()
});

/// Segment separators in a multi-citation string.
const SEGMENT_SEPARATORS: [char; 2] = [',', ';'];

/// Resolves raw citations against a book catalog.
///
/// The resolver holds no mutable state and can be shared freely across
/// threads; every call is a pure function of its input and the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    catalog: &'a BookCatalog,
}

impl Default for ReferenceResolver<'static> {
    fn default() -> Self {
        Self::new(BookCatalog::standard())
    }
}

impl<'a> ReferenceResolver<'a> {
    /// Creates a resolver backed by the given catalog.
    pub fn new(catalog: &'a BookCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver matches book names against.
    pub fn catalog(&self) -> &'a BookCatalog {
        self.catalog
    }

    /// Normalizes every segment of `input` and re-joins them with ", ".
    ///
    /// Empty or blank input is returned unchanged. Segments that do not
    /// resolve are emitted verbatim (trimmed), so this never fails.
    pub fn normalize(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return input.to_string();
        }

        self.resolve(input)
            .iter()
            .map(|citation| self.render(citation))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolves each `,`/`;`-separated segment of `input`, in order.
    ///
    /// Blank input yields no citations.
    pub fn resolve(&self, input: &str) -> Vec<ParsedCitation> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        trimmed
            .split(SEGMENT_SEPARATORS)
            .map(|segment| self.resolve_segment(segment.trim()))
            .collect()
    }

    /// Resolves a single citation segment such as `"1 co 13"`.
    pub fn resolve_segment(&self, segment: &str) -> ParsedCitation {
        let Some(caps) = RE_SEGMENT.captures(segment) else {
            debug!(segment, "segment does not match citation grammar");
            return ParsedCitation::unresolved(segment);
        };

        let book_part = caps.get(1).map_or("", |m| m.as_str());
        let Some(book) = self.catalog.find_book_by_name(book_part) else {
            debug!(segment, book_part, "no book matches segment");
            return ParsedCitation::unresolved(segment);
        };

        let raw = caps.get(2).map(|m| m.as_str().to_string());
        let parsed = raw
            .as_deref()
            .map(parse_chapter_verse)
            .unwrap_or_default();

        debug!(
            segment,
            book = book.name,
            chapter = ?parsed.chapter,
            verse = ?parsed.verse,
            "resolved segment"
        );

        ParsedCitation {
            segment: segment.to_string(),
            book: Some(book.name.to_string()),
            chapter: parsed.chapter,
            verse_spec: parsed.verse,
            raw_chapter_verse: raw,
            single_chapter: book.single_chapter,
        }
    }

    /// Renders one citation in canonical form.
    ///
    /// - no book: the original segment
    /// - no chapter/verse text: the bare book name
    /// - chapter and verse: `Book C:V`
    /// - chapter only: `Book C`
    /// - nothing parsed: `Book raw`
    ///
    /// For single-chapter books the leading number is a verse rather than a
    /// chapter (`Judas 5` is verse 5, `Judas 1:4` is verse 1 sub-part 4), and
    /// the same layout renders both readings.
    pub fn render(&self, citation: &ParsedCitation) -> String {
        let Some(book) = citation.book.as_deref() else {
            return citation.segment.clone();
        };
        let Some(raw) = citation.raw_chapter_verse.as_deref() else {
            return book.to_string();
        };

        match (citation.chapter, citation.verse_spec.as_deref()) {
            (Some(number), Some(verse)) => format!("{} {}:{}", book, number, verse),
            (Some(number), None) => format!("{} {}", book, number),
            (None, _) => format!("{} {}", book, raw),
        }
    }
}

/// Normalizes `input` using the standard book catalog.
pub fn normalize_reference(input: &str) -> String {
    ReferenceResolver::default().normalize(input)
}
