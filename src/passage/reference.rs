use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::BookCatalog;
use crate::types::{PassageRef, VersePoint};

/// `Book`, `Book C`, `Book C:V`, `Book C:V-W`, `Book C:V-D:W`, and for
/// single-chapter books `Book V-W`. Hyphen or en dash closes a range.
static RE_PASSAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(.+?)(?:\s+([0-9]+)(?:\s*[.:]\s*([0-9]+))?(?:\s*[-–]\s*([0-9]+)(?:\s*[.:]\s*([0-9]+))?)?)?\s*$",
    )
    .unwrap()
});

fn number(caps: &regex::Captures<'_>, idx: usize) -> Option<Option<u32>> {
    match caps.get(idx) {
        None => Some(None),
        Some(m) => m.as_str().parse::<u32>().ok().filter(|&n| n > 0).map(Some),
    }
}

/// Parses a canonical reference for passage lookup.
///
/// Returns `None` when the text does not fit the grammar, names an unknown
/// book, or carries a zero or overflowing number. A bare number after a
/// single-chapter book is a verse of chapter 1.
pub fn parse_passage_ref(catalog: &BookCatalog, reference: &str) -> Option<PassageRef> {
    let caps = RE_PASSAGE.captures(reference.trim())?;
    let book = catalog.find_book_by_name(&caps[1])?;

    let first = number(&caps, 2)?;
    let verse = number(&caps, 3)?;
    let range_a = number(&caps, 4)?;
    let range_b = number(&caps, 5)?;

    let Some(first) = first else {
        return Some(PassageRef {
            book: book.name.to_string(),
            chapter: None,
            start_verse: None,
            end: None,
        });
    };

    let (chapter, start_verse, end) = match (verse, range_a, range_b) {
        (None, None, None) if book.single_chapter => (1, Some(first), None),
        (None, None, None) => (first, None, None),
        (None, Some(last), None) if book.single_chapter => (
            1,
            Some(first),
            Some(VersePoint {
                chapter: 1,
                verse: last,
            }),
        ),
        (Some(start), None, None) => (first, Some(start), None),
        (Some(start), Some(last), None) => (
            first,
            Some(start),
            Some(VersePoint {
                chapter: first,
                verse: last,
            }),
        ),
        (Some(start), Some(end_chapter), Some(end_verse)) => (
            first,
            Some(start),
            Some(VersePoint {
                chapter: end_chapter,
                verse: end_verse,
            }),
        ),
        _ => return None,
    };

    Some(PassageRef {
        book: book.name.to_string(),
        chapter: Some(chapter),
        start_verse,
        end,
    })
}
