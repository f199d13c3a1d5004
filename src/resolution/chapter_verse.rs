use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ChapterVerse;

static RE_POINT_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[.:]\s*").unwrap());
static RE_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());
static RE_CROSS_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+):([0-9]+)\s*a\s*([0-9]+):([0-9]+)").unwrap());
static RE_CHAPTER_REST: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+):(.+)").unwrap());
static RE_CHAPTER_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Parses a chapter number, rejecting zero and values that overflow.
fn positive(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|&n| n > 0)
}

/// Normalizes the trailing chapter/verse part of a citation.
///
/// Both `.` and `:` become `:` and whitespace around separators is dropped.
/// Shapes are tried in order:
///
/// - `C:V a D:W` -> chapter `C`, verse `"V-D:W"` (cross-chapter range)
/// - `C:rest` -> chapter `C`, verse `rest` verbatim
/// - `C` -> chapter only
///
/// Anything else yields an empty [`ChapterVerse`] and the caller falls back to
/// the raw text.
pub fn parse_chapter_verse(text: &str) -> ChapterVerse {
    let cleaned = RE_POINT_SEPARATOR.replace_all(text, ":");
    let cleaned = RE_COMMA.replace_all(&cleaned, ",");

    if let Some(caps) = RE_CROSS_CHAPTER.captures(&cleaned) {
        return match positive(&caps[1]) {
            Some(chapter) => ChapterVerse {
                chapter: Some(chapter),
                verse: Some(format!("{}-{}:{}", &caps[2], &caps[3], &caps[4])),
            },
            None => ChapterVerse::default(),
        };
    }

    if let Some(caps) = RE_CHAPTER_REST.captures(&cleaned) {
        return match positive(&caps[1]) {
            Some(chapter) => ChapterVerse {
                chapter: Some(chapter),
                verse: Some(caps[2].to_string()),
            },
            None => ChapterVerse::default(),
        };
    }

    if RE_CHAPTER_ONLY.is_match(&cleaned) {
        return ChapterVerse {
            chapter: positive(&cleaned),
            verse: None,
        };
    }

    ChapterVerse::default()
}
