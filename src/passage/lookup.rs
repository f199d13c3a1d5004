use crate::types::{BibleData, BibleVerse, PassageRef, VersePoint};

/// Collects the verses selected by `passage`, in stored order.
///
/// No chapter selects the whole book and no start verse the whole chapter.
/// Ranges are inclusive and may cross chapter boundaries. An unknown book or
/// chapter yields an empty list.
pub fn find_verses(data: &BibleData, passage: &PassageRef) -> Vec<BibleVerse> {
    let Some(book) = data.books.iter().find(|b| b.name == passage.book) else {
        return Vec::new();
    };

    let Some(chapter) = passage.chapter else {
        return book
            .chapters
            .iter()
            .flat_map(|ch| ch.verses.iter().cloned())
            .collect();
    };

    let Some(start_verse) = passage.start_verse else {
        return book
            .chapters
            .iter()
            .find(|ch| ch.chapter == chapter)
            .map(|ch| ch.verses.clone())
            .unwrap_or_default();
    };

    let start = (chapter, start_verse);
    let end = passage
        .end
        .map(|VersePoint { chapter, verse }| (chapter, verse))
        .unwrap_or(start);

    book.chapters
        .iter()
        .filter(|ch| ch.chapter >= start.0 && ch.chapter <= end.0)
        .flat_map(|ch| ch.verses.iter())
        .filter(|v| {
            let at = (v.chapter, v.verse);
            at >= start && at <= end
        })
        .cloned()
        .collect()
}

/// Joins verse texts with single spaces.
pub fn format_verses(verses: &[BibleVerse]) -> String {
    verses
        .iter()
        .map(|v| v.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
