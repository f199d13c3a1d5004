use std::fs;
use std::path::PathBuf;

use biblerefs::catalog::BookCatalog;
use biblerefs::errors::BibleRefsError;
use biblerefs::passage::*;
use biblerefs::types::*;
use tempfile::TempDir;

fn verse(book: &str, chapter: u32, verse: u32, text: &str) -> BibleVerse {
    BibleVerse {
        book: book.to_string(),
        chapter,
        verse,
        text: text.to_string(),
    }
}

fn chapter(book: &str, number: u32, texts: &[&str]) -> BibleChapter {
    BibleChapter {
        book: book.to_string(),
        chapter: number,
        verses: texts
            .iter()
            .enumerate()
            .map(|(i, t)| verse(book, number, i as u32 + 1, t))
            .collect(),
    }
}

/// A tiny translation: Gênesis 2-3, Salmos 23, Judas 1.
fn sample_bible() -> BibleData {
    BibleData {
        version: "TEST".to_string(),
        books: vec![
            BibleBook {
                name: "Gênesis".to_string(),
                chapters: vec![
                    chapter("Gênesis", 2, &["g2v1", "g2v2", "g2v3", "g2v4", "g2v5", "g2v6", "g2v7", "g2v8", "g2v9"]),
                    chapter("Gênesis", 3, &["g3v1", "g3v2", "g3v3", "g3v4"]),
                ],
            },
            BibleBook {
                name: "Salmos".to_string(),
                chapters: vec![chapter("Salmos", 23, &["s1", "s2", "s3", "s4", "s5", "s6"])],
            },
            BibleBook {
                name: "Judas".to_string(),
                chapters: vec![chapter("Judas", 1, &["j1", "j2", "j3", "j4", "j5", "j6"])],
            },
        ],
    }
}

fn write_bible(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("nvi.json");
    fs::write(&path, serde_json::to_string(&sample_bible()).unwrap()).unwrap();
    path
}

fn texts(verses: &[BibleVerse]) -> Vec<&str> {
    verses.iter().map(|v| v.text.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Reference grammar
// ---------------------------------------------------------------------------

#[test]
fn test_parse_passage_ref_shapes() {
    let catalog = BookCatalog::standard();

    let whole_book = parse_passage_ref(catalog, "Salmos").unwrap();
    assert_eq!(whole_book.chapter, None);

    let whole_chapter = parse_passage_ref(catalog, "Salmos 23").unwrap();
    assert_eq!(whole_chapter.chapter, Some(23));
    assert!(whole_chapter.is_whole_chapter());

    let single = parse_passage_ref(catalog, "João 3:16").unwrap();
    assert_eq!(single.book, "João");
    assert_eq!(single.chapter, Some(3));
    assert_eq!(single.start_verse, Some(16));
    assert_eq!(single.end, None);

    let range = parse_passage_ref(catalog, "1 Coríntios 13:4 – 7").unwrap();
    assert_eq!(range.start_verse, Some(4));
    assert_eq!(range.end, Some(VersePoint { chapter: 13, verse: 7 }));

    let cross = parse_passage_ref(catalog, "Gênesis 2:8-3:3").unwrap();
    assert_eq!(cross.chapter, Some(2));
    assert_eq!(cross.start_verse, Some(8));
    assert_eq!(cross.end, Some(VersePoint { chapter: 3, verse: 3 }));
}

#[test]
fn test_parse_passage_ref_single_chapter_books() {
    let catalog = BookCatalog::standard();

    let verse_only = parse_passage_ref(catalog, "Judas 5").unwrap();
    assert_eq!(verse_only.chapter, Some(1));
    assert_eq!(verse_only.start_verse, Some(5));

    let range = parse_passage_ref(catalog, "Judas 3-5").unwrap();
    assert_eq!(range.chapter, Some(1));
    assert_eq!(range.start_verse, Some(3));
    assert_eq!(range.end, Some(VersePoint { chapter: 1, verse: 5 }));

    let explicit = parse_passage_ref(catalog, "Judas 1:4").unwrap();
    assert_eq!(explicit.chapter, Some(1));
    assert_eq!(explicit.start_verse, Some(4));
}

#[test]
fn test_parse_passage_ref_rejects_invalid() {
    let catalog = BookCatalog::standard();
    assert!(parse_passage_ref(catalog, "").is_none());
    assert!(parse_passage_ref(catalog, "xyz 1:1").is_none());
    assert!(parse_passage_ref(catalog, "Salmos 0").is_none());
    assert!(parse_passage_ref(catalog, "Salmos 3-5").is_none());
}

// ---------------------------------------------------------------------------
// Verse selection
// ---------------------------------------------------------------------------

#[test]
fn test_find_verses_selections() {
    let data = sample_bible();
    let catalog = BookCatalog::standard();
    let find = |r: &str| find_verses(&data, &parse_passage_ref(catalog, r).unwrap());

    assert_eq!(find("Gênesis").len(), 13);
    assert_eq!(find("Salmos 23").len(), 6);
    assert_eq!(texts(&find("Salmos 23:1")), vec!["s1"]);
    assert_eq!(texts(&find("Salmos 23:2-4")), vec!["s2", "s3", "s4"]);
    assert_eq!(
        texts(&find("Gênesis 2:8-3:3")),
        vec!["g2v8", "g2v9", "g3v1", "g3v2", "g3v3"]
    );
    assert_eq!(texts(&find("Judas 5")), vec!["j5"]);
}

#[test]
fn test_find_verses_missing_book_or_chapter() {
    let data = sample_bible();
    let catalog = BookCatalog::standard();
    assert!(find_verses(&data, &parse_passage_ref(catalog, "Êxodo 3").unwrap()).is_empty());
    assert!(find_verses(&data, &parse_passage_ref(catalog, "Salmos 24").unwrap()).is_empty());
    assert!(find_verses(&data, &parse_passage_ref(catalog, "Salmos 23:40").unwrap()).is_empty());
}

#[test]
fn test_format_verses_joins_with_spaces() {
    let verses = vec![verse("Salmos", 23, 1, "a"), verse("Salmos", 23, 2, "b")];
    assert_eq!(format_verses(&verses), "a b");
    assert_eq!(format_verses(&[]), "");
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[test]
fn test_store_normalizes_before_lookup() {
    let dir = TempDir::new().unwrap();
    let store = JsonPassageStore::open(&write_bible(&dir)).unwrap();
    assert_eq!(store.version(), "TEST");

    let passage = store.get_passage("sl 23.1").unwrap();
    assert_eq!(passage.reference, "Salmos 23:1");
    assert_eq!(passage.text, "s1");

    let passage = store.get_passage("gn 2.9 a 3.1").unwrap();
    assert_eq!(passage.reference, "Gênesis 2:9-3:1");
    assert_eq!(passage.text, "g2v9 g3v1");
}

#[test]
fn test_store_errors() {
    let store = JsonPassageStore::from_data(sample_bible());

    assert!(matches!(
        store.get_passage("xyz 1:1"),
        Err(BibleRefsError::InvalidReference { .. })
    ));
    assert!(matches!(
        store.get_passage("   "),
        Err(BibleRefsError::InvalidReference { .. })
    ));
    assert!(matches!(
        store.get_passage("ex 3"),
        Err(BibleRefsError::PassageNotFound { .. })
    ));
}

#[test]
fn test_open_missing_or_malformed_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        JsonPassageStore::open(&missing),
        Err(BibleRefsError::Bible { .. })
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        JsonPassageStore::open(&broken),
        Err(BibleRefsError::Bible { .. })
    ));
}

#[test]
fn test_check_bible_status() {
    let dir = TempDir::new().unwrap();
    let path = default_bible_path(dir.path());
    assert!(!check_bible_status(&path).is_available);

    let written = write_bible(&dir);
    assert_eq!(written, path);
    assert!(check_bible_status(&path).is_available);
}
