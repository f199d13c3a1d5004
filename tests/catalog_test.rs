use biblerefs::catalog::*;
use biblerefs::types::{BookEntry, Testament};

#[test]
fn test_table_has_66_books_split_by_testament() {
    let catalog = BookCatalog::standard();
    assert_eq!(catalog.len(), 66);
    assert_eq!(catalog.iter().filter(|b| b.testament == Testament::Old).count(), 39);
    assert_eq!(catalog.iter().filter(|b| b.testament == Testament::New).count(), 27);
    assert_eq!(BOOKS[0].name, "Gênesis");
    assert_eq!(BOOKS[65].name, "Apocalipse");
}

#[test]
fn test_canonical_names_are_unique() {
    let mut names: Vec<&str> = BOOKS.iter().map(|b| b.name).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), BOOKS.len());
}

#[test]
fn test_every_canonical_name_resolves_to_itself() {
    for book in BOOKS {
        let found = find_book_by_name(book.name)
            .unwrap_or_else(|| panic!("{} did not resolve", book.name));
        assert_eq!(found.name, book.name);

        // "jo" is forced to João, so Jó is only reachable with its accent.
        if book.name == "Jó" {
            continue;
        }
        let found = find_book_by_name(&normalize_text(book.name))
            .unwrap_or_else(|| panic!("normalized {} did not resolve", book.name));
        assert_eq!(found.name, book.name);
    }
}

#[test]
fn test_job_needs_its_accent() {
    assert_eq!(find_book_by_name("Jó").map(|b| b.name), Some("Jó"));
    assert_eq!(normalize_text("Jó"), "jo");
    assert_eq!(find_book_by_name(&normalize_text("Jó")).map(|b| b.name), Some("João"));
}

#[test]
fn test_positions_follow_canonical_order() {
    for (i, book) in BOOKS.iter().enumerate() {
        assert_eq!(usize::from(book.position), i + 1, "{}", book.name);
    }
}

#[test]
fn test_single_chapter_books() {
    let single: Vec<&str> = BOOKS
        .iter()
        .filter(|b| b.single_chapter)
        .map(|b| b.name)
        .collect();
    assert_eq!(single, vec!["Obadias", "Filemom", "2 João", "3 João", "Judas"]);
}

#[test]
fn test_normalize_text() {
    assert_eq!(normalize_text("  Êxodo "), "exodo");
    assert_eq!(normalize_text("LAMENTAÇÕES"), "lamentacoes");
    assert_eq!(normalize_text("1 Coríntios"), "1 corintios");
    assert_eq!(normalize_text(""), "");
}

#[test]
fn test_find_book_resolution_order() {
    assert_eq!(find_book_by_name("jo").map(|b| b.name), Some("João"));
    assert_eq!(find_book_by_name("jó").map(|b| b.name), Some("Jó"));
    assert_eq!(find_book_by_name(" Jo ").map(|b| b.name), Some("João"));
    assert_eq!(find_book_by_name("fil").map(|b| b.name), Some("Filipenses"));
    assert_eq!(find_book_by_name("joe").map(|b| b.name), Some("Joel"));
}

#[test]
fn test_find_book_misses() {
    assert!(find_book_by_name("").is_none());
    assert!(find_book_by_name("   ").is_none());
    assert!(find_book_by_name("xyz").is_none());
    assert!(find_book_by_name("4 jo").is_none());
}

#[test]
fn test_get_requires_exact_canonical_name() {
    let catalog = BookCatalog::standard();
    assert_eq!(catalog.get("Salmos").map(|b| b.name), Some("Salmos"));
    assert!(catalog.get("salmos").is_none());
    assert!(catalog.is_canonical_name("1 Coríntios"));
    assert!(!catalog.is_canonical_name("1 Corintios"));
}

static CUSTOM: &[BookEntry] = &[
    BookEntry {
        position: 1,
        name: "Alpha",
        aliases: &["al", "shared"],
        testament: Testament::Old,
        single_chapter: false,
    },
    BookEntry {
        position: 2,
        name: "Beta",
        aliases: &["be", "shared", "alpha"],
        testament: Testament::New,
        single_chapter: true,
    },
];

#[test]
fn test_custom_table_first_declaration_wins() {
    let catalog = BookCatalog::new(CUSTOM);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_book_by_name("shared").map(|b| b.name), Some("Alpha"));
    assert_eq!(catalog.find_book_by_name("be").map(|b| b.name), Some("Beta"));
}

#[test]
fn test_custom_table_canonical_name_beats_alias() {
    let catalog = BookCatalog::new(CUSTOM);
    assert_eq!(catalog.find_book_by_name("ALPHA").map(|b| b.name), Some("Alpha"));
}

#[test]
fn test_custom_table_skips_override_without_target() {
    let catalog = BookCatalog::new(CUSTOM);
    assert!(catalog.find_book_by_name("jo").is_none());
}
