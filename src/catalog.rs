use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

use crate::types::{BookEntry, Testament};
use Testament::{New, Old};

const fn book(
    position: u8,
    name: &'static str,
    aliases: &'static [&'static str],
    testament: Testament,
    single_chapter: bool,
) -> BookEntry {
    BookEntry {
        position,
        name,
        aliases,
        testament,
        single_chapter,
    }
}

/// The 66 books in canonical order with their accepted names.
///
/// Aliases may collide across entries (`jo`, `fil`); collisions resolve to the
/// first declaring entry unless an override in [`AMBIGUITY_OVERRIDES`] applies.
pub const BOOKS: &[BookEntry] = &[
    book(1, "Gênesis", &["gn", "gen", "genesis", "gênesis"], Old, false),
    book(2, "Êxodo", &["ex", "êx", "exo", "êxodo", "exodo"], Old, false),
    book(3, "Levítico", &["lv", "lev", "levitico", "levítico"], Old, false),
    book(4, "Números", &["nm", "num", "numeros", "números"], Old, false),
    book(5, "Deuteronômio", &["dt", "deu", "deut", "deuteronomio", "deuteronômio"], Old, false),
    book(6, "Josué", &["js", "jos", "josue", "josué"], Old, false),
    book(7, "Juízes", &["jz", "jui", "juizes", "juízes"], Old, false),
    book(8, "Rute", &["rt", "rut", "rute"], Old, false),
    book(9, "1 Samuel", &["1sm", "1 sm", "1sam", "1 sam", "1 samuel"], Old, false),
    book(10, "2 Samuel", &["2sm", "2 sm", "2sam", "2 sam", "2 samuel"], Old, false),
    book(11, "1 Reis", &["1rs", "1 rs", "1re", "1 re", "1 reis"], Old, false),
    book(12, "2 Reis", &["2rs", "2 rs", "2re", "2 re", "2 reis"], Old, false),
    book(13, "1 Crônicas", &["1cr", "1 cr", "1cro", "1 cro", "1 cronicas", "1 crônicas"], Old, false),
    book(14, "2 Crônicas", &["2cr", "2 cr", "2cro", "2 cro", "2 cronicas", "2 crônicas"], Old, false),
    book(15, "Esdras", &["ed", "esd", "esdras"], Old, false),
    book(16, "Neemias", &["ne", "nee", "neemias"], Old, false),
    book(17, "Ester", &["et", "est", "ester"], Old, false),
    book(18, "Jó", &["jó", "jo", "job"], Old, false),
    book(19, "Salmos", &["sl", "sal", "salmo", "salmos"], Old, false),
    book(20, "Provérbios", &["pv", "pro", "prov", "proverbios", "provérbios"], Old, false),
    book(21, "Eclesiastes", &["ec", "ecl", "eclesiastes"], Old, false),
    book(22, "Cantares", &["ct", "can", "cant", "cantares", "cantico", "cântico"], Old, false),
    book(23, "Isaías", &["is", "isa", "isaias", "isaías"], Old, false),
    book(24, "Jeremias", &["jr", "jer", "jeremias"], Old, false),
    book(25, "Lamentações", &["lm", "lam", "lamentacoes", "lamentações"], Old, false),
    book(26, "Ezequiel", &["ez", "eze", "ezequiel"], Old, false),
    book(27, "Daniel", &["dn", "dan", "daniel"], Old, false),
    book(28, "Oséias", &["os", "ose", "oseias", "oséias"], Old, false),
    book(29, "Joel", &["jl", "joe", "joel"], Old, false),
    book(30, "Amós", &["am", "amo", "amos", "amós"], Old, false),
    book(31, "Obadias", &["ob", "oba", "obadias"], Old, true),
    book(32, "Jonas", &["jn", "jon", "jonas"], Old, false),
    book(33, "Miquéias", &["mq", "miq", "miqueias", "miquéias"], Old, false),
    book(34, "Naum", &["na", "nau", "naum"], Old, false),
    book(35, "Habacuque", &["hc", "hab", "habacuque"], Old, false),
    book(36, "Sofonias", &["sf", "sof", "sofonias"], Old, false),
    book(37, "Ageu", &["ag", "age", "ageu"], Old, false),
    book(38, "Zacarias", &["zc", "zac", "zacarias"], Old, false),
    book(39, "Malaquias", &["ml", "mal", "malaquias"], Old, false),
    book(40, "Mateus", &["mt", "mat", "mateus"], New, false),
    book(41, "Marcos", &["mc", "mar", "marcos"], New, false),
    book(42, "Lucas", &["lc", "luc", "lucas"], New, false),
    book(43, "João", &["jo", "joa", "joao", "joão"], New, false),
    book(44, "Atos", &["at", "ato", "atos"], New, false),
    book(45, "Romanos", &["rm", "rom", "romanos"], New, false),
    book(46, "1 Coríntios", &["1co", "1 co", "1cor", "1 cor", "1 corintios", "1 coríntios"], New, false),
    book(47, "2 Coríntios", &["2co", "2 co", "2cor", "2 cor", "2 corintios", "2 coríntios"], New, false),
    book(48, "Gálatas", &["gl", "gal", "galatas", "gálatas"], New, false),
    book(49, "Efésios", &["ef", "efe", "efesios", "efésios"], New, false),
    book(50, "Filipenses", &["fp", "fil", "filipenses"], New, false),
    book(51, "Colossenses", &["cl", "col", "colossenses"], New, false),
    book(52, "1 Tessalonicenses", &["1ts", "1 ts", "1te", "1 te", "1tes", "1 tes", "1 tessalonicenses"], New, false),
    book(53, "2 Tessalonicenses", &["2ts", "2 ts", "2te", "2 te", "2tes", "2 tes", "2 tessalonicenses"], New, false),
    book(54, "1 Timóteo", &["1tm", "1 tm", "1ti", "1 ti", "1tim", "1 tim", "1 timoteo", "1 timóteo"], New, false),
    book(55, "2 Timóteo", &["2tm", "2 tm", "2ti", "2 ti", "2tim", "2 tim", "2 timoteo", "2 timóteo"], New, false),
    book(56, "Tito", &["tt", "tit", "tito"], New, false),
    book(57, "Filemom", &["fm", "fil", "filemom"], New, true),
    book(58, "Hebreus", &["hb", "heb", "hebreus"], New, false),
    book(59, "Tiago", &["tg", "tia", "tiago"], New, false),
    book(60, "1 Pedro", &["1pe", "1 pe", "1pd", "1 pd", "1 pedro"], New, false),
    book(61, "2 Pedro", &["2pe", "2 pe", "2pd", "2 pd", "2 pedro"], New, false),
    book(62, "1 João", &["1jo", "1 jo", "1joa", "1 joa", "1 joao", "1 joão"], New, false),
    book(63, "2 João", &["2jo", "2 jo", "2joa", "2 joa", "2 joao", "2 joão"], New, true),
    book(64, "3 João", &["3jo", "3 jo", "3joa", "3 joa", "3 joao", "3 joão"], New, true),
    book(65, "Judas", &["jd", "jud", "judas"], New, true),
    book(66, "Apocalipse", &["ap", "apo", "apoc", "apocalipse"], New, false),
];

/// Tokens whose resolution is forced regardless of the alias lists.
///
/// Keys are compared against the case-folded input with diacritics kept, so
/// "jo" hits the override while "jó" still reaches Jó through its own name.
/// Bare "jo" defaults to the Gospel, the far more frequently cited book.
pub const AMBIGUITY_OVERRIDES: &[(&str, &str)] = &[("jo", "João")];

static STANDARD: Lazy<BookCatalog> = Lazy::new(|| BookCatalog::new(BOOKS));

/// Lower-cases, decomposes, strips combining diacritical marks and trims.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Lower-cases and composes without dropping diacritics.
fn fold_case(text: &str) -> String {
    text.to_lowercase().nfc().collect::<String>().trim().to_string()
}

/// Read-only lookup structure over a book table.
///
/// All indexes are built once in [`BookCatalog::new`]; there is no mutation
/// API afterwards.
#[derive(Debug)]
pub struct BookCatalog {
    books: &'static [BookEntry],
    /// Normalized canonical name -> entry index.
    by_name: HashMap<String, usize>,
    /// Normalized alias -> index of the first entry declaring it.
    by_alias: HashMap<String, usize>,
    /// Case-folded ambiguous token -> forced entry index.
    overrides: HashMap<String, usize>,
}

impl BookCatalog {
    /// Builds the indexes for `books`, in declaration order.
    pub fn new(books: &'static [BookEntry]) -> Self {
        let mut by_name = HashMap::with_capacity(books.len());
        let mut by_alias = HashMap::new();

        for (idx, entry) in books.iter().enumerate() {
            by_name.entry(normalize_text(entry.name)).or_insert(idx);
            for alias in entry.aliases {
                by_alias.entry(normalize_text(alias)).or_insert(idx);
            }
        }

        let mut overrides = HashMap::new();
        for (token, target) in AMBIGUITY_OVERRIDES {
            match books.iter().position(|b| b.name == *target) {
                Some(idx) => {
                    overrides.insert(fold_case(token), idx);
                }
                None => tracing::debug!(token, target, "override target not in table, skipping"),
            }
        }

        Self {
            books,
            by_name,
            by_alias,
            overrides,
        }
    }

    /// The process-wide catalog over [`BOOKS`].
    pub fn standard() -> &'static BookCatalog {
        &STANDARD
    }

    /// Finds the book a free-form name refers to.
    ///
    /// Resolution order, first match wins:
    /// 1. **Ambiguity override** on the case-folded token.
    /// 2. **Canonical name** on the normalized token.
    /// 3. **Alias**, first declaring entry in table order.
    pub fn find_book_by_name(&self, input: &str) -> Option<&'static BookEntry> {
        let books = self.books;

        if let Some(&idx) = self.overrides.get(&fold_case(input)) {
            return Some(&books[idx]);
        }

        let normalized = normalize_text(input);
        if normalized.is_empty() {
            return None;
        }

        self.by_name
            .get(&normalized)
            .or_else(|| self.by_alias.get(&normalized))
            .map(|&idx| &books[idx])
    }

    /// Looks up an entry by its exact canonical name.
    pub fn get(&self, name: &str) -> Option<&'static BookEntry> {
        let books = self.books;
        books.iter().find(|b| b.name == name)
    }

    /// Whether `name` is exactly one of the canonical names.
    pub fn is_canonical_name(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static BookEntry> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Finds a book in the standard catalog.
pub fn find_book_by_name(input: &str) -> Option<&'static BookEntry> {
    BookCatalog::standard().find_book_by_name(input)
}
