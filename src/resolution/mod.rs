/// Reference resolution module.
///
/// Turns free-form, abbreviation-laden citations ("1 co 13", "gn 2.8 a 3.3")
/// into canonical `Book Chapter:Verse` strings. Resolution is total: anything
/// that cannot be matched is passed through verbatim.
mod chapter_verse;
mod resolver;

pub use chapter_verse::parse_chapter_verse;
pub use resolver::{normalize_reference, ReferenceResolver};
