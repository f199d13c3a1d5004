/// Passage lookup module.
///
/// Parses canonical references into structured [`PassageRef`]s and serves
/// verse text from a Bible data file.
///
/// [`PassageRef`]: crate::types::PassageRef
mod lookup;
mod reference;
mod store;

pub use lookup::{find_verses, format_verses};
pub use reference::parse_passage_ref;
pub use store::{
    check_bible_status, default_bible_path, JsonPassageStore, PassageStore, DEFAULT_BIBLE_FILE,
};
