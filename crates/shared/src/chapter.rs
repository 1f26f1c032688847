use serde::{Deserialize, Serialize};

use crate::Testament;

/// One chapter of one book.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRef {
    pub book: String,
    pub abbrev: String,
    pub chapter: u16,
    pub testament: Testament,
}

impl ChapterRef {
    pub fn new(
        book: impl Into<String>,
        abbrev: impl Into<String>,
        chapter: u16,
        testament: Testament,
    ) -> Self {
        Self {
            book: book.into(),
            abbrev: abbrev.into(),
            chapter,
            testament,
        }
    }

    /// Key used by the scripture text service, e.g. `GEN.1`.
    pub fn passage_id(&self) -> String {
        format!("{}.{}", self.abbrev, self.chapter)
    }
}
