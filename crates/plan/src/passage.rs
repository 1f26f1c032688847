use std::fmt;

use lectio_shared::ChapterRef;

/// A run of consecutive chapters from one book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassageGroup<'a> {
    pub book: &'a str,
    pub start: u16,
    pub end: u16,
}

impl fmt::Display for PassageGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{} {}", self.book, self.start)
        } else {
            write!(f, "{} {}-{}", self.book, self.start, self.end)
        }
    }
}

/// Collapses chapters into runs, keeping input order. A new run starts on a
/// change of book or whenever the chapter is not the previous one plus one.
pub fn group(passages: &[ChapterRef]) -> Vec<PassageGroup<'_>> {
    let mut groups: Vec<PassageGroup<'_>> = Vec::new();

    for passage in passages {
        if let Some(current) = groups.last_mut() {
            if current.book == passage.book && current.end.checked_add(1) == Some(passage.chapter)
            {
                current.end = passage.chapter;
                continue;
            }
        }

        groups.push(PassageGroup {
            book: &passage.book,
            start: passage.chapter,
            end: passage.chapter,
        });
    }

    groups
}

/// Human readable reading, e.g. `Genesis 50, Exodus 1-2`. Empty for no passages.
pub fn describe(passages: &[ChapterRef]) -> String {
    group(passages)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
