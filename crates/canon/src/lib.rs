//! Canon index: the ordered catalog of every chapter from Genesis 1 to
//! Revelation 22.
//!
//! The book table is a `static`; the per-scope chapter sequences are built on
//! first use and shared read-only afterwards.

mod book;

pub use book::Book;

use lectio_shared::{ChapterRef, TestamentScope};
use std::sync::LazyLock;

pub const OLD_TESTAMENT_CHAPTERS: usize = 929;
pub const NEW_TESTAMENT_CHAPTERS: usize = 260;
pub const TOTAL_CHAPTERS: usize = OLD_TESTAMENT_CHAPTERS + NEW_TESTAMENT_CHAPTERS;

static OLD_TESTAMENT: LazyLock<Vec<ChapterRef>> =
    LazyLock::new(|| collect_chapters(TestamentScope::Old));
static NEW_TESTAMENT: LazyLock<Vec<ChapterRef>> =
    LazyLock::new(|| collect_chapters(TestamentScope::New));
static WHOLE_BIBLE: LazyLock<Vec<ChapterRef>> =
    LazyLock::new(|| collect_chapters(TestamentScope::Both));

fn collect_chapters(scope: TestamentScope) -> Vec<ChapterRef> {
    book::BOOKS
        .iter()
        .filter(|book| scope.includes(book.testament))
        .flat_map(|book| {
            (1..=book.chapters).map(move |chapter| {
                ChapterRef::new(book.name, book.abbrev, chapter, book.testament)
            })
        })
        .collect()
}

/// Every chapter in `scope`, in canonical order. `None` means both testaments.
pub fn chapters(scope: impl Into<Option<TestamentScope>>) -> &'static [ChapterRef] {
    match scope.into().unwrap_or_default() {
        TestamentScope::Old => OLD_TESTAMENT.as_slice(),
        TestamentScope::New => NEW_TESTAMENT.as_slice(),
        TestamentScope::Both => WHOLE_BIBLE.as_slice(),
    }
}

/// Same as [`chapters`] for a scope given as text (`OT`, `NT`, `BOTH`).
pub fn chapters_for(scope: &str) -> lectio_shared::Result<&'static [ChapterRef]> {
    Ok(chapters(TestamentScope::parse(scope)?))
}

pub fn chapter_count(scope: impl Into<Option<TestamentScope>>) -> usize {
    chapters(scope).len()
}

pub fn books() -> &'static [Book] {
    &book::BOOKS
}

/// Looks a book up by its abbreviation, ignoring case.
pub fn book(abbrev: &str) -> Option<&'static Book> {
    book::BOOKS
        .iter()
        .find(|book| book.abbrev.eq_ignore_ascii_case(abbrev.trim()))
}
