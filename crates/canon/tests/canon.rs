use lectio_canon::{TOTAL_CHAPTERS, chapter_count, chapters};
use lectio_shared::{Testament, TestamentScope};

#[test]
fn repeated_calls_return_equal_sequences() {
    let first = chapters(TestamentScope::Both).to_vec();
    let second = chapters(TestamentScope::Both).to_vec();

    assert_eq!(first, second);
}

#[test]
fn concurrent_first_use_yields_one_sequence() {
    let handles = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let scope = match i % 3 {
                    0 => TestamentScope::Old,
                    1 => TestamentScope::New,
                    _ => TestamentScope::Both,
                };
                (scope, chapters(scope).to_vec())
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let (scope, sequence) = handle.join().unwrap();
        assert_eq!(sequence, chapters(scope));
    }
}

#[test]
fn testament_tags_match_scope() {
    assert!(
        chapters(TestamentScope::Old)
            .iter()
            .all(|c| c.testament == Testament::Old)
    );
    assert!(
        chapters(TestamentScope::New)
            .iter()
            .all(|c| c.testament == Testament::New)
    );
}

#[test]
fn counts_per_scope() {
    assert_eq!(chapter_count(None), TOTAL_CHAPTERS);
    assert_eq!(chapter_count(TestamentScope::Old), 929);
    assert_eq!(chapter_count(TestamentScope::New), 260);
}

#[test]
fn malachi_is_last_old_testament_chapter() {
    let old = chapters(TestamentScope::Old);
    let last = old.last().unwrap();

    assert_eq!(last.book, "Malachi");
    assert_eq!(last.chapter, 4);
    assert_eq!(last.passage_id(), "MAL.4");
}
