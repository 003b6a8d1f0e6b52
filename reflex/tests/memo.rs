//! Tests for state cells and revision-keyed memoization.

use reflex::memo::Memo;
use reflex::state::State;

#[test]
fn test_state_dirty_and_revision() {
    let count = State::new(0);
    assert!(!count.is_dirty());
    assert_eq!(count.revision(), 0);

    count.set(1);
    assert!(count.is_dirty());
    assert_eq!(count.revision(), 1);

    count.clear_dirty();
    count.update(|c| *c += 1);
    assert_eq!(count.get(), 2);
    assert_eq!(count.revision(), 2);
}

#[test]
fn test_state_clones_share_storage() {
    let a = State::new(String::from("x"));
    let b = a.clone();
    b.set("y".to_string());
    assert_eq!(a.get(), "y");
    assert_eq!(a.revision(), b.revision());
}

#[test]
fn test_memo_computes_lazily_once() {
    let items = State::new(vec![1u64, 2, 3]);
    let total = Memo::new(&items, |v| v.iter().sum::<u64>());

    assert_eq!(total.computations(), 0);
    assert_eq!(total.get(), 6);
    assert_eq!(total.get(), 6);
    assert_eq!(total.get(), 6);
    assert_eq!(total.computations(), 1);
}

#[test]
fn test_memo_recomputes_on_source_change() {
    let n = State::new(10u64);
    let heavy = Memo::new(&n, |n| (1..=*n).sum::<u64>());

    assert_eq!(heavy.get(), 55);
    n.set(4);
    assert_eq!(heavy.get(), 10);
    assert_eq!(heavy.computations(), 2);
}

#[test]
fn test_unrelated_state_does_not_invalidate_memo() {
    let name = State::new(String::from("Ada"));
    let unrelated_counter = State::new(0);
    let greeting = Memo::new(&name, |n| format!("Hello, {n}!"));

    assert_eq!(greeting.get(), "Hello, Ada!");
    for _ in 0..100 {
        unrelated_counter.update(|c| *c += 1);
        greeting.get();
    }
    // The child render never re-ran while only the parent counter changed.
    assert_eq!(greeting.computations(), 1);
}

#[test]
fn test_memo_embeds_in_derived_debug_structs() {
    #[derive(Debug)]
    struct Preview {
        greeting: Memo<String, String>,
    }

    let name = State::new(String::from("Ada"));
    let preview = Preview {
        greeting: Memo::new(&name, |n| format!("Hello, {n}!")),
    };
    preview.greeting.get();

    let rendered = format!("{preview:?}");
    assert!(rendered.contains("Memo"));
    assert!(rendered.contains("computations: 1"));
}

#[test]
fn test_memo_clone_shares_cache() {
    let items = State::new(vec!["a", "b"]);
    let len = Memo::new(&items, |v| v.len());
    let clone = len.clone();

    assert_eq!(len.get(), 2);
    assert_eq!(clone.get(), 2);
    assert_eq!(clone.computations(), 1);
}
