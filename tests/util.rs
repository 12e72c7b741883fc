use calqueue::util::arena::Arena;

// ---- Arena tests ----

#[test]
fn arena_alloc_take_reuse() {
    let mut arena: Arena<&str> = Arena::new();
    let a = arena.alloc("a");
    let b = arena.alloc("b");
    assert_ne!(a, b);

    assert_eq!(arena.take(a), "a");
    let c = arena.alloc("c");
    assert_eq!(c, a); // reused
    assert_eq!(arena[c], "c");
    assert_eq!(arena[b], "b");
}

#[test]
fn arena_get_set() {
    let mut arena: Arena<String> = Arena::new();
    let idx = arena.alloc(String::new());
    *arena.get_mut(idx).unwrap() = "hello".to_string();
    assert_eq!(arena.get(idx).map(String::as_str), Some("hello"));
    assert_eq!(&arena[idx], "hello");
}

#[test]
fn arena_vacant_slot() {
    let mut arena: Arena<u8> = Arena::new();
    let idx = arena.alloc(7);
    arena.take(idx);
    assert_eq!(arena.get(idx), None);
    assert_eq!(arena.get(idx + 1), None);
}

#[test]
#[should_panic(expected = "is vacant")]
fn arena_take_twice_panics() {
    let mut arena: Arena<u8> = Arena::new();
    let idx = arena.alloc(1);
    arena.take(idx);
    arena.take(idx);
}

#[test]
fn arena_len_counts_live_values() {
    let mut arena: Arena<u64> = Arena::new();
    assert!(arena.is_empty());
    let a = arena.alloc(1);
    arena.alloc(2);
    assert_eq!(arena.len(), 2);

    arena.take(a);
    assert_eq!(arena.len(), 1);

    arena.clear();
    assert_eq!(arena.len(), 0);
    assert!(arena.is_empty());
}
