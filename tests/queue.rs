use calqueue::{CalendarQueue, Event};

fn drain_priorities<T>(queue: &mut CalendarQueue<T>) -> Vec<f64> {
    queue.drain().map(|(_, p)| p).collect()
}

// ---------------------------------------------------------------------------
// Basic ordering
// ---------------------------------------------------------------------------

#[test]
fn extract_from_empty_queue() {
    let mut q: CalendarQueue<u32> = CalendarQueue::new();
    assert!(q.is_empty());
    assert_eq!(q.extract(), None);
    assert_eq!(q.extract_event(), None);
    assert_eq!(q.peek_priority(), None);
}

#[test]
fn fresh_queue_layout() {
    let q: CalendarQueue<()> = CalendarQueue::default();
    assert_eq!(q.num_buckets(), 2);
    assert_eq!(q.bucket_width(), 1.0);
    assert_eq!(q.last_priority(), 0.0);
    assert_eq!(q.len(), 0);
}

#[test]
fn five_inserts_extract_in_order() {
    let mut q = CalendarQueue::new();
    for p in [3.0, 1.0, 4.0, 1.5, 2.0] {
        q.insert(p.to_string(), p).unwrap();
    }
    assert_eq!(q.len(), 5);

    for expected in [1.0, 1.5, 2.0, 3.0, 4.0] {
        let (payload, p) = q.extract().unwrap();
        assert_eq!(p, expected);
        assert_eq!(payload, expected.to_string());
    }
    assert_eq!(q.extract(), None);
    assert!(q.is_empty());
}

#[test]
fn equal_priorities_are_fifo() {
    let mut q = CalendarQueue::new();
    q.insert("A", 7.0).unwrap();
    q.insert("B", 7.0).unwrap();
    q.insert("C", 7.0).unwrap();

    assert_eq!(q.extract(), Some(("A", 7.0)));
    assert_eq!(q.extract(), Some(("B", 7.0)));
    assert_eq!(q.extract(), Some(("C", 7.0)));
    assert_eq!(q.extract(), None);
}

#[test]
fn ties_interleaved_with_other_priorities() {
    let mut q = CalendarQueue::new();
    q.insert(0, 2.0).unwrap();
    q.insert(1, 1.0).unwrap();
    q.insert(2, 2.0).unwrap();
    q.insert(3, 3.0).unwrap();
    q.insert(4, 2.0).unwrap();

    let order: Vec<i32> = q.drain().map(|(id, _)| id).collect();
    assert_eq!(order, vec![1, 0, 2, 4, 3]);
}

#[test]
fn len_tracks_inserts_minus_extracts() {
    let mut q = CalendarQueue::new();
    for i in 0..40 {
        q.insert(i, (i * 7 % 13) as f64).unwrap();
    }
    for _ in 0..15 {
        q.extract().unwrap();
    }
    assert_eq!(q.len(), 25);
    assert_eq!(q.drain().count(), 25);
    assert_eq!(q.len(), 0);
    assert_eq!(q.extract(), None);
}

#[test]
fn sparse_priorities_far_apart() {
    let mut q = CalendarQueue::new();
    for p in [1.0e6, 1.0, 5.0e5, 2.0, 1.0e6 + 0.5] {
        q.insert((), p).unwrap();
    }
    assert_eq!(drain_priorities(&mut q), vec![1.0, 2.0, 5.0e5, 1.0e6, 1.0e6 + 0.5]);
}

#[test]
fn event_api() {
    let mut q = CalendarQueue::new();
    q.insert_event(Event::new('x', 4.0)).unwrap();
    q.insert_event(('y', 2.0).into()).unwrap();

    let first = q.extract_event().unwrap();
    assert_eq!(first, Event::new('y', 2.0));
    assert_eq!(q.extract_event().map(Event::into_parts), Some(('x', 4.0)));
}

// ---------------------------------------------------------------------------
// Cursor behaviour
// ---------------------------------------------------------------------------

#[test]
fn last_priority_follows_extraction() {
    let mut q = CalendarQueue::new();
    q.insert((), 2.5).unwrap();
    q.insert((), 6.0).unwrap();

    q.extract();
    assert_eq!(q.last_priority(), 2.5);
    q.extract();
    assert_eq!(q.last_priority(), 6.0);
}

/// An event scheduled before the last extracted one still comes out first.
#[test]
fn insert_behind_cursor() {
    let mut q = CalendarQueue::new();
    q.insert("late", 10.2).unwrap();
    q.insert("later", 10.8).unwrap();
    assert_eq!(q.extract(), Some(("late", 10.2)));

    q.insert("past", 3.0).unwrap();
    assert_eq!(q.last_priority(), 3.0);
    assert_eq!(q.peek_priority(), Some(3.0));
    assert_eq!(q.extract(), Some(("past", 3.0)));
    assert_eq!(q.extract(), Some(("later", 10.8)));
}

#[test]
fn peek_matches_extract() {
    let mut q = CalendarQueue::new();
    for (i, p) in [9.0, 0.5, 33.0, 0.25, 12.0, 12.0, 100.0, 4.0].into_iter().enumerate() {
        q.insert(i, p).unwrap();
    }
    while let Some(peeked) = q.peek_priority() {
        let len = q.len();
        let (_, p) = q.extract().unwrap();
        assert_eq!(peeked, p);
        assert_eq!(q.len(), len - 1);
    }
}

// ---------------------------------------------------------------------------
// Priority policy
// ---------------------------------------------------------------------------

#[test]
fn negative_priorities() {
    let mut q = CalendarQueue::new();
    for p in [-3.5, 2.0, -10.0, 0.0, -0.25, -1.0e3] {
        q.insert((), p).unwrap();
    }
    assert_eq!(
        drain_priorities(&mut q),
        vec![-1.0e3, -10.0, -3.5, -0.25, 0.0, 2.0]
    );
}

#[test]
fn negative_priorities_across_resizes() {
    let mut q = CalendarQueue::new();
    for i in 0..60 {
        q.insert(i, -(i as f64) * 1.25).unwrap();
    }
    assert!(q.num_buckets() > 2);

    let got = drain_priorities(&mut q);
    let mut expected: Vec<f64> = (0..60).map(|i| -(i as f64) * 1.25).collect();
    expected.reverse();
    assert_eq!(got, expected);
}

#[test]
fn non_finite_priorities_are_rejected() {
    let mut q = CalendarQueue::new();
    q.insert("ok", 1.0).unwrap();

    for p in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = q.insert("bad", p).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
        assert_eq!(err.into_payload(), "bad");
    }
    assert_eq!(q.len(), 1);
    assert_eq!(q.extract(), Some(("ok", 1.0)));
}

#[test]
fn extreme_magnitudes() {
    let mut q = CalendarQueue::new();
    for p in [f64::MAX, 1.0, -f64::MAX, 1.0e300, 0.0] {
        q.insert((), p).unwrap();
    }
    assert_eq!(
        drain_priorities(&mut q),
        vec![-f64::MAX, 0.0, 1.0, 1.0e300, f64::MAX]
    );
}

// ---------------------------------------------------------------------------
// clear / drain / Debug
// ---------------------------------------------------------------------------

#[test]
fn clear_restores_initial_layout() {
    let mut q = CalendarQueue::new();
    for i in 0..30 {
        q.insert(i, i as f64 * 3.0).unwrap();
    }
    q.extract();
    q.clear();

    assert!(q.is_empty());
    assert_eq!(q.num_buckets(), 2);
    assert_eq!(q.bucket_width(), 1.0);
    assert_eq!(q.last_priority(), 0.0);

    q.insert(99, 0.5).unwrap();
    assert_eq!(q.extract(), Some((99, 0.5)));
}

#[test]
fn partial_drain_keeps_the_rest() {
    let mut q = CalendarQueue::new();
    for p in [5.0, 1.0, 3.0, 2.0, 4.0] {
        q.insert((), p).unwrap();
    }
    {
        let mut drain = q.drain();
        assert_eq!(drain.len(), 5);
        assert_eq!(drain.next(), Some(((), 1.0)));
        assert_eq!(drain.next(), Some(((), 2.0)));
        assert_eq!(drain.size_hint(), (3, Some(3)));
    }
    assert_eq!(q.len(), 3);
    assert_eq!(q.extract(), Some(((), 3.0)));
}

#[test]
fn debug_does_not_need_debug_payloads() {
    struct Opaque;
    let mut q = CalendarQueue::new();
    q.insert(Opaque, 1.0).unwrap();
    let s = format!("{q:?}");
    assert!(s.starts_with("CalendarQueue"));
    assert!(s.contains("len: 1"));
}

#[test]
fn queue_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<CalendarQueue<String>>();
}
