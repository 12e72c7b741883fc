use crate::event::Event;
use crate::types::*;
use crate::util::arena::Arena;

/// An event resident in the queue, linked to the next entry of its bucket.
pub(crate) struct Node<T> {
    pub event: Event<T>,
    pub next: Option<NodeIdx>,
}

/// The array of buckets. Each bucket is a singly-linked list threaded
/// through `nodes`, sorted by ascending priority.
///
/// Priority `p` lives in bucket `floor(p / width)` taken modulo the bucket
/// count with Euclidean remainder, so negative priorities wrap the same way
/// positive ones do.
pub(crate) struct BucketStore<T> {
    nodes: Arena<Node<T>>,
    heads: Vec<Option<NodeIdx>>,
    width: Priority,
}

impl<T> BucketStore<T> {
    pub fn new(num_buckets: usize, width: Priority) -> Self {
        BucketStore {
            nodes: Arena::new(),
            heads: vec![None; num_buckets],
            width,
        }
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub fn width(&self) -> Priority {
        self.width
    }

    /// Number of resident events.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The (unwrapped) calendar slot a priority falls in.
    #[inline]
    pub fn slot_of(&self, priority: Priority) -> Priority {
        (priority / self.width).floor()
    }

    pub fn index_of(&self, priority: Priority) -> usize {
        let slot = self.slot_of(priority);
        // the quotient overflowed; every such priority shares bucket 0
        if !slot.is_finite() {
            return 0;
        }
        // slot is integral, so the remainder is exact and lies in 0..n
        slot.rem_euclid(self.num_buckets() as f64) as usize
    }

    /// Insert after every resident entry of equal priority.
    pub fn insert_back(&mut self, event: Event<T>) {
        let idx = NodeIdx(self.nodes.alloc(Node { event, next: None }));
        self.link_back(idx);
    }

    /// Insert ahead of every resident entry of equal priority.
    pub fn insert_front(&mut self, event: Event<T>) {
        let idx = NodeIdx(self.nodes.alloc(Node { event, next: None }));
        let priority = self.nodes[idx.0].event.priority;
        self.link(idx, |other| other >= priority);
    }

    fn link_back(&mut self, idx: NodeIdx) {
        let priority = self.nodes[idx.0].event.priority;
        self.link(idx, |other| other > priority);
    }

    // Splice `idx` in front of the first entry for which `goes_before` holds.
    fn link(&mut self, idx: NodeIdx, goes_before: impl Fn(Priority) -> bool) {
        let bucket = self.index_of(self.nodes[idx.0].event.priority);

        let mut prev: Option<NodeIdx> = None;
        let mut cur = self.heads[bucket];
        while let Some(c) = cur {
            if goes_before(self.nodes[c.0].event.priority) {
                break;
            }
            prev = cur;
            cur = self.nodes[c.0].next;
        }

        self.nodes[idx.0].next = cur;
        match prev {
            Some(p) => self.nodes[p.0].next = Some(idx),
            None => self.heads[bucket] = Some(idx),
        }
    }

    #[inline]
    pub fn head_priority(&self, bucket: usize) -> Option<Priority> {
        self.heads[bucket].map(|h| self.nodes[h.0].event.priority)
    }

    /// Unlink and return the first event of `bucket`.
    pub fn unlink_head(&mut self, bucket: usize) -> Option<Event<T>> {
        let head = self.heads[bucket]?;
        let node = self.nodes.take(head.0);
        self.heads[bucket] = node.next;
        Some(node.event)
    }

    /// Linear scan over every bucket head for the smallest priority.
    pub fn min_head(&self) -> Option<(usize, Priority)> {
        (0..self.num_buckets())
            .filter_map(|bucket| self.head_priority(bucket).map(|p| (bucket, p)))
            .reduce(|best, cur| if cur.1 < best.1 { cur } else { best })
    }

    /// Swap in an empty array of `num_buckets` buckets of `width` and relink
    /// every resident event into it.
    ///
    /// Old buckets are visited from the highest index down, each in its own
    /// order, so entries of equal priority keep their relative order.
    pub fn rebuild(&mut self, num_buckets: usize, width: Priority) {
        let old_heads = std::mem::replace(&mut self.heads, vec![None; num_buckets]);
        self.width = width;

        let mut resident = Vec::with_capacity(self.len());
        for head in old_heads.into_iter().rev() {
            let mut cur = head;
            while let Some(c) = cur {
                resident.push(c);
                cur = self.nodes[c.0].next;
            }
        }

        for idx in resident {
            self.link_back(idx);
        }
    }

    /// Drop every resident event and reset to `num_buckets` of `width`.
    pub fn reset(&mut self, num_buckets: usize, width: Priority) {
        self.nodes.clear();
        self.heads = vec![None; num_buckets];
        self.width = width;
    }
}
