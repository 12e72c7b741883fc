//! The calendar queue.
//!
//! Events are hashed by priority into an array of buckets, each one a sorted
//! list covering a `bucket_width` wide slice of priority space (modulo the
//! number of buckets, like the days of a year on a calendar). Extraction
//! walks the buckets from where the last extraction left off, so a workload
//! whose priorities trend upwards pays close to O(1) per operation.
//!
//! # Ownership and threads
//!
//! A [`CalendarQueue`] has a single owner. Every mutating operation takes
//! `&mut self`, including the resizes that run inside [`insert`] and
//! [`extract`], so the borrow checker already serializes access. There is no
//! internal locking; share a queue between threads by wrapping it in a
//! `Mutex` and holding the lock for the whole operation.
//!
//! [`insert`]: CalendarQueue::insert
//! [`extract`]: CalendarQueue::extract

mod bucket;
pub mod resize;

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::config::CalendarConfig;
use crate::error::{ConfigError, InsertError};
use crate::event::Event;
use crate::types::*;

use self::bucket::BucketStore;

pub use resize::width_from_samples;

/// A priority queue for discrete-event scheduling.
///
/// [`extract`](Self::extract) always returns the resident entry with the
/// smallest priority; entries of equal priority come out in insertion order.
///
/// # Examples
/// ```
/// # use calqueue::CalendarQueue;
/// let mut queue = CalendarQueue::new();
///
/// queue.insert("c", 3.0).unwrap();
/// queue.insert("a", 1.0).unwrap();
/// queue.insert("b", 1.5).unwrap();
///
/// assert_eq!(queue.extract(), Some(("a", 1.0)));
/// assert_eq!(queue.extract(), Some(("b", 1.5)));
/// assert_eq!(queue.extract(), Some(("c", 3.0)));
/// assert_eq!(queue.extract(), None);
/// ```
pub struct CalendarQueue<T> {
    store: BucketStore<T>,
    /// Bucket the scan cursor rests on.
    last_bucket: usize,
    /// Exclusive upper end of the slice of priority space being scanned.
    bucket_top: Priority,
    /// Priority of the last extracted event. Every resident event is at
    /// least this large.
    last_prio: Priority,
    top_threshold: usize,
    // may be negative, which disables shrinking
    bot_threshold: isize,
    resize_enabled: bool,
    config: CalendarConfig,
}

impl<T> CalendarQueue<T> {
    /// Creates an empty queue with two buckets of width `1.0`, the cursor
    /// anchored at priority `0.0`.
    pub fn new() -> Self {
        Self::from_valid_config(CalendarConfig::default())
    }

    /// Creates an empty queue tuned by `config`.
    pub fn with_config(config: CalendarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: CalendarConfig) -> Self {
        let mut queue = CalendarQueue {
            store: BucketStore::new(config.initial_buckets, config.initial_width),
            last_bucket: 0,
            bucket_top: 0.0,
            last_prio: config.start_priority,
            top_threshold: 0,
            bot_threshold: 0,
            resize_enabled: true,
            config,
        };
        queue.set_thresholds();
        queue.anchor(queue.last_prio);
        queue
    }

    /// Schedules `payload` at `priority`.
    ///
    /// Negative priorities are accepted and ordered like any other. NaN and
    /// infinities cannot be placed on the calendar and are rejected, handing
    /// the payload back inside the error.
    ///
    /// May grow the bucket array before returning.
    ///
    /// # Examples
    /// ```
    /// # use calqueue::CalendarQueue;
    /// let mut queue = CalendarQueue::new();
    ///
    /// assert!(queue.insert("now", -2.5).is_ok());
    ///
    /// let err = queue.insert("never", f64::NAN).unwrap_err();
    /// assert_eq!(err.into_payload(), "never");
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn insert(&mut self, payload: T, priority: Priority) -> Result<(), InsertError<T>> {
        if !priority.is_finite() {
            return Err(InsertError { payload, priority });
        }

        self.store.insert_back(Event::new(payload, priority));
        // an event earlier than the cursor: move the cursor back so the scan
        // cannot step over it
        if priority < self.last_prio {
            self.anchor(priority);
        }

        if self.len() > self.top_threshold {
            self.resize(self.num_buckets() * 2);
        }
        Ok(())
    }

    /// Schedules an [`Event`]. See [`insert`](Self::insert).
    pub fn insert_event(&mut self, event: Event<T>) -> Result<(), InsertError<T>> {
        self.insert(event.payload, event.priority)
    }

    /// Removes and returns the entry with the smallest priority, or `None`
    /// if the queue is empty.
    ///
    /// May shrink the bucket array before returning.
    pub fn extract(&mut self) -> Option<(T, Priority)> {
        self.extract_event().map(Event::into_parts)
    }

    /// Like [`extract`](Self::extract), returning the [`Event`] whole.
    pub fn extract_event(&mut self) -> Option<Event<T>> {
        if self.is_empty() {
            return None;
        }

        let num_buckets = self.num_buckets();
        let width = self.bucket_width();

        // walk one year of the calendar from the cursor
        let mut i = self.last_bucket;
        loop {
            if self
                .store
                .head_priority(i)
                .is_some_and(|p| p < self.bucket_top)
            {
                return self.take_head(i);
            }
            i += 1;
            if i == num_buckets {
                i = 0;
            }
            self.bucket_top += width;
            if i == self.last_bucket {
                break;
            }
        }

        // nothing due within a year: the minimum is the smallest bucket head
        let (i, p) = self.store.min_head()?;
        trace!(
            bucket = i,
            priority = p,
            from = self.last_prio,
            "calendar scan wrapped, jumping to minimum"
        );
        self.anchor(p);
        self.take_head(i)
    }

    fn take_head(&mut self, bucket: usize) -> Option<Event<T>> {
        let event = self.store.unlink_head(bucket)?;
        self.last_bucket = bucket;
        self.last_prio = event.priority;

        if (self.len() as isize) < self.bot_threshold
            && self.num_buckets() / 2 >= self.config.min_buckets
        {
            self.resize(self.num_buckets() / 2);
        }
        Some(event)
    }

    /// Returns the priority [`extract`](Self::extract) would return next,
    /// without removing anything.
    ///
    /// # Examples
    /// ```
    /// # use calqueue::CalendarQueue;
    /// let mut queue = CalendarQueue::new();
    /// assert_eq!(queue.peek_priority(), None);
    ///
    /// queue.insert((), 8.0).unwrap();
    /// queue.insert((), 4.0).unwrap();
    /// assert_eq!(queue.peek_priority(), Some(4.0));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn peek_priority(&self) -> Option<Priority> {
        if self.is_empty() {
            return None;
        }

        let num_buckets = self.num_buckets();
        let mut i = self.last_bucket;
        let mut top = self.bucket_top;
        for _ in 0..num_buckets {
            if let Some(p) = self.store.head_priority(i).filter(|&p| p < top) {
                return Some(p);
            }
            i = (i + 1) % num_buckets;
            top += self.bucket_width();
        }
        self.store.min_head().map(|(_, p)| p)
    }

    /// Points the scan cursor at the bucket and slice holding `priority`.
    fn anchor(&mut self, priority: Priority) {
        self.last_prio = priority;
        self.last_bucket = self.store.index_of(priority);
        self.bucket_top = (self.store.slot_of(priority) + 1.5) * self.bucket_width();
    }

    fn set_thresholds(&mut self) {
        let num_buckets = self.num_buckets();
        self.top_threshold = 2 * num_buckets;
        self.bot_threshold = num_buckets as isize / 2 - 2;
    }

    /// Removes every event and restores the configured initial layout.
    pub fn clear(&mut self) {
        self.store
            .reset(self.config.initial_buckets, self.config.initial_width);
        self.resize_enabled = true;
        self.set_thresholds();
        self.anchor(self.config.start_priority);
    }

    /// Extracts every event in ascending priority order.
    ///
    /// Events the iterator has not yielded when it is dropped stay queued.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }

    /// Returns the number of resident events.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.store.num_buckets()
    }

    #[inline]
    pub fn bucket_width(&self) -> Priority {
        self.store.width()
    }

    /// Priority of the most recently extracted event, or of the earliest
    /// event inserted behind it since.
    #[inline]
    pub fn last_priority(&self) -> Priority {
        self.last_prio
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }
}

impl<T> Default for CalendarQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CalendarQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarQueue")
            .field("len", &self.len())
            .field("num_buckets", &self.num_buckets())
            .field("bucket_width", &self.bucket_width())
            .field("last_bucket", &self.last_bucket)
            .field("last_prio", &self.last_prio)
            .field("bucket_top", &self.bucket_top)
            .finish_non_exhaustive()
    }
}

/// Iterator draining a [`CalendarQueue`] in priority order.
///
/// This `struct` is created by [`CalendarQueue::drain`].
pub struct Drain<'a, T> {
    queue: &'a mut CalendarQueue<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = (T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.extract()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}
