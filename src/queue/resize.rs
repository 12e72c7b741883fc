//! Adaptive resizing.
//!
//! The bucket array doubles once the queue holds more than two events per
//! bucket and halves once it holds fewer than `n / 2 - 2`. Each rebuild picks
//! a fresh bucket width from a sample of the smallest resident priorities, so
//! that a bucket holds about three events' worth of priority space.

use tracing::debug;

use super::CalendarQueue;
use crate::types::Priority;

/// Computes a bucket width from priorities sampled in ascending order.
///
/// Averages the gaps between consecutive samples, drops the gaps at least
/// twice that average as idle stretches, and returns three times the average
/// of what is left. Returns `None` when no usable width comes out: fewer than
/// two samples, every gap dropped (which is what happens when all samples are
/// equal), or a result that is zero or not a normal float.
///
/// # Examples
/// ```
/// # use calqueue::queue::width_from_samples;
/// // the 10.0 gap is an outlier against a mean of 3.25
/// assert_eq!(width_from_samples(&[0.0, 1.0, 2.0, 3.0, 13.0]), Some(3.0));
/// assert_eq!(width_from_samples(&[5.0, 5.0, 5.0]), None);
/// ```
pub fn width_from_samples(samples: &[Priority]) -> Option<Priority> {
    if samples.len() < 2 {
        return None;
    }
    let gaps: Vec<Priority> = samples.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = gaps.iter().sum::<Priority>() / gaps.len() as Priority;

    let (sum, count) = gaps
        .iter()
        .filter(|&&gap| gap < 2.0 * mean)
        .fold((0.0, 0usize), |(sum, count), &gap| (sum + gap, count + 1));
    if count == 0 {
        return None;
    }

    let width = 3.0 * sum / count as Priority;
    (width.is_normal() && width > 0.0).then_some(width)
}

impl<T> CalendarQueue<T> {
    /// Rebuilds the bucket array with `new_num_buckets` buckets (never fewer
    /// than the configured minimum) and a freshly estimated width.
    ///
    /// Insertion and extraction call this on their own when the queue crosses
    /// its growth or shrink threshold. Nothing happens while a width estimate
    /// is sampling the queue.
    pub fn force_resize(&mut self, new_num_buckets: usize) {
        self.resize(new_num_buckets);
    }

    pub(super) fn resize(&mut self, new_num_buckets: usize) {
        if !self.resize_enabled {
            return;
        }
        let new_num_buckets = new_num_buckets.max(self.config.min_buckets);
        let old_num_buckets = self.num_buckets();
        let old_width = self.bucket_width();

        let width = self.estimate_width();
        self.local_init(new_num_buckets, width);

        debug!(
            len = self.len(),
            old_num_buckets,
            new_num_buckets,
            old_width,
            new_width = width,
            "resized calendar queue"
        );
    }

    /// Picks a bucket width by sampling the smallest resident priorities.
    ///
    /// The sampled events are extracted through the normal path and then put
    /// back ahead of any equal-priority entries, so neither the queue contents
    /// nor the cursor change.
    fn estimate_width(&mut self) -> Priority {
        let len = self.len();
        if len < 2 {
            return self.config.initial_width;
        }
        let num_samples = if len <= 5 { len } else { 5 + len / 10 };
        let num_samples = num_samples.min(self.config.max_samples);

        let cursor = (self.last_prio, self.last_bucket, self.bucket_top);
        self.resize_enabled = false;

        let mut sampled = Vec::with_capacity(num_samples);
        while sampled.len() < num_samples {
            match self.extract_event() {
                Some(event) => sampled.push(event),
                None => break,
            }
        }
        let priorities: Vec<Priority> = sampled.iter().map(|e| e.priority).collect();
        // reversed, so each event lands in front of the ones sampled after it
        for event in sampled.into_iter().rev() {
            self.store.insert_front(event);
        }

        (self.last_prio, self.last_bucket, self.bucket_top) = cursor;
        self.resize_enabled = true;

        width_from_samples(&priorities).unwrap_or_else(|| self.bucket_width())
    }

    /// Swaps in `num_buckets` empty buckets of `width`, re-anchors the cursor
    /// at the last extracted priority and relinks every resident event.
    fn local_init(&mut self, num_buckets: usize, width: Priority) {
        self.store.rebuild(num_buckets, width);
        self.set_thresholds();
        self.anchor(self.last_prio);
    }
}
