//! Tuning knobs for [`CalendarQueue`](crate::CalendarQueue).
//!
//! The defaults reproduce the classic calendar queue: two buckets of width
//! `1.0`, the cursor anchored at priority `0.0`, and at most 25 events sampled
//! per width estimate.

use crate::error::ConfigError;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Bucket count of the empty queue.
    pub initial_buckets: usize,
    /// Bucket width of the empty queue.
    pub initial_width: Priority,
    /// Priority the scan cursor is anchored at before anything is extracted.
    pub start_priority: Priority,
    /// Cap on the number of events drained when re-estimating the width.
    pub max_samples: usize,
    /// Shrinking never takes the bucket count below this.
    pub min_buckets: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            initial_buckets: DEFAULT_NUM_BUCKETS,
            initial_width: DEFAULT_BUCKET_WIDTH,
            start_priority: 0.0,
            max_samples: DEFAULT_MAX_SAMPLES,
            min_buckets: DEFAULT_NUM_BUCKETS,
        }
    }
}

impl CalendarConfig {
    pub fn with_initial_buckets(mut self, initial_buckets: usize) -> Self {
        self.initial_buckets = initial_buckets;
        self
    }

    pub fn with_initial_width(mut self, initial_width: Priority) -> Self {
        self.initial_width = initial_width;
        self
    }

    pub fn with_start_priority(mut self, start_priority: Priority) -> Self {
        self.start_priority = start_priority;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn with_min_buckets(mut self, min_buckets: usize) -> Self {
        self.min_buckets = min_buckets;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_buckets == 0 {
            return Err(ConfigError::MinBuckets(self.min_buckets));
        }
        if self.initial_buckets < self.min_buckets {
            return Err(ConfigError::InitialBuckets {
                initial: self.initial_buckets,
                min: self.min_buckets,
            });
        }
        if !(self.initial_width.is_normal() && self.initial_width > 0.0) {
            return Err(ConfigError::InitialWidth(self.initial_width));
        }
        if !self.start_priority.is_finite() {
            return Err(ConfigError::StartPriority(self.start_priority));
        }
        if self.max_samples < 2 {
            return Err(ConfigError::MaxSamples(self.max_samples));
        }
        Ok(())
    }
}
