use std::fmt::Debug;

use crate::types::Priority;

/// Returned by [`CalendarQueue::insert`] when the priority is NaN or infinite.
///
/// The rejected payload is handed back to the caller.
///
/// [`CalendarQueue::insert`]: crate::CalendarQueue::insert
#[derive(Clone, PartialEq, thiserror::Error)]
#[error("cannot schedule an event at non-finite priority {priority}")]
pub struct InsertError<T> {
    pub payload: T,
    pub priority: Priority,
}

impl<T> InsertError<T> {
    pub fn into_payload(self) -> T {
        self.payload
    }
}

// payloads need not be Debug
impl<T> Debug for InsertError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertError")
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Rejections from [`CalendarConfig::validate`](crate::CalendarConfig::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_buckets must be at least 1, got {0}")]
    MinBuckets(usize),
    #[error("initial_buckets ({initial}) must be at least min_buckets ({min})")]
    InitialBuckets { initial: usize, min: usize },
    #[error("initial_width must be positive and finite, got {0}")]
    InitialWidth(f64),
    #[error("start_priority must be finite, got {0}")]
    StartPriority(f64),
    #[error("max_samples must be at least 2, got {0}")]
    MaxSamples(usize),
}
