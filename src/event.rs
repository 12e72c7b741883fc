use crate::types::Priority;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A payload scheduled at a priority.
///
/// Equal priorities are distinct entries; the queue hands them back in the
/// order they were inserted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T> {
    pub payload: T,
    pub priority: Priority,
}

impl<T> Event<T> {
    pub fn new(payload: T, priority: Priority) -> Self {
        Event { payload, priority }
    }

    pub fn into_parts(self) -> (T, Priority) {
        (self.payload, self.priority)
    }
}

impl<T> From<(T, Priority)> for Event<T> {
    fn from((payload, priority): (T, Priority)) -> Self {
        Event::new(payload, priority)
    }
}
