//! A calendar queue: a priority queue for discrete-event scheduling.
//!
//! See [`CalendarQueue`] for the queue itself and [`CalendarConfig`] for its
//! tuning knobs.

pub mod config;
pub mod error;
pub mod event;
pub mod queue;
pub mod types;
pub mod util;

pub use config::CalendarConfig;
pub use error::{ConfigError, InsertError};
pub use event::Event;
pub use queue::{CalendarQueue, Drain};
