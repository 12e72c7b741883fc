/// Index into the node `Arena`, used in place of a `next` pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIdx(pub u32);

/// Priority of an event, usually a point in simulated time.
pub type Priority = f64;

/// Bucket count a fresh queue starts with.
pub const DEFAULT_NUM_BUCKETS: usize = 2;

/// Bucket width a fresh queue starts with, also the width used when fewer
/// than two events are resident to sample from.
pub const DEFAULT_BUCKET_WIDTH: Priority = 1.0;

/// Upper bound on the number of events sampled when re-estimating the width.
pub const DEFAULT_MAX_SAMPLES: usize = 25;
