pub mod snapshot;
pub use snapshot::Snapshot;

use crate::core::Invocation;

/// Weight an endpoint gets when nothing else has been configured
pub const DEFAULT_WEIGHT: u32 = 100;

/// Number of calls currently in flight to an endpoint for a given method.
///
/// The count is owned by whoever tracks call lifecycles; implementors only
/// expose a read of it. A slightly stale value is fine, balancing is a best
/// effort signal.
pub trait Load {
    fn active(&self, method: &str) -> u32;
}

/// Effective weight of an endpoint for a call, already adjusted for warmup
/// or anything else the owner of the weight cares about.
pub trait Weighted {
    fn weight(&self, invocation: &Invocation) -> u32;
}
