pub mod least_active;
pub use least_active::LeastActive;

use crate::core::Invocation;
use crate::error::BalanceError;
use crate::load::{Load, Weighted};

pub trait Balancer: Clone {
    /// Picks one of `candidates` for `invocation`. The result always borrows
    /// from `candidates`; an empty slice is the only error.
    fn balance<'a, T>(
        &self,
        candidates: &'a [T],
        invocation: &Invocation,
    ) -> Result<&'a T, BalanceError>
    where
        T: Load + Weighted;
}
