use std::sync::Arc;

use tracing::trace;

use crate::balance::Balancer;
use crate::core::Invocation;
use crate::error::BalanceError;
use crate::load::{Load, Weighted};
use crate::rng::{RandomSource, ThreadRandom};

/// Choose among the candidates with the fewest active calls.
///
/// A single pass finds the candidates sharing the lowest active count for the
/// invoked method (the tie group). If only one candidate is in the group it
/// wins outright without touching the random source. If the group's weights
/// differ and sum to something positive, a candidate is drawn with
/// probability proportional to its weight. Otherwise every member of the
/// group is equally likely.
pub struct LeastActive<R = ThreadRandom> {
    rng: Arc<R>,
}

impl LeastActive<ThreadRandom> {
    pub const NAME: &'static str = "leastactive";

    pub fn new() -> LeastActive<ThreadRandom> {
        LeastActive::with_rng(ThreadRandom)
    }
}

impl<R: RandomSource> LeastActive<R> {
    pub fn with_rng(rng: R) -> LeastActive<R> {
        LeastActive { rng: Arc::new(rng) }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl Default for LeastActive<ThreadRandom> {
    fn default() -> Self {
        LeastActive::new()
    }
}

impl<R> Clone for LeastActive<R> {
    fn clone(&self) -> Self {
        LeastActive {
            rng: self.rng.clone(),
        }
    }
}

impl<R: RandomSource> Balancer for LeastActive<R> {
    fn balance<'a, T>(
        &self,
        candidates: &'a [T],
        invocation: &Invocation,
    ) -> Result<&'a T, BalanceError>
    where
        T: Load + Weighted,
    {
        if candidates.is_empty() {
            return Err(BalanceError::NoCandidates);
        }

        let method = invocation.method();
        let mut least_active: Option<u32> = None;
        // Indexes into `candidates` of the current tie group, in scan order
        let mut least_indexes = Vec::with_capacity(candidates.len());
        let mut weights = Vec::with_capacity(candidates.len());
        let mut total_weight: u64 = 0;
        let mut first_weight = 0;
        let mut same_weight = true;

        for (i, candidate) in candidates.iter().enumerate() {
            let active = candidate.active(method);
            let weight = candidate.weight(invocation);
            weights.push(weight);

            match least_active {
                Some(least) if active > least => {}
                Some(least) if active == least => {
                    least_indexes.push(i);
                    total_weight += u64::from(weight);
                    // i is never 0 on this arm
                    if same_weight && i > 0 && weight != first_weight {
                        same_weight = false;
                    }
                }
                _ => {
                    least_active = Some(active);
                    least_indexes.clear();
                    least_indexes.push(i);
                    total_weight = u64::from(weight);
                    first_weight = weight;
                    same_weight = true;
                }
            }
        }

        let least_count = least_indexes.len();
        if least_count == 1 {
            trace!(method, index = least_indexes[0], "single least active candidate");
            return Ok(&candidates[least_indexes[0]]);
        }

        if !same_weight && total_weight > 0 {
            let mut offset = self.rng.next_int(total_weight);
            for &index in &least_indexes {
                let weight = u64::from(weights[index]);
                if offset < weight {
                    trace!(method, index, least_count, total_weight, "weighted pick");
                    return Ok(&candidates[index]);
                }
                offset -= weight;
            }
        }

        let index = least_indexes[self.rng.next_int(least_count as u64) as usize];
        trace!(method, index, least_count, "uniform pick");
        Ok(&candidates[index])
    }
}
