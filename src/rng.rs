use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Source of uniform random integers used by the balancers.
///
/// Implementations are shared between every caller of a balancer, so a draw
/// must be safe to take from many threads at once and draws on different
/// threads must not be correlated.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&self, bound: u64) -> u64;
}

/// Draws from the calling thread's own generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

/// A seeded generator behind a lock, for reproducible runs
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<SmallRng>,
}

/// Replays a fixed list of draws, each reduced modulo the requested bound.
/// Once the list runs out every draw returns 0.
#[derive(Debug, Default)]
pub struct Sequence {
    draws: Mutex<VecDeque<u64>>,
    taken: AtomicUsize,
}

// ===== ThreadRandom =====

impl RandomSource for ThreadRandom {
    fn next_int(&self, bound: u64) -> u64 {
        thread_rng().gen_range(0..bound)
    }
}

// ===== SeededRandom =====

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&self, bound: u64) -> u64 {
        self.rng.lock().gen_range(0..bound)
    }
}

// ===== Sequence =====

impl Sequence {
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Sequence {
        Sequence {
            draws: Mutex::new(draws.into_iter().collect()),
            taken: AtomicUsize::new(0),
        }
    }

    /// How many draws have been consumed so far
    pub fn taken(&self) -> usize {
        self.taken.load(Ordering::Relaxed)
    }
}

impl RandomSource for Sequence {
    fn next_int(&self, bound: u64) -> u64 {
        self.taken.fetch_add(1, Ordering::Relaxed);
        let draw = self.draws.lock().pop_front().unwrap_or(0);
        draw % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_bounds() {
        let rng = ThreadRandom;
        for bound in 1..50 {
            assert!(rng.next_int(bound) < bound);
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let left: Vec<u64> = (0..32).map(|_| a.next_int(1_000)).collect();
        let right: Vec<u64> = (0..32).map(|_| b.next_int(1_000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn sequence_replays_and_counts() {
        let rng = Sequence::new([5, 25, 7]);
        assert_eq!(rng.next_int(40), 5);
        assert_eq!(rng.next_int(40), 25);
        assert_eq!(rng.next_int(4), 3);
        assert_eq!(rng.next_int(4), 0);
        assert_eq!(rng.taken(), 4);
    }
}
