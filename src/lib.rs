//! Least active load balancing for RPC clients.
//!
//! [`LeastActive`](balance::LeastActive) picks one endpoint per call out of a
//! candidate list, preferring the endpoints with the fewest calls in flight
//! and breaking ties by weighted random choice. Active counts and weights are
//! read through the [`Load`](load::Load) and [`Weighted`](load::Weighted)
//! traits; the balancer never tracks calls itself.

pub mod balance;
pub mod config;
pub mod core;
pub mod error;
pub mod layers;
pub mod load;
pub mod logger;
pub mod request;
pub mod rng;
