use std::thread;

use leastactive::balance::{Balancer, LeastActive};
use leastactive::core::Invocation;
use leastactive::load::Snapshot;
use leastactive::rng::SeededRandom;

#[test]
fn shared_balancer_across_threads_only_picks_least_active() {
    let candidates: Vec<Snapshot<usize>> = (0..8)
        .map(|i| {
            Snapshot::new(i)
                .with_active("sayHello", if i % 3 == 0 { 1 } else { 2 })
                .with_weight(10 + i as u32)
        })
        .collect();
    let thread_balancer = LeastActive::new();
    let seeded_balancer = LeastActive::with_rng(SeededRandom::new(3));

    thread::scope(|scope| {
        for _ in 0..4 {
            let candidates = &candidates;
            let thread_balancer = thread_balancer.clone();
            let seeded_balancer = seeded_balancer.clone();
            scope.spawn(move || {
                let invocation = Invocation::new("sayHello");
                for _ in 0..2_000 {
                    let a = thread_balancer.balance(candidates, &invocation).unwrap();
                    let b = seeded_balancer.balance(candidates, &invocation).unwrap();
                    assert_eq!(**a % 3, 0);
                    assert_eq!(**b % 3, 0);
                }
            });
        }
    });
}
