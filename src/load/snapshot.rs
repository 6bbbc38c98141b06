use std::collections::HashMap;
use std::ops::Deref;

use crate::core::Invocation;
use crate::load::{Load, Weighted, DEFAULT_WEIGHT};

/// A point-in-time view of an endpoint's load and weight.
///
/// Whoever tracks calls builds a fresh snapshot per selection round; the
/// snapshot itself never changes once built. Methods with no recorded count
/// read as idle.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    inner: T,
    active: HashMap<String, u32>,
    weight: u32,
}

impl<T> Snapshot<T> {
    pub fn new(inner: T) -> Snapshot<T> {
        Snapshot {
            inner,
            active: HashMap::new(),
            weight: DEFAULT_WEIGHT,
        }
    }

    pub fn with_weight(mut self, weight: u32) -> Snapshot<T> {
        self.weight = weight;
        self
    }

    pub fn with_active(mut self, method: impl Into<String>, count: u32) -> Snapshot<T> {
        self.active.insert(method.into(), count);
        self
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Load for Snapshot<T> {
    fn active(&self, method: &str) -> u32 {
        self.active.get(method).copied().unwrap_or(0)
    }
}

impl<T> Weighted for Snapshot<T> {
    fn weight(&self, _: &Invocation) -> u32 {
        self.weight
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_idle_with_default_weight() {
        let snapshot = Snapshot::new("a");
        assert_eq!(snapshot.active("sayHello"), 0);
        assert_eq!(snapshot.weight(&Invocation::new("sayHello")), DEFAULT_WEIGHT);
    }

    #[test]
    fn active_counts_are_per_method() {
        let snapshot = Snapshot::new("a")
            .with_active("sayHello", 3)
            .with_active("sayBye", 1)
            .with_weight(7);

        assert_eq!(snapshot.active("sayHello"), 3);
        assert_eq!(snapshot.active("sayBye"), 1);
        assert_eq!(snapshot.active("other"), 0);
        assert_eq!(snapshot.weight(&Invocation::new("sayBye")), 7);
        assert_eq!(*snapshot, "a");
    }
}
