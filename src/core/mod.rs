use std::collections::HashMap;
use std::net::SocketAddr;

/// Candidate lists for every service the client can call, keyed by service name
#[derive(Debug)]
pub struct Store<T> {
    pub services: HashMap<String, Vec<T>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// The address of the endpoint serving calls
    pub addr: SocketAddr,
}

/// Per-call context handed to the balancer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    method: String,
}

impl<T> Store<T> {
    pub fn new() -> Store<T> {
        Store {
            services: HashMap::new(),
        }
    }

    pub fn with_service(mut self, service: impl Into<String>, candidates: Vec<T>) -> Store<T> {
        self.services.insert(service.into(), candidates);
        self
    }

    pub fn candidates(&self, service: &str) -> Option<&[T]> {
        self.services.get(service).map(Vec::as_slice)
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Store::new()
    }
}

impl Endpoint {
    pub fn new(addr: SocketAddr) -> Endpoint {
        Endpoint { addr }
    }
}

impl Invocation {
    pub fn new(method: impl Into<String>) -> Invocation {
        Invocation {
            method: method.into(),
        }
    }

    /// Name of the logical operation being called
    pub fn method(&self) -> &str {
        &self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_looks_up_candidates_by_service() {
        let a = Endpoint::new("127.0.0.1:7001".parse().unwrap());
        let b = Endpoint::new("127.0.0.1:7002".parse().unwrap());
        let store = Store::new().with_service("greeter", vec![a, b]);

        assert_eq!(store.candidates("greeter"), Some(&[a, b][..]));
        assert!(store.candidates("missing").is_none());
    }

    #[test]
    fn invocation_exposes_method() {
        let invocation = Invocation::new("sayHello");
        assert_eq!(invocation.method(), "sayHello");
    }
}
