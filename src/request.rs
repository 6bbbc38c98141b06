use crate::core::Invocation;

/// An outgoing call on its way through the layer stack. `target` is filled
/// in once a balancer has chosen where the call goes.
#[derive(Debug, Clone)]
pub struct Request<T> {
    pub service: String,
    pub invocation: Invocation,
    pub target: Option<T>,
}

impl<T> Request<T> {
    pub fn new(service: impl Into<String>, invocation: Invocation) -> Request<T> {
        Request {
            service: service.into(),
            invocation,
            target: None,
        }
    }
}
