use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use pin_project::pin_project;
use tower::{BoxError, Layer, Service};
use tracing::debug;

use crate::balance::Balancer;
use crate::core::Store;
use crate::error::BalanceError;
use crate::load::{Load, Weighted};
use crate::request::Request;

pub struct Balance<S, T, B> {
    inner: S,
    balancer: B,
    store: Arc<Store<T>>,
}

pub struct BalanceLayer<T, B> {
    store: Arc<Store<T>>,
    balancer: B,
}

/// Either the inner service's future, or the reason no target was chosen
#[pin_project(project = ResponseFutureProj)]
pub enum ResponseFuture<F> {
    Inner {
        #[pin]
        future: F,
    },
    Failed {
        error: Option<BalanceError>,
    },
}

impl<S, T, B> Service<Request<T>> for Balance<S, T, B>
where
    S: Service<Request<T>>,
    S::Error: Into<BoxError>,
    T: Load + Weighted + Clone,
    B: Balancer,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = ResponseFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, mut request: Request<T>) -> Self::Future {
        let chosen = match self.store.candidates(&request.service) {
            None => Err(BalanceError::UnknownService(request.service.clone())),
            Some(candidates) => self.balancer.balance(candidates, &request.invocation),
        };

        match chosen {
            Ok(target) => {
                request.target = Some(target.clone());
                ResponseFuture::Inner {
                    future: self.inner.call(request),
                }
            }
            Err(error) => {
                debug!(service = %request.service, %error, "no target chosen");
                ResponseFuture::Failed { error: Some(error) }
            }
        }
    }
}

impl<S: Clone, T, B: Clone> Clone for Balance<S, T, B> {
    fn clone(&self) -> Self {
        Balance {
            inner: self.inner.clone(),
            balancer: self.balancer.clone(),
            store: self.store.clone(),
        }
    }
}

impl<T, B> BalanceLayer<T, B> {
    pub fn new(store: Arc<Store<T>>, balancer: B) -> BalanceLayer<T, B> {
        BalanceLayer { store, balancer }
    }
}

impl<S, T, B: Balancer> Layer<S> for BalanceLayer<T, B> {
    type Service = Balance<S, T, B>;

    fn layer(&self, inner: S) -> Self::Service {
        Balance {
            inner,
            store: self.store.clone(),
            balancer: self.balancer.clone(),
        }
    }
}

impl<F, R, E> Future for ResponseFuture<F>
where
    F: Future<Output = Result<R, E>>,
    E: Into<BoxError>,
{
    type Output = Result<R, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            ResponseFutureProj::Inner { future } => future.poll(cx).map_err(Into::into),
            ResponseFutureProj::Failed { error } => {
                let error = error.take().unwrap_or(BalanceError::NoCandidates);
                Poll::Ready(Err(error.into()))
            }
        }
    }
}
