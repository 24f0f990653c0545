//! Member providers and deferred child results.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::ProviderError;

/// Result of asking a provider for a value's children.
#[derive(Debug)]
pub enum Children<V> {
    /// Children are available now, in display order.
    Ready(Vec<V>),
    /// Children arrive later through the paired [`Resolver`].
    Pending(Deferred<V>),
}

/// Supplies children, labels and kinds for the values shown in a tree.
///
/// # Example
///
/// ```ignore
/// struct Scopes { frames: HashMap<FrameId, Vec<FrameId>> }
///
/// impl MemberProvider<FrameId> for Scopes {
///     fn children(&self, value: &FrameId) -> Result<Children<FrameId>, ProviderError> {
///         Ok(Children::Ready(self.frames.get(value).cloned().unwrap_or_default()))
///     }
///
///     fn has_children(&self, value: &FrameId) -> Result<bool, ProviderError> {
///         Ok(self.frames.get(value).is_some_and(|c| !c.is_empty()))
///     }
///
///     fn label(&self, value: &FrameId) -> Result<String, ProviderError> {
///         Ok(value.to_string())
///     }
/// }
/// ```
pub trait MemberProvider<V> {
    /// Children of `value`, either now or as a pending result.
    fn children(&self, value: &V) -> Result<Children<V>, ProviderError>;

    /// Whether `value` can be expanded.
    fn has_children(&self, value: &V) -> Result<bool, ProviderError>;

    /// Display key for `value`.
    fn label(&self, value: &V) -> Result<String, ProviderError>;

    /// Classification tag for `value`. `None` uses the tree's default kind.
    fn kind(&self, _value: &V) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
}

/// Create a linked resolver/deferred pair for an asynchronous child fetch.
pub fn deferred<V>() -> (Resolver<V>, Deferred<V>) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, Deferred { rx })
}

/// Completes a [`Deferred`]. Dropping it unresolved rejects the fetch.
#[derive(Debug)]
pub struct Resolver<V> {
    tx: oneshot::Sender<Result<Vec<V>, ProviderError>>,
}

impl<V> Resolver<V> {
    /// Resolve the fetch with the given children.
    ///
    /// Returns false if the tree no longer holds the deferred.
    pub fn resolve(self, children: Vec<V>) -> bool {
        self.tx.send(Ok(children)).is_ok()
    }

    /// Reject the fetch.
    pub fn reject(self, error: impl Into<ProviderError>) -> bool {
        self.tx.send(Err(error.into())).is_ok()
    }
}

/// A child fetch that has not resolved yet.
#[derive(Debug)]
pub struct Deferred<V> {
    rx: oneshot::Receiver<Result<Vec<V>, ProviderError>>,
}

impl<V> Deferred<V> {
    /// Non-blocking check. `None` while the fetch is outstanding.
    pub(crate) fn try_settle(&mut self) -> Option<Result<Vec<V>, ProviderError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(ProviderError::Dropped)),
        }
    }
}

impl<V> Future for Deferred<V> {
    type Output = Result<Vec<V>, ProviderError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.unwrap_or(Err(ProviderError::Dropped)))
    }
}
