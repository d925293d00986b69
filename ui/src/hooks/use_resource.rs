use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use super::ResourceState;
use crate::{Error, SharedError};

/// Generic hook composer.
///
/// Wraps calls against a repository with loading and error tracking. Calls
/// on the same instance run one at a time in arrival order, and
/// `is_loading` stays set until the last of them has finished.
///
/// # Example
///
/// ```rust,ignore
/// pub fn use_courts_with<R>(repo: R) -> CourtsHookReturn<R> {
///     CourtsHookReturn { resource: UseResource::new(repo) }
/// }
///
/// // and then, on the hook:
/// self.run(self.repository().list()).await
/// ```
pub struct UseResource<R> {
    repo: R,
    state: watch::Sender<ResourceState>,
    turn: Mutex<()>,
}

impl<R> UseResource<R> {
    pub fn new(repo: R) -> Self {
        let (state, _) = watch::channel(ResourceState::default());
        Self {
            repo,
            state,
            turn: Mutex::new(()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<SharedError> {
        self.state.borrow().error.clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResourceState {
        self.state.borrow().clone()
    }

    /// Receive every state change, e.g. to re-render on loading/error.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState> {
        self.state.subscribe()
    }

    /// Run `operation` with loading and error tracking.
    ///
    /// The operation's value is returned unchanged. A failure is stored as
    /// the hook's error and the same `Arc` is returned to the caller.
    /// Loading is released however the call ends, including when this
    /// future is dropped before completion.
    pub async fn run<T, E>(
        &self,
        operation: impl Future<Output = Result<T, E>>,
    ) -> Result<T, SharedError>
    where
        E: Into<Error>,
    {
        let _in_flight = InFlight::start(&self.state);
        let _turn = self.turn.lock().await;
        self.state.send_modify(|state| state.error = None);

        match operation.await {
            Ok(value) => Ok(value),
            Err(e) => {
                let e: SharedError = Arc::new(e.into());
                tracing::warn!(error = %e, "hook operation failed");
                self.state
                    .send_modify(|state| state.error = Some(e.clone()));
                Err(e)
            }
        }
    }
}

/// Marks one call in flight until dropped.
struct InFlight<'a> {
    state: &'a watch::Sender<ResourceState>,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a watch::Sender<ResourceState>) -> Self {
        state.send_modify(|state| {
            state.in_flight += 1;
            state.is_loading = true;
        });
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| {
            state.in_flight -= 1;
            state.is_loading = state.in_flight > 0;
        });
    }
}
