//! Request sequencing shared by every view controller.
//!
//! A [`View`] owns one [`ViewState`] and a liveness token. Controllers run
//! their reads and writes through it so that each request is counted while in
//! flight, each failure is turned into state instead of an `Err` that unwinds
//! the caller, and nothing is applied once the view has been unmounted.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::{api::endpoints::Resource, sync::state::ViewState, Result};

#[derive(Debug)]
pub struct View<D> {
    state: Mutex<ViewState<D>>,
    liveness: CancellationToken,
}

impl<D: Clone> View<D> {
    pub fn new(data: D) -> Self {
        Self {
            state: Mutex::new(ViewState::new(data)),
            liveness: CancellationToken::new(),
        }
    }

    pub fn snapshot(&self) -> ViewState<D> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.liveness.is_cancelled()
    }

    /// Detach the view. Requests already in flight still complete, but their
    /// responses are dropped.
    ///
    /// Snapshots of a detached view are frozen, including any in-flight
    /// counts, so `is_loading` stays true if a request was pending.
    pub fn unmount(&self) {
        self.liveness.cancel();
    }

    fn commit<R>(&self, update: impl FnOnce(&mut ViewState<D>) -> R) -> Option<R> {
        if self.liveness.is_cancelled() {
            return None;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        Some(update(&mut state))
    }

    /// Run one read. On success `apply` receives the rows; on failure the
    /// error banner and the resource's slot take the failure text.
    ///
    /// Returns whether the read succeeded.
    pub(crate) async fn read<T, F>(
        &self,
        resource: Resource,
        fetch: F,
        apply: impl FnOnce(&mut D, Vec<T>),
    ) -> bool
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        self.commit(|state| state.begin(resource));
        let outcome = fetch.await;

        let succeeded = outcome.is_ok();
        let applied = match outcome {
            Ok(rows) => self.commit(|state| {
                state.finish(resource);
                state.record_success(resource);
                apply(state.data_mut(), rows);
            }),
            Err(err) => {
                warn!("{} failed: {}", resource, err);
                self.commit(|state| {
                    state.finish(resource);
                    state.record_error(resource, err.to_string());
                })
            }
        };
        if applied.is_none() {
            debug!("dropping late response for {} on an unmounted view", resource);
        }
        succeeded
    }

    /// Run one write and hand back its outcome. Feedback is left to the
    /// caller because views disagree on where write failures are shown.
    pub(crate) async fn write<F>(&self, resource: Resource, action: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        self.commit(|state| state.begin(resource));
        let outcome = action.await;
        if let Err(err) = &outcome {
            warn!("{} failed: {}", resource, err);
        }
        if self.commit(|state| state.finish(resource)).is_none() {
            debug!("dropping late response for {} on an unmounted view", resource);
        }
        outcome
    }

    /// Show the outcome of a write on the message line.
    pub(crate) fn announce(&self, resource: Resource, outcome: &Result<()>, success: &str) {
        self.commit(|state| match outcome {
            Ok(()) => state.record_message(resource, success.to_string(), false),
            Err(err) => state.record_message(resource, err.to_string(), true),
        });
    }

    /// Put a failure on the error banner.
    pub(crate) fn report(&self, resource: Resource, text: String) {
        self.commit(|state| state.record_error(resource, text));
    }
}

impl<D: Clone + Default> Default for View<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}
