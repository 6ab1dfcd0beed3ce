/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use tokio::{sync::{broadcast, oneshot},
            task::JoinHandle};

use super::{FetchError, LoadOutcome, PeopleSource, load_display_list};
use crate::DEBUG_FETCH_MOD;

/// The one asynchronous operation in the picker: the initial fetch. It is started once
/// per widget, and cancelled when the widget goes away.
///
/// - The fetch runs on its own tokio task, racing a shutdown signal.
/// - [`FetchTask::cancel`] (or dropping the [`FetchTask`]) sends the shutdown signal and
///   aborts the task. The outcome of a cancelled fetch is discarded, it is never
///   delivered to [`FetchTask::wait_for_outcome`].
#[derive(Debug)]
pub struct FetchTask {
    shutdown_sender: broadcast::Sender<()>,
    maybe_join_handle: Option<JoinHandle<()>>,
    maybe_outcome_receiver: Option<oneshot::Receiver<LoadOutcome>>,
}

impl FetchTask {
    /// Must be called from inside a tokio runtime.
    pub fn spawn(source: impl PeopleSource) -> Self {
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
        let (outcome_sender, outcome_receiver) = oneshot::channel::<LoadOutcome>();

        let join_handle = tokio::spawn(async move {
            tokio::select! {
                biased;

                _ = shutdown_receiver.recv() => {
                    DEBUG_FETCH_MOD.then(|| {
                        tracing::debug!(message = "Fetch cancelled before it completed");
                    });
                }

                outcome = load_display_list(&source) => {
                    if outcome_sender.send(outcome).is_err() {
                        DEBUG_FETCH_MOD.then(|| {
                            tracing::debug!(message = "Fetch completed, nobody is listening");
                        });
                    }
                }
            }
        });

        Self {
            shutdown_sender,
            maybe_join_handle: Some(join_handle),
            maybe_outcome_receiver: Some(outcome_receiver),
        }
    }

    /// `true` until the outcome has been received, or the task has been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool { self.maybe_outcome_receiver.is_some() }

    /// Resolves once with the outcome of the fetch. Returns `None` if the fetch was
    /// cancelled, or the outcome was already taken. If the task died before producing
    /// an outcome, that is reported as a failed load ([`FetchError::TaskEnded`]).
    ///
    /// This is cancel safe, so it can be used in a [`tokio::select!`] branch.
    pub async fn wait_for_outcome(&mut self) -> Option<LoadOutcome> {
        let receiver = self.maybe_outcome_receiver.as_mut()?;
        let result = receiver.await;
        self.maybe_outcome_receiver = None;
        match result {
            Ok(outcome) => Some(outcome),
            Err(_) => {
                let error = FetchError::TaskEnded;
                // % is Display, ? is Debug.
                tracing::warn!(message = "Fetch task ended without an outcome", error = ?error);
                Some(LoadOutcome::failed(error.to_string()))
            }
        }
    }

    /// Cancels the fetch. No outcome will be delivered after this returns.
    pub fn cancel(&mut self) {
        self.maybe_outcome_receiver = None;
        self.shutdown_sender.send(()).ok();
        if let Some(join_handle) = self.maybe_join_handle.take() {
            join_handle.abort();
        }
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) { self.cancel(); }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{FakePeopleSource, fake_fetch_error, sample_fetched_people};

    #[tokio::test]
    async fn test_outcome_is_delivered_once() {
        let mut task = FetchTask::spawn(FakePeopleSource::Succeed(sample_fetched_people()));
        assert!(task.is_pending());

        let outcome = task.wait_for_outcome().await.unwrap();
        assert_eq!(outcome.list.len(), 3);
        assert_eq!(outcome.error, None);

        assert!(!task.is_pending());
        assert_eq!(task.wait_for_outcome().await, None);
    }

    #[tokio::test]
    async fn test_failure_is_delivered_as_message() {
        let mut task = FetchTask::spawn(FakePeopleSource::Fail);
        let outcome = task.wait_for_outcome().await.unwrap();
        assert_eq!(outcome, LoadOutcome::failed(fake_fetch_error().to_string()));
    }

    #[tokio::test]
    async fn test_panicked_fetch_is_delivered_as_task_ended() {
        let mut task = FetchTask::spawn(FakePeopleSource::Panic);
        let outcome = task.wait_for_outcome().await.unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::failed(FetchError::TaskEnded.to_string())
        );
        assert!(!task.is_pending());
        assert_eq!(task.wait_for_outcome().await, None);
    }

    #[tokio::test]
    async fn test_cancel_discards_outcome() {
        let mut task = FetchTask::spawn(FakePeopleSource::Hang);
        task.cancel();

        assert!(!task.is_pending());
        assert_eq!(task.wait_for_outcome().await, None);
    }

    #[tokio::test]
    async fn test_cancel_after_completion_discards_outcome() {
        let mut task = FetchTask::spawn(FakePeopleSource::Succeed(sample_fetched_people()));
        // Let the task run to completion, so the outcome is sitting in the channel.
        tokio::time::sleep(Duration::from_millis(10)).await;
        task.cancel();
        assert_eq!(task.wait_for_outcome().await, None);
    }

    #[tokio::test]
    async fn test_drop_aborts_hanging_fetch() {
        let task = FetchTask::spawn(FakePeopleSource::Hang);
        drop(task);
        // Nothing to assert on other than this not hanging, and not panicking.
    }
}
