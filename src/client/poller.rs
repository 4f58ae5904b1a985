//! Polling a submitted task until it has something to show.
//!
//! A task is polled while it is still `working` or has no status message
//! yet. Polling is best-effort: a failed fetch ends the loop and the last
//! good snapshot is used, and running out of attempts does the same. Callers
//! always get a task back; [`PollStop`] says why the loop ended.

use std::fmt;

use crate::config::PollPolicy;
use crate::error::A2AError;
use crate::types::{Task, TaskState};

use super::a2a_client::A2AClient;

/// Whether a task snapshot still warrants another fetch.
pub fn needs_polling(task: &Task) -> bool {
    task.is_task() && (task.status.state == TaskState::Working || task.status.message.is_none())
}

/// Why polling ended.
#[derive(Debug, Clone)]
pub enum PollStop {
    /// The task no longer needs polling.
    Settled,
    /// The attempt budget ran out while the task was still pending.
    Exhausted,
    /// A fetch failed; the snapshot before it is used.
    Interrupted(A2AError),
}

impl fmt::Display for PollStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollStop::Settled => write!(f, "settled"),
            PollStop::Exhausted => write!(f, "attempts exhausted"),
            PollStop::Interrupted(e) => write!(f, "interrupted: {}", e),
        }
    }
}

/// The task as last observed, plus how it was reached.
#[derive(Debug, Clone)]
pub struct PollOutcome {
    /// Last successfully fetched snapshot (or the submitted one).
    pub task: Task,
    /// Number of successful fetches.
    pub attempts: u32,
    /// Why the loop ended.
    pub stop: PollStop,
}

impl PollOutcome {
    /// Whether the task was still pending when the budget ran out.
    pub fn exhausted(&self) -> bool {
        matches!(self.stop, PollStop::Exhausted)
    }

    /// Whether a fetch failed.
    pub fn interrupted(&self) -> bool {
        matches!(self.stop, PollStop::Interrupted(_))
    }
}

/// Drives `tasks/get` for one task under a [`PollPolicy`].
#[derive(Debug)]
pub struct TaskPoller<'a> {
    client: &'a A2AClient,
    policy: PollPolicy,
}

impl<'a> TaskPoller<'a> {
    /// Create a poller that fetches through `client`.
    pub fn new(client: &'a A2AClient, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    /// Poll until the task settles, the budget runs out, or a fetch fails.
    ///
    /// Never fails: errors from the agent or the transport are logged and
    /// reported through [`PollStop::Interrupted`].
    pub async fn resolve(&self, mut task: Task) -> PollOutcome {
        let mut attempts = 0;

        let stop = loop {
            if !needs_polling(&task) {
                break PollStop::Settled;
            }
            if attempts >= self.policy.max_attempts {
                break PollStop::Exhausted;
            }

            tracing::debug!(
                "task {} state: {}, message present: {}. polling ({}/{})",
                task.id,
                task.status.state,
                task.status.message.is_some(),
                attempts + 1,
                self.policy.max_attempts
            );
            tokio::time::sleep(self.policy.delay).await;

            match self.client.get_task_by_id(&task.id).await {
                Ok(next) => task = next,
                Err(e) => {
                    tracing::warn!("error polling task {}: {}", task.id, e);
                    break PollStop::Interrupted(e);
                }
            }
            attempts += 1;
        };

        tracing::info!(
            "polled task {} {} time(s), final state {} ({})",
            task.id,
            attempts,
            task.status.state,
            stop
        );

        PollOutcome {
            task,
            attempts,
            stop,
        }
    }
}
