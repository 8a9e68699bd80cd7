//! Registry of delayed per-member tasks.
//!
//! Pomodoro runners and camera grace periods are spawned tokio tasks keyed by
//! `(kind, guild, user)`. Scheduling a key aborts the task already running under it, and a
//! task that runs to completion removes its own entry. Entries carry a generation id so a
//! finishing task never removes the replacement that superseded it.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use dashmap::DashMap;
use tokio::{sync::oneshot, task::AbortHandle};

/// Feature a delayed task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Pomodoro,
    CameraGrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub kind: TimerKind,
    pub guild_id: u64,
    pub user_id: u64,
}

impl TimerKey {
    pub fn new(kind: TimerKind, guild_id: u64, user_id: u64) -> Self {
        Self {
            kind,
            guild_id,
            user_id,
        }
    }
}

struct ScheduledTask {
    id: u64,
    handle: AbortHandle,
}

#[derive(Default)]
pub struct TimerRegistry {
    tasks: DashMap<TimerKey, ScheduledTask>,
    next_id: AtomicU64,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `task` under `key`, aborting the task previously scheduled under it.
    pub fn schedule<F>(self: &Arc<Self>, key: TimerKey, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let registry = Arc::clone(self);

        // The task waits for its entry to be inserted so its cleanup always finds it.
        let (start_tx, start_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            if start_rx.await.is_err() {
                return;
            }

            task.await;

            registry.tasks.remove_if(&key, |_, scheduled| scheduled.id == id);
        });

        let scheduled = ScheduledTask {
            id,
            handle: handle.abort_handle(),
        };

        if let Some(previous) = self.tasks.insert(key, scheduled) {
            previous.handle.abort();
            tracing::debug!("Replaced pending {:?} timer", key);
        }

        let _ = start_tx.send(());
    }

    /// Aborts the task scheduled under `key`.
    ///
    /// # Returns
    /// - `true` - A pending task was cancelled
    /// - `false` - Nothing was scheduled under the key
    pub fn cancel(&self, key: &TimerKey) -> bool {
        match self.tasks.remove(key) {
            Some((_, scheduled)) => {
                scheduled.handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_scheduled(&self, key: &TimerKey) -> bool {
        self.tasks.contains_key(key)
    }

    /// Number of pending tasks across all kinds.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
