// Rust guideline compliant 2026-10-19

//! Single-writer store for the item partitions.
//!
//! One task owns the [`Partitions`]. Sync merges and confirmed mutations are
//! sent to it as [`Action`]s and applied in arrival order, always against the
//! latest committed value. Readers get cheap snapshots through a watch
//! channel and can observe partial sync progress between pages.

use crate::error::{AppError, Result};
use lostfound_core::{Action, Partitions};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::trace;

struct Command {
    action: Action,
    applied: oneshot::Sender<usize>,
}

/// Cloneable handle to the store task.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Arc<Partitions>>,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("action", &self.action).finish()
    }
}

impl StoreHandle {
    /// Spawns the store task on the current tokio runtime.
    ///
    /// The task stops once every handle has been dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(Arc::new(Partitions::new()));
        tokio::spawn(run(receiver, publisher));
        Self {
            commands,
            snapshots,
        }
    }

    /// Applies an action and waits until it is committed.
    ///
    /// # Returns
    ///
    /// The number of items the action added or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store task is gone.
    pub async fn dispatch(&self, action: Action) -> Result<usize> {
        let (applied, done) = oneshot::channel();
        self.commands
            .send(Command { action, applied })
            .map_err(|_| AppError::StoreClosed)?;
        done.await.map_err(|_| AppError::StoreClosed)
    }

    /// Latest committed partitions.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Partitions> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Receiver notified after every committed action.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Partitions>> {
        self.snapshots.clone()
    }
}

async fn run(mut commands: mpsc::UnboundedReceiver<Command>, publisher: watch::Sender<Arc<Partitions>>) {
    while let Some(Command { action, applied }) = commands.recv().await {
        let mut changed = 0;
        publisher.send_modify(|partitions| {
            changed = Arc::make_mut(partitions).apply(action);
        });
        trace!(changed, "store action committed");
        let _ = applied.send(changed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lostfound_core::{Entry, Item, ItemKind, PendingItem};

    fn pending(id: i64) -> Entry {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        Entry::Pending(PendingItem::new(Item {
            id,
            item_name: "Key".to_string(),
            description: String::new(),
            image_id: None,
            location: String::new(),
            contact_info: String::new(),
            lost_time: at,
            kind: ItemKind::Lost,
            created_at: at,
        }))
    }

    #[tokio::test]
    async fn test_dispatch_commits_before_returning() {
        let store = StoreHandle::spawn();
        let changed = store
            .dispatch(Action::MergePage(vec![pending(1), pending(2)]))
            .await
            .unwrap();
        assert_eq!(changed, 2);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_snapshots_are_immutable() {
        let store = StoreHandle::spawn();
        store
            .dispatch(Action::MergePage(vec![pending(1)]))
            .await
            .unwrap();
        let before = store.snapshot();
        store.dispatch(Action::Reset).await.unwrap();

        assert_eq!(before.len(), 1);
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_each_commit() {
        let store = StoreHandle::spawn();
        let mut updates = store.subscribe();
        store
            .dispatch(Action::MergePage(vec![pending(7)]))
            .await
            .unwrap();
        assert!(updates.has_changed().unwrap());
        assert!(updates.borrow_and_update().contains(7));
    }
}
