// Rust guideline compliant 2026-10-19

//! Facade bundling the store, sync engine, and mutation coordinator.

use crate::dashboard::DashboardView;
use crate::mutation::MutationCoordinator;
use crate::store::StoreHandle;
use crate::sync::{SyncEngine, SyncOutcome};
use chrono::{DateTime, FixedOffset};
use lostfound_client::Backend;
use lostfound_core::{FilterConfig, Partitions};
use std::num::NonZeroU32;
use std::sync::Arc;

/// One admin session's view of the backend.
///
/// Sync and mutations share the same store, so a mutation confirmed while a
/// sync is running is applied to the latest partitions.
#[derive(Debug)]
pub struct AdminConsole<B: Backend + ?Sized> {
    store: StoreHandle,
    sync: SyncEngine<B>,
    mutations: MutationCoordinator<B>,
}

impl<B: Backend + ?Sized> AdminConsole<B> {
    /// Spawns a store and wires both engines to `backend`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(backend: Arc<B>) -> Self {
        let store = StoreHandle::spawn();
        Self {
            sync: SyncEngine::new(Arc::clone(&backend), store.clone()),
            mutations: MutationCoordinator::new(backend, store.clone()),
            store,
        }
    }

    /// Shared store handle.
    #[must_use]
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Sync engine.
    #[must_use]
    pub fn sync(&self) -> &SyncEngine<B> {
        &self.sync
    }

    /// Mutation coordinator.
    #[must_use]
    pub fn mutations(&self) -> &MutationCoordinator<B> {
        &self.mutations
    }

    /// Runs a full sync pass.
    pub async fn refresh(&self, page_size: NonZeroU32) -> SyncOutcome {
        self.sync.run_full_sync(page_size).await
    }

    /// Latest partitions.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Partitions> {
        self.store.snapshot()
    }

    /// Dashboard view of the latest partitions.
    #[must_use]
    pub fn view(&self, filters: &FilterConfig, now: DateTime<FixedOffset>) -> DashboardView {
        DashboardView::derive(&self.store.snapshot(), filters, now)
    }
}
