// Rust guideline compliant 2026-10-19

//! Paginated admin sync.
//!
//! A full pass resets the partitions, then walks the admin listing page by
//! page. Each page is deduplicated against every id seen earlier in the pass
//! and merged through the store, so readers observe the partitions filling up
//! while the pass runs. A page shorter than the requested size ends the pass.
//! Elements the client could not decode are dropped from the merge but still
//! count toward the page length, so the offset stays aligned with the backend.

use crate::store::StoreHandle;
use lostfound_client::Backend;
use lostfound_core::{Action, ItemId};
use serde::Serialize;
use std::collections::HashSet;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Result of a sync request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Another pass was already running; nothing was requested.
    Skipped,
    /// Every page was fetched.
    Completed {
        /// Pages requested.
        pages: usize,
        /// Records returned by the backend, duplicates and malformed included.
        received: usize,
        /// Items added to the partitions.
        merged: usize,
    },
    /// A page request failed. Items merged before the failure stay visible.
    Aborted {
        /// Pages fetched successfully.
        pages: usize,
        /// Items added before the failure.
        merged: usize,
        /// Failure description.
        error: String,
    },
}

impl SyncOutcome {
    /// Whether the pass fetched every page.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, SyncOutcome::Completed { .. })
    }
}

/// Single-flight flag for sync passes.
#[derive(Debug, Default)]
pub struct SyncGuard {
    running: AtomicBool,
}

/// Held for the duration of one pass; releases the guard when dropped,
/// including on early return.
#[derive(Debug)]
pub struct SyncPermit<'a> {
    guard: &'a SyncGuard,
}

impl SyncGuard {
    /// Claims the guard if no pass is running.
    #[must_use]
    pub fn try_acquire(&self) -> Option<SyncPermit<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SyncPermit { guard: self })
    }

    /// Whether a pass currently holds the guard.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl Drop for SyncPermit<'_> {
    fn drop(&mut self) {
        self.guard.running.store(false, Ordering::Release);
    }
}

/// Drives full sync passes against a backend.
#[derive(Debug)]
pub struct SyncEngine<B: Backend + ?Sized> {
    backend: Arc<B>,
    store: StoreHandle,
    guard: SyncGuard,
}

#[derive(Default)]
struct Progress {
    pages: usize,
    received: usize,
    merged: usize,
}

impl<B: Backend + ?Sized> SyncEngine<B> {
    /// Creates an engine that merges into `store`.
    pub fn new(backend: Arc<B>, store: StoreHandle) -> Self {
        Self {
            backend,
            store,
            guard: SyncGuard::default(),
        }
    }

    /// Whether a pass is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.guard.is_held()
    }

    /// Runs one full pass over the admin listing.
    ///
    /// Returns [`SyncOutcome::Skipped`] without touching the backend when a
    /// pass is already running. Failures are reported in the outcome rather
    /// than as an error: the partial partitions remain valid.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Requested `limit` for every page
    #[instrument(skip(self, page_size), fields(page_size = page_size.get()))]
    pub async fn run_full_sync(&self, page_size: NonZeroU32) -> SyncOutcome {
        let Some(_permit) = self.guard.try_acquire() else {
            debug!("sync already in progress, skipping");
            return SyncOutcome::Skipped;
        };

        let mut progress = Progress::default();
        match self.fetch_all(page_size, &mut progress).await {
            Ok(()) => {
                info!(
                    pages = progress.pages,
                    received = progress.received,
                    merged = progress.merged,
                    "admin sync completed"
                );
                SyncOutcome::Completed {
                    pages: progress.pages,
                    received: progress.received,
                    merged: progress.merged,
                }
            }
            Err(error) => {
                warn!(
                    pages = progress.pages,
                    merged = progress.merged,
                    %error,
                    "admin sync aborted"
                );
                SyncOutcome::Aborted {
                    pages: progress.pages,
                    merged: progress.merged,
                    error: error.to_string(),
                }
            }
        }
    }

    async fn fetch_all(&self, page_size: NonZeroU32, progress: &mut Progress) -> crate::Result<()> {
        let limit = page_size.get();
        self.store.dispatch(Action::Reset).await?;

        let mut seen: HashSet<ItemId> = HashSet::new();
        let mut offset: u64 = 0;
        loop {
            let page = self.backend.list_admin_items(offset, limit).await?;
            let returned = page.returned;
            let skipped = page.skipped();
            progress.pages += 1;
            progress.received += returned;

            let mut entries = Vec::with_capacity(page.records.len());
            for record in page.records {
                if !seen.insert(record.id) {
                    debug!(id = record.id, offset, "duplicate id across pages");
                    continue;
                }
                entries.push(record.into_entry());
            }

            progress.merged += self.store.dispatch(Action::MergePage(entries)).await?;
            debug!(offset, returned, skipped, "merged admin page");

            offset += returned as u64;
            if returned != limit as usize {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_is_single_flight() {
        let guard = SyncGuard::default();
        let first = guard.try_acquire();
        assert!(first.is_some());
        assert!(guard.try_acquire().is_none());
        assert!(guard.is_held());
    }

    #[test]
    fn test_guard_released_on_drop() {
        let guard = SyncGuard::default();
        {
            let _permit = guard.try_acquire().unwrap();
        }
        assert!(!guard.is_held());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = SyncOutcome::Completed {
            pages: 2,
            received: 17,
            merged: 16,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["outcome"], "completed");
        assert_eq!(value["merged"], 16);
        assert!(outcome.is_complete());
    }
}
