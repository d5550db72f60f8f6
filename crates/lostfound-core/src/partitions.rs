// Rust guideline compliant 2026-10-19

//! Pending/approved partitions and the reducer that mutates them.
//!
//! Every change to the local view is expressed as an [`Action`] and applied to
//! the latest committed [`Partitions`] value. Applying an action keeps three
//! invariants:
//!
//! - an id lives in at most one partition, at most once;
//! - both partitions stay sorted by id, descending;
//! - claim details exist only on claimed items (enforced by [`ApprovedStatus`]).

use crate::models::{ApprovedItem, ApprovedStatus, Entry, ItemId, PendingItem};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::debug;

/// A state change to apply to the partitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Drop both partitions. Issued at the start of a sync pass.
    Reset,
    /// Merge one page of the admin listing.
    MergePage(Vec<Entry>),
    /// The backend confirmed an approve or reject of a pending item.
    Reviewed {
        /// The pending item as it was when the mutation started.
        item: PendingItem,
        /// Published or rejected.
        status: ApprovedStatus,
    },
    /// The backend confirmed a claim.
    Claimed {
        /// Claimed item.
        id: ItemId,
        /// Who collected the item.
        claimed_by: String,
        /// Local time the backend confirmed the claim.
        claim_time: DateTime<Utc>,
    },
}

/// The local view of all admin items, split by review status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitions {
    pending: Vec<PendingItem>,
    approved: Vec<ApprovedItem>,
}

impl Partitions {
    /// Creates empty partitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items awaiting review, id descending.
    #[must_use]
    pub fn pending(&self) -> &[PendingItem] {
        &self.pending
    }

    /// Reviewed items, id descending.
    #[must_use]
    pub fn approved(&self) -> &[ApprovedItem] {
        &self.approved
    }

    /// Total number of items across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.approved.len()
    }

    /// Whether both partitions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.approved.is_empty()
    }

    /// Whether the id is present in either partition.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.find_pending(id).is_some() || self.find_approved(id).is_some()
    }

    /// Looks up an item in the pending partition.
    #[must_use]
    pub fn find_pending(&self, id: ItemId) -> Option<&PendingItem> {
        self.pending.iter().find(|item| item.id() == id)
    }

    /// Looks up an item in the approved partition.
    #[must_use]
    pub fn find_approved(&self, id: ItemId) -> Option<&ApprovedItem> {
        self.approved.iter().find(|item| item.id() == id)
    }

    /// Applies an action to the partitions.
    ///
    /// # Arguments
    ///
    /// * `action` - The change to apply
    ///
    /// # Returns
    ///
    /// The number of items added or changed.
    pub fn apply(&mut self, action: Action) -> usize {
        match action {
            Action::Reset => {
                self.pending.clear();
                self.approved.clear();
                0
            }
            Action::MergePage(entries) => self.merge_page(entries),
            Action::Reviewed { item, status } => {
                let id = item.id();
                self.remove(id);
                self.approved.push(item.into_approved(status));
                self.sort();
                1
            }
            Action::Claimed {
                id,
                claimed_by,
                claim_time,
            } => match self.approved.iter_mut().find(|item| item.id() == id) {
                Some(item) => {
                    item.status = ApprovedStatus::Claimed {
                        claimed_by: Some(claimed_by),
                        claim_time: Some(claim_time),
                    };
                    1
                }
                None => {
                    debug!(id, "claimed item no longer in approved partition");
                    0
                }
            },
        }
    }

    fn merge_page(&mut self, entries: Vec<Entry>) -> usize {
        let mut present: HashSet<ItemId> = self
            .pending
            .iter()
            .map(PendingItem::id)
            .chain(self.approved.iter().map(ApprovedItem::id))
            .collect();

        let mut merged = 0;
        for entry in entries {
            if !present.insert(entry.id()) {
                debug!(id = entry.id(), "skipping item already in partitions");
                continue;
            }
            match entry {
                Entry::Pending(item) => self.pending.push(item),
                Entry::Approved(item) => self.approved.push(item),
            }
            merged += 1;
        }

        self.sort();
        merged
    }

    fn remove(&mut self, id: ItemId) {
        self.pending.retain(|item| item.id() != id);
        self.approved.retain(|item| item.id() != id);
    }

    fn sort(&mut self) {
        self.pending.sort_by(|a, b| b.id().cmp(&a.id()));
        self.approved.sort_by(|a, b| b.id().cmp(&a.id()));
    }
}
