// Rust guideline compliant 2026-10-19

//! Counters derived from the filtered partitions.

use crate::models::{ApprovedItem, ItemStatus, PendingItem};
use serde::Serialize;

/// Dashboard counters. Always computed from the filtered partitions, never
/// stored across a filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Filtered pending items.
    pub pending: usize,
    /// Filtered approved items with status published.
    pub published: usize,
    /// Filtered approved items with status claimed.
    pub claimed: usize,
    /// Filtered pending plus filtered approved items.
    pub total: usize,
}

impl Stats {
    /// Aggregates counters from the filtered partitions.
    ///
    /// # Arguments
    ///
    /// * `pending` - Filtered pending partition
    /// * `approved` - Filtered approved partition
    ///
    /// # Returns
    ///
    /// The derived counters.
    #[must_use]
    pub fn from_filtered(pending: &[PendingItem], approved: &[ApprovedItem]) -> Self {
        let count = |status: ItemStatus| {
            approved
                .iter()
                .filter(|item| item.status() == status)
                .count()
        };

        Self {
            pending: pending.len(),
            published: count(ItemStatus::Published),
            claimed: count(ItemStatus::Claimed),
            total: pending.len() + approved.len(),
        }
    }
}
