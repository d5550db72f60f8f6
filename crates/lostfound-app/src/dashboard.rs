// Rust guideline compliant 2026-10-19

//! Filtered dashboard view derived from a partitions snapshot.

use chrono::{DateTime, FixedOffset};
use lostfound_core::{filter_items, ApprovedItem, FilterConfig, Partitions, PendingItem, Stats};
use serde::Serialize;

/// What the admin dashboard shows for one filter configuration.
///
/// Both lists keep the partition order (id descending). The stats are
/// computed from the filtered lists, not from the full partitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Filtered pending partition.
    pub pending: Vec<PendingItem>,
    /// Filtered approved partition.
    pub approved: Vec<ApprovedItem>,
    /// Counters over the filtered lists.
    pub stats: Stats,
    /// Whether any filter deviates from its default.
    pub filters_active: bool,
}

impl DashboardView {
    /// Derives the view.
    ///
    /// # Arguments
    ///
    /// * `partitions` - Snapshot to filter
    /// * `filters` - Active filter configuration
    /// * `now` - Reference time; its offset defines calendar days
    #[must_use]
    pub fn derive(partitions: &Partitions, filters: &FilterConfig, now: DateTime<FixedOffset>) -> Self {
        let pending = filter_items(partitions.pending(), filters, now);
        let approved = filter_items(partitions.approved(), filters, now);
        let stats = Stats::from_filtered(&pending, &approved);
        Self {
            pending,
            approved,
            stats,
            filters_active: filters.is_active(),
        }
    }
}
