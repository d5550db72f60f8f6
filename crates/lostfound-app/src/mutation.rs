// Rust guideline compliant 2026-10-19

//! Confirm-then-apply review and claim mutations.
//!
//! Every mutation validates locally first, calls the backend, and only after
//! a confirmed success dispatches the matching [`Action`] to the store. A
//! failed call leaves the partitions untouched.

use crate::error::Result;
use crate::store::StoreHandle;
use chrono::Utc;
use lostfound_client::Backend;
use lostfound_core::{Action, ApprovedItem, ApprovedStatus, Error, ItemId, ItemStatus};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy)]
enum Verdict {
    Approve,
    Reject,
}

impl Verdict {
    fn status(self) -> ApprovedStatus {
        match self {
            Verdict::Approve => ApprovedStatus::Published,
            Verdict::Reject => ApprovedStatus::Rejected,
        }
    }
}

/// Applies admin decisions to the backend and then to the store.
#[derive(Debug)]
pub struct MutationCoordinator<B: Backend + ?Sized> {
    backend: Arc<B>,
    store: StoreHandle,
}

impl<B: Backend + ?Sized> MutationCoordinator<B> {
    /// Creates a coordinator that commits into `store`.
    pub fn new(backend: Arc<B>, store: StoreHandle) -> Self {
        Self { backend, store }
    }

    /// Publishes a pending item.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an item in the pending partition
    ///
    /// # Returns
    ///
    /// The item as it now sits in the approved partition.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` without calling the backend if `id` is not pending,
    /// or the backend error if the call was not confirmed.
    pub async fn approve(&self, id: ItemId) -> Result<ApprovedItem> {
        self.review(id, Verdict::Approve).await
    }

    /// Rejects a pending item.
    ///
    /// # Errors
    ///
    /// Same as [`MutationCoordinator::approve`].
    pub async fn reject(&self, id: ItemId) -> Result<ApprovedItem> {
        self.review(id, Verdict::Reject).await
    }

    #[instrument(skip(self))]
    async fn review(&self, id: ItemId, verdict: Verdict) -> Result<ApprovedItem> {
        let item = self
            .store
            .snapshot()
            .find_pending(id)
            .cloned()
            .ok_or(Error::NotFound(id))?;
        let status = verdict.status();
        ItemStatus::Pending.can_transition_to(status.status())?;

        let confirmed = match verdict {
            Verdict::Approve => self.backend.approve_item(id).await,
            Verdict::Reject => self.backend.reject_item(id).await,
        };
        if let Err(error) = confirmed {
            warn!(id, %error, "review not confirmed by backend");
            return Err(error.into());
        }

        self.store
            .dispatch(Action::Reviewed {
                item: item.clone(),
                status: status.clone(),
            })
            .await?;
        info!(id, status = %status.status(), "item reviewed");
        Ok(item.into_approved(status))
    }

    /// Records that a published item was handed back.
    ///
    /// Only the claimant is sent. The local claim time is taken from the
    /// clock once the backend confirms and kept in the approved partition.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of a published item
    /// * `claimed_by` - Name of the person collecting the item
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank claimant, `NotFound` if the item
    /// is not in the approved partition, `InvalidTransition` unless it is
    /// published, all without calling the backend. Returns the backend error
    /// if the call was not confirmed.
    #[instrument(skip(self))]
    pub async fn mark_claimed(&self, id: ItemId, claimed_by: &str) -> Result<ApprovedItem> {
        let claimed_by = claimed_by.trim();
        if claimed_by.is_empty() {
            return Err(Error::Validation("claimant name cannot be empty".to_string()).into());
        }

        let mut item = self
            .store
            .snapshot()
            .find_approved(id)
            .cloned()
            .ok_or(Error::NotFound(id))?;
        item.status().can_transition_to(ItemStatus::Claimed)?;

        if let Err(error) = self.backend.mark_claimed(id, claimed_by).await {
            warn!(id, %error, "claim not confirmed by backend");
            return Err(error.into());
        }

        let claim_time = Utc::now();
        self.store
            .dispatch(Action::Claimed {
                id,
                claimed_by: claimed_by.to_string(),
                claim_time,
            })
            .await?;
        info!(id, claimed_by, "item claimed");

        item.status = ApprovedStatus::Claimed {
            claimed_by: Some(claimed_by.to_string()),
            claim_time: Some(claim_time),
        };
        Ok(item)
    }
}
