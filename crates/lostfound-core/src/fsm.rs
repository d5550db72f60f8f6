// Rust guideline compliant 2026-10-19

//! Finite State Machine module for item status transitions.
//!
//! The review lifecycle allows the following transitions:
//!
//! - Pending → Published (approve)
//! - Pending → Rejected (reject)
//! - Published → Claimed (mark claimed)
//!
//! Rejected and Claimed are terminal.

use crate::{Error, ItemStatus, Result};

impl ItemStatus {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Arguments
    ///
    /// * `target` - The target status to transition to
    ///
    /// # Returns
    ///
    /// Ok if the transition is valid, Err with descriptive message otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not in the valid transition set.
    pub fn can_transition_to(&self, target: ItemStatus) -> Result<()> {
        match (self, target) {
            (ItemStatus::Pending, ItemStatus::Published)
            | (ItemStatus::Pending, ItemStatus::Rejected)
            | (ItemStatus::Published, ItemStatus::Claimed) => Ok(()),
            (ItemStatus::Claimed, ItemStatus::Claimed) => Err(Error::InvalidTransition(
                "Item has already been claimed".to_string(),
            )),
            (current, target) => Err(Error::InvalidTransition(format!(
                "Cannot transition from {} to {}",
                current, target
            ))),
        }
    }

    /// Returns the list of valid target states for the current status.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<ItemStatus> {
        match self {
            ItemStatus::Pending => vec![ItemStatus::Published, ItemStatus::Rejected],
            ItemStatus::Published => vec![ItemStatus::Claimed],
            ItemStatus::Claimed | ItemStatus::Rejected => Vec::new(),
        }
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
