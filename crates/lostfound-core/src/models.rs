// Rust guideline compliant 2026-10-19

//! Core data models for lost & found items.

use crate::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Backend-assigned item identifier, unique across the whole system.
pub type ItemId = i64;

/// Whether an item was reported lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A visitor lost the item.
    Lost,
    /// Someone handed the item in.
    Found,
}

impl ItemKind {
    /// Returns the wire name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Awaiting admin review, not publicly visible.
    Pending,
    /// Approved and publicly listed.
    Published,
    /// Handed back to its owner.
    Claimed,
    /// Refused by an admin.
    Rejected,
}

/// Presentation tone for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Grey badge.
    Neutral,
    /// Yellow badge.
    Attention,
    /// Red badge.
    Danger,
    /// Green badge.
    Success,
}

impl ItemStatus {
    /// Every status, in display order.
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Pending,
        ItemStatus::Published,
        ItemStatus::Rejected,
        ItemStatus::Claimed,
    ];

    /// Returns the wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Published => "published",
            ItemStatus::Claimed => "claimed",
            ItemStatus::Rejected => "rejected",
        }
    }

    /// Returns the human-readable badge label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "Awaiting review",
            ItemStatus::Published => "Published",
            ItemStatus::Claimed => "Claimed",
            ItemStatus::Rejected => "Rejected",
        }
    }

    /// Returns the badge tone for the status.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match self {
            ItemStatus::Pending => StatusTone::Neutral,
            ItemStatus::Published => StatusTone::Attention,
            ItemStatus::Claimed => StatusTone::Success,
            ItemStatus::Rejected => StatusTone::Danger,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every item regardless of review status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Backend identifier.
    pub id: ItemId,
    /// Short name of the item.
    pub item_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Uploaded image identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Where the item was lost or found.
    #[serde(default)]
    pub location: String,
    /// Contact information of the reporter.
    #[serde(default)]
    pub contact_info: String,
    /// When the item was lost or found.
    #[serde(with = "wire::timestamp")]
    pub lost_time: DateTime<Utc>,
    /// Lost or found.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// When the report was created on the backend.
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// An item awaiting review. Its status is implicitly pending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ItemRecord")]
pub struct PendingItem {
    /// Common item fields.
    pub item: Item,
}

impl PendingItem {
    /// Wraps an item as pending.
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    /// Returns the item identifier.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    /// Converts the pending item into an approved item with the given outcome.
    #[must_use]
    pub fn into_approved(self, status: ApprovedStatus) -> ApprovedItem {
        ApprovedItem {
            item: self.item,
            status,
        }
    }
}

/// Status of an item that left the review queue.
///
/// Claim details only exist on the `Claimed` variant. They stay optional
/// because the backend may report a claim without a claimant or time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovedStatus {
    /// Publicly listed.
    Published,
    /// Refused by an admin.
    Rejected,
    /// Handed back.
    Claimed {
        /// Who collected the item, if recorded.
        claimed_by: Option<String>,
        /// When the claim was recorded, if known.
        claim_time: Option<DateTime<Utc>>,
    },
}

impl ApprovedStatus {
    /// Returns the flat status value.
    #[must_use]
    pub fn status(&self) -> ItemStatus {
        match self {
            ApprovedStatus::Published => ItemStatus::Published,
            ApprovedStatus::Rejected => ItemStatus::Rejected,
            ApprovedStatus::Claimed { .. } => ItemStatus::Claimed,
        }
    }
}

/// An item with a post-review status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ItemRecord")]
pub struct ApprovedItem {
    /// Common item fields.
    pub item: Item,
    /// Review outcome.
    pub status: ApprovedStatus,
}

impl ApprovedItem {
    /// Returns the item identifier.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    /// Returns the flat status value.
    #[must_use]
    pub fn status(&self) -> ItemStatus {
        self.status.status()
    }

    /// Returns the claimant when the item is claimed.
    #[must_use]
    pub fn claimed_by(&self) -> Option<&str> {
        match &self.status {
            ApprovedStatus::Claimed { claimed_by, .. } => claimed_by.as_deref(),
            _ => None,
        }
    }

    /// Returns the claim timestamp when the item is claimed.
    #[must_use]
    pub fn claim_time(&self) -> Option<DateTime<Utc>> {
        match &self.status {
            ApprovedStatus::Claimed { claim_time, .. } => *claim_time,
            _ => None,
        }
    }
}

/// A record from the admin listing, routed into one of the two partitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Goes to the pending partition.
    Pending(PendingItem),
    /// Goes to the approved partition.
    Approved(ApprovedItem),
}

impl Entry {
    /// Returns the item identifier.
    #[must_use]
    pub fn id(&self) -> ItemId {
        match self {
            Entry::Pending(item) => item.id(),
            Entry::Approved(item) => item.id(),
        }
    }
}

/// Flat item record as served by `GET /api/admin/all-items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Backend identifier.
    pub id: ItemId,
    /// Short name of the item.
    pub item_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Uploaded image identifier, if any.
    #[serde(
        default,
        deserialize_with = "wire::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_id: Option<String>,
    /// Where the item was lost or found.
    #[serde(default)]
    pub location: String,
    /// Contact information of the reporter.
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub contact_info: String,
    /// When the item was lost or found.
    #[serde(with = "wire::timestamp")]
    pub lost_time: DateTime<Utc>,
    /// Lost or found.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// When the report was created on the backend.
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Review status.
    pub status: ItemStatus,
    /// Claimant, present for claimed items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_by: Option<String>,
    /// Claim time, present for claimed items.
    #[serde(
        default,
        with = "wire::opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub claim_time: Option<DateTime<Utc>>,
}

impl ItemRecord {
    /// Routes the record to the partition its status belongs to.
    ///
    /// Every non-pending record lands in the approved partition. A claimed
    /// record with a blank claimant or no claim time is kept with the missing
    /// details left empty.
    ///
    /// # Returns
    ///
    /// A pending or approved entry.
    pub fn into_entry(self) -> Entry {
        let status = match self.status {
            ItemStatus::Pending => None,
            ItemStatus::Published => Some(ApprovedStatus::Published),
            ItemStatus::Rejected => Some(ApprovedStatus::Rejected),
            ItemStatus::Claimed => {
                let claimed_by = self.claimed_by.filter(|name| !name.trim().is_empty());
                if claimed_by.is_none() || self.claim_time.is_none() {
                    warn!(
                        id = self.id,
                        has_claimant = claimed_by.is_some(),
                        has_claim_time = self.claim_time.is_some(),
                        "claimed record is missing claim details"
                    );
                }
                Some(ApprovedStatus::Claimed {
                    claimed_by,
                    claim_time: self.claim_time,
                })
            }
        };

        let item = Item {
            id: self.id,
            item_name: self.item_name,
            description: self.description,
            image_id: self.image_id,
            location: self.location,
            contact_info: self.contact_info,
            lost_time: self.lost_time,
            kind: self.kind,
            created_at: self.created_at,
        };

        match status {
            None => Entry::Pending(PendingItem::new(item)),
            Some(status) => Entry::Approved(ApprovedItem { item, status }),
        }
    }

    fn from_parts(
        item: Item,
        status: ItemStatus,
        claimed_by: Option<String>,
        claim_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: item.id,
            item_name: item.item_name,
            description: item.description,
            image_id: item.image_id,
            location: item.location,
            contact_info: item.contact_info,
            lost_time: item.lost_time,
            kind: item.kind,
            created_at: item.created_at,
            status,
            claimed_by,
            claim_time,
        }
    }
}

impl From<PendingItem> for ItemRecord {
    fn from(pending: PendingItem) -> Self {
        ItemRecord::from_parts(pending.item, ItemStatus::Pending, None, None)
    }
}

impl From<ApprovedItem> for ItemRecord {
    fn from(approved: ApprovedItem) -> Self {
        let status = approved.status();
        let (claimed_by, claim_time) = match approved.status {
            ApprovedStatus::Claimed {
                claimed_by,
                claim_time,
            } => (claimed_by, claim_time),
            _ => (None, None),
        };
        ItemRecord::from_parts(approved.item, status, claimed_by, claim_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(status: &str, extra: &str) -> String {
        format!(
            r#"{{"id": 7, "item_name": "Umbrella", "description": "black", "image_id": 12,
                "location": "Hall B", "contact_info": null,
                "lost_time": "2024-05-01T10:00:00", "type": "lost",
                "created_at": "2024-05-01T11:30:00Z", "status": "{status}"{extra}}}"#
        )
    }

    #[test]
    fn test_pending_record_routes_to_pending() {
        let record: ItemRecord = serde_json::from_str(&record_json("pending", "")).unwrap();
        assert_eq!(record.image_id.as_deref(), Some("12"));
        assert_eq!(record.contact_info, "");

        match record.into_entry() {
            Entry::Pending(item) => assert_eq!(item.id(), 7),
            other => panic!("expected pending entry, got {:?}", other),
        }
    }

    #[test]
    fn test_claimed_record_keeps_claim_details() {
        let json = record_json(
            "claimed",
            r#", "claimed_by": "Alice", "claim_time": "2024-05-02T09:00:00+02:00""#,
        );
        let record: ItemRecord = serde_json::from_str(&json).unwrap();
        let Entry::Approved(item) = record.into_entry() else {
            panic!("expected approved entry");
        };
        assert_eq!(item.status(), ItemStatus::Claimed);
        assert_eq!(item.claimed_by(), Some("Alice"));
        assert_eq!(
            item.claim_time().unwrap().to_rfc3339(),
            "2024-05-02T07:00:00+00:00"
        );
    }

    #[test]
    fn test_claimed_record_without_claim_time_stays_approved() {
        let json = record_json("claimed", r#", "claimed_by": "Bob", "claim_time": null"#);
        let record: ItemRecord = serde_json::from_str(&json).unwrap();
        let Entry::Approved(item) = record.into_entry() else {
            panic!("expected approved entry");
        };
        assert_eq!(item.id(), 7);
        assert_eq!(item.status(), ItemStatus::Claimed);
        assert_eq!(item.claimed_by(), Some("Bob"));
        assert_eq!(item.claim_time(), None);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["claimed_by"], "Bob");
        assert!(value.get("claim_time").is_none());
    }

    #[test]
    fn test_claimed_record_without_details_stays_approved() {
        let json = record_json("claimed", r#", "claimed_by": "  ""#);
        let record: ItemRecord = serde_json::from_str(&json).unwrap();
        let Entry::Approved(item) = record.into_entry() else {
            panic!("expected approved entry");
        };
        assert_eq!(item.status(), ItemStatus::Claimed);
        assert_eq!(item.claimed_by(), None);
        assert_eq!(item.claim_time(), None);
    }

    #[test]
    fn test_approved_item_serializes_flat_record() {
        let record: ItemRecord = serde_json::from_str(&record_json("published", "")).unwrap();
        let Entry::Approved(item) = record.into_entry() else {
            panic!("expected approved entry");
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["status"], "published");
        assert_eq!(value["type"], "lost");
        assert!(value.get("claimed_by").is_none());
    }

    #[test]
    fn test_status_presentation_is_exhaustive() {
        for status in ItemStatus::ALL {
            assert!(!status.label().is_empty());
            let _ = status.tone();
        }
        assert_eq!(ItemStatus::Rejected.tone(), StatusTone::Danger);
        assert_eq!(ItemStatus::Claimed.tone(), StatusTone::Success);
    }
}
