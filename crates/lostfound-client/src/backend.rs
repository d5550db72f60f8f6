// Rust guideline compliant 2026-10-19

//! Backend operations the admin engine depends on.

use crate::error::Result;
use crate::types::AdminPage;
use async_trait::async_trait;
use lostfound_core::ItemId;

/// Admin-side backend surface.
///
/// Every method resolves to `Ok` only when the backend answered HTTP 200.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/admin/all-items?offset&limit`.
    ///
    /// A malformed element is dropped from the page but still counted in
    /// [`AdminPage::returned`].
    async fn list_admin_items(&self, offset: u64, limit: u32) -> Result<AdminPage>;

    /// `PUT /api/admin/approve-item/{id}`.
    async fn approve_item(&self, id: ItemId) -> Result<()>;

    /// `PUT /api/admin/reject-item/{id}`.
    async fn reject_item(&self, id: ItemId) -> Result<()>;

    /// `PUT /api/admin/mark-claimed/{id}?claimed_by`.
    ///
    /// The backend stamps its own claim time; callers keep theirs locally.
    async fn mark_claimed(&self, id: ItemId, claimed_by: &str) -> Result<()>;
}
