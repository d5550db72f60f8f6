// Rust guideline compliant 2026-10-19

//! Implementation of `lostfound public`.

use crate::context::CommandContext;
use anyhow::Result;
use lostfound_app::{search_public, AppError};
use lostfound_core::ItemKind;

/// Lists the public found or lost board, optionally searched.
///
/// # Errors
///
/// Returns an error if the listing cannot be fetched.
pub async fn execute(ctx: &CommandContext, kind: ItemKind, search: Option<&str>) -> Result<()> {
    let client = ctx.client()?;
    let items = match kind {
        ItemKind::Found => client.found_items().await,
        ItemKind::Lost => client.lost_items().await,
    }
    .map_err(AppError::from)?;

    let items = search_public(items, search.unwrap_or_default());
    ctx.emit(&ctx.formatter().format_public(&items));
    Ok(())
}
