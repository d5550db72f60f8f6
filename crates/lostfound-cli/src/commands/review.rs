// Rust guideline compliant 2026-10-19

//! Implementation of `lostfound approve`, `reject`, and `claim`.
//!
//! Each command syncs first so the item is looked up in fresh partitions,
//! then sends the mutation. Nothing is printed as changed unless the backend
//! confirmed it.

use crate::commands::dashboard::synced_console;
use crate::context::CommandContext;
use anyhow::Result;
use lostfound_core::ItemId;

/// Publishes a pending item.
///
/// # Errors
///
/// Returns an error if the item is not pending or the backend refuses.
pub async fn approve(ctx: &CommandContext, id: ItemId) -> Result<()> {
    let (console, _) = synced_console(ctx).await?;
    let item = console.mutations().approve(id).await?;
    ctx.emit(&ctx.formatter().format_item(&item));
    Ok(())
}

/// Rejects a pending item.
///
/// # Errors
///
/// Returns an error if the item is not pending or the backend refuses.
pub async fn reject(ctx: &CommandContext, id: ItemId) -> Result<()> {
    let (console, _) = synced_console(ctx).await?;
    let item = console.mutations().reject(id).await?;
    ctx.emit(&ctx.formatter().format_item(&item));
    Ok(())
}

/// Marks a published item as claimed.
///
/// # Errors
///
/// Returns an error if the claimant is blank, the item is not published, or
/// the backend refuses.
pub async fn claim(ctx: &CommandContext, id: ItemId, claimed_by: &str) -> Result<()> {
    let (console, _) = synced_console(ctx).await?;
    let item = console.mutations().mark_claimed(id, claimed_by).await?;
    ctx.emit(&ctx.formatter().format_item(&item));
    Ok(())
}
