// Rust guideline compliant 2026-10-19

//! Search over the public found/lost listings.

use lostfound_client::PublicItem;

/// Filters public items by a search term and orders them newest id first.
///
/// The term is matched case-insensitively against the item name and the
/// description. A blank term keeps every item.
#[must_use]
pub fn search_public(mut items: Vec<PublicItem>, term: &str) -> Vec<PublicItem> {
    let needle = term.trim().to_lowercase();
    if !needle.is_empty() {
        items.retain(|item| {
            item.item_name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        });
    }
    items.sort_by(|a, b| b.id.cmp(&a.id));
    items
}
