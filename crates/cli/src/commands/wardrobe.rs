//! Wardrobe commands.
//!
//! # Usage
//!
//! ```bash
//! nedge wardrobe add --id 5 --name Coat --brand Acne --type outerwear --page /shoots/spring-drop
//! nedge wardrobe remove --id 5
//! nedge wardrobe list
//! ```
//!
//! `remove` drops the garment from every page it was saved from.

use nedge_core::{CollectionStore, GarmentId, PersistenceAdapter, WardrobeItem};
use tracing::info;

/// Save a garment as seen on `page`.
pub fn add<P: PersistenceAdapter>(
    store: &mut CollectionStore<P>,
    item: WardrobeItem,
    page: &str,
) {
    let id = item.id;
    if store.has_wardrobe_item(id, page) {
        info!(%id, page, "Garment already in wardrobe");
    } else {
        info!(%id, page, "Saved garment to wardrobe");
    }
    store.add_wardrobe_item(item, page);
}

/// Remove a garment from the wardrobe, logging how many entries went.
pub fn remove<P: PersistenceAdapter>(store: &mut CollectionStore<P>, id: GarmentId) {
    let before = store.wardrobe().len();
    store.remove_wardrobe_item(id);
    let removed = before - store.wardrobe().len();
    info!(%id, removed, "Removed garment from wardrobe");
}

/// Wardrobe items, newest first.
#[must_use]
pub fn list<P: PersistenceAdapter>(store: &CollectionStore<P>) -> &[WardrobeItem] {
    store.wardrobe()
}
