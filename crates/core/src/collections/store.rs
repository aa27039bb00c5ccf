//! The collection store.
//!
//! Holds bookmarks, followed stylists and wardrobe items in memory, newest
//! first, and mirrors all three to a [`PersistenceAdapter`] after every
//! mutation. None of the operations can fail: repeats are ignored, missing
//! entries are ignored, and storage problems are logged and skipped.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{BookmarkedShoot, FollowedStylist, Stylist, WardrobeItem, wardrobe_key};
use super::persistence::{NoopPersistence, PersistenceAdapter, PersistenceError, keys};
use crate::types::GarmentId;

/// The user's saved collections.
#[derive(Debug, Clone)]
pub struct CollectionStore<P = NoopPersistence> {
    bookmarks: Vec<BookmarkedShoot>,
    following: Vec<FollowedStylist>,
    wardrobe: Vec<WardrobeItem>,
    adapter: P,
}

impl Default for CollectionStore<NoopPersistence> {
    fn default() -> Self {
        Self::hydrate(NoopPersistence)
    }
}

impl<P: PersistenceAdapter> CollectionStore<P> {
    /// Build a store, reading each collection from `adapter`.
    ///
    /// A key that is absent, or holds something that does not decode as the
    /// expected collection, starts empty.
    #[must_use]
    pub fn hydrate(adapter: P) -> Self {
        if !adapter.is_available() {
            debug!("Durable storage unavailable, starting with empty collections");
            return Self {
                bookmarks: Vec::new(),
                following: Vec::new(),
                wardrobe: Vec::new(),
                adapter,
            };
        }

        let bookmarks = load_collection(&adapter, keys::BOOKMARKS);
        let following = load_collection(&adapter, keys::FOLLOWING);
        let wardrobe = load_collection(&adapter, keys::WARDROBE);

        debug!(
            bookmarks = bookmarks.len(),
            following = following.len(),
            wardrobe = wardrobe.len(),
            "Collections hydrated"
        );

        Self {
            bookmarks,
            following,
            wardrobe,
            adapter,
        }
    }

    /// Bookmarked shoots, newest first.
    #[must_use]
    pub fn bookmarks(&self) -> &[BookmarkedShoot] {
        &self.bookmarks
    }

    /// Followed stylists, newest first.
    #[must_use]
    pub fn following(&self) -> &[FollowedStylist] {
        &self.following
    }

    /// Wardrobe items, newest first.
    #[must_use]
    pub fn wardrobe(&self) -> &[WardrobeItem] {
        &self.wardrobe
    }

    /// The adapter the store writes through.
    #[must_use]
    pub const fn adapter(&self) -> &P {
        &self.adapter
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    /// Bookmark a shoot unless one with the same title and stylist exists.
    ///
    /// `title` or `stylist` keys left in the shoot's extra fields are dropped.
    pub fn add_bookmark(&mut self, mut shoot: BookmarkedShoot) {
        shoot.strip_identity_fields();
        let key = shoot.identity_key();
        if self.bookmarks.iter().any(|b| b.identity_key() == key) {
            debug!(%key, "Shoot already bookmarked");
        } else {
            debug!(%key, "Bookmarking shoot");
            self.bookmarks.insert(0, shoot);
        }
        self.commit();
    }

    /// Remove the bookmark with the same title and stylist as `shoot`.
    pub fn remove_bookmark(&mut self, shoot: &BookmarkedShoot) {
        let key = shoot.identity_key();
        self.bookmarks.retain(|b| b.identity_key() != key);
        debug!(%key, "Bookmark removed");
        self.commit();
    }

    /// Whether a shoot with the same title and stylist is bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self, shoot: &BookmarkedShoot) -> bool {
        let key = shoot.identity_key();
        self.bookmarks.iter().any(|b| b.identity_key() == key)
    }

    // =========================================================================
    // Following
    // =========================================================================

    /// Follow a stylist unless one with the same name is already followed.
    ///
    /// A missing link is stored as `""`.
    pub fn add_following(&mut self, stylist: Stylist) {
        if self.is_following(&stylist.name) {
            debug!(name = %stylist.name, "Stylist already followed");
        } else {
            debug!(name = %stylist.name, "Following stylist");
            self.following.insert(0, FollowedStylist::from(stylist));
        }
        self.commit();
    }

    /// Stop following every stylist named exactly `name`.
    pub fn remove_following(&mut self, name: &str) {
        self.following.retain(|s| s.name != name);
        debug!(%name, "Stylist unfollowed");
        self.commit();
    }

    #[must_use]
    pub fn is_following(&self, name: &str) -> bool {
        self.following.iter().any(|s| s.name == name)
    }

    // =========================================================================
    // Wardrobe
    // =========================================================================

    /// Save a garment as seen on `page_path`.
    ///
    /// The item's `source_shoot_link` is replaced with `page_path` before the
    /// duplicate check, so the same garment saved from two pages is kept twice.
    pub fn add_wardrobe_item(&mut self, mut item: WardrobeItem, page_path: &str) {
        item.source_shoot_link = Some(page_path.to_owned());
        let key = item.identity_key();
        if self.wardrobe.iter().any(|w| w.identity_key() == key) {
            debug!(%key, "Wardrobe item already saved");
        } else {
            debug!(%key, "Saving wardrobe item");
            self.wardrobe.insert(0, item);
        }
        self.commit();
    }

    /// Remove every wardrobe item with this garment id, whatever page it was
    /// saved from.
    pub fn remove_wardrobe_item(&mut self, id: GarmentId) {
        self.wardrobe.retain(|w| w.id != id);
        debug!(%id, "Wardrobe item removed");
        self.commit();
    }

    /// Whether this garment has been saved from `page_path`.
    #[must_use]
    pub fn has_wardrobe_item(&self, id: GarmentId, page_path: &str) -> bool {
        let key = wardrobe_key(page_path, id);
        self.wardrobe.iter().any(|w| w.identity_key() == key)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write all three collections to the adapter.
    fn commit(&mut self) {
        if !self.adapter.is_available() {
            return;
        }

        let results = [
            write_collection(&mut self.adapter, keys::BOOKMARKS, &self.bookmarks),
            write_collection(&mut self.adapter, keys::FOLLOWING, &self.following),
            write_collection(&mut self.adapter, keys::WARDROBE, &self.wardrobe),
        ];

        for err in results.into_iter().filter_map(Result::err) {
            warn!(error = %err, "Failed to persist collection");
        }
    }
}

/// Read one collection, falling back to empty when absent or unreadable.
fn load_collection<P, T>(adapter: &P, key: &str) -> Vec<T>
where
    P: PersistenceAdapter,
    T: DeserializeOwned,
{
    let Some(raw) = adapter.load(key) else {
        return Vec::new();
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(%key, error = %e, "Discarding unreadable stored collection");
        Vec::new()
    })
}

fn write_collection<P, T>(adapter: &mut P, key: &str, items: &[T]) -> Result<(), PersistenceError>
where
    P: PersistenceAdapter,
    T: Serialize,
{
    let encoded = serde_json::to_string(items)?;
    adapter.save(key, &encoded)
}
