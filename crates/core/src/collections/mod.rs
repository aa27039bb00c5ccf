//! The user's saved collections.
//!
//! Three independent lists are kept per user:
//!
//! | Collection | Record | Identity |
//! |---|---|---|
//! | bookmarks | [`BookmarkedShoot`] | `title-stylist` |
//! | following | [`FollowedStylist`] | `name` |
//! | wardrobe | [`WardrobeItem`] | `sourceShootLink#id` |
//!
//! [`CollectionStore`] owns the lists and a [`PersistenceAdapter`]; each
//! list is stored as a JSON array under its own key in [`keys`].

pub mod models;
pub mod persistence;
pub mod store;

pub use models::{
    BOOKMARK_IDENTITY_FIELDS, BookmarkedShoot, FollowedStylist, Stylist, WardrobeItem,
    wardrobe_key,
};
pub use persistence::{
    MemoryPersistence, NoopPersistence, PersistenceAdapter, PersistenceError, keys,
};
pub use store::CollectionStore;
