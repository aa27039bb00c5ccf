//! Following commands.
//!
//! # Usage
//!
//! ```bash
//! nedge following add --name Jane --link https://jane.example
//! nedge following remove --name Jane
//! nedge following list
//! ```

use nedge_core::{CollectionStore, FollowedStylist, PersistenceAdapter, Stylist};
use tracing::info;

/// Follow a stylist by name. A stylist already followed keeps their
/// original link.
pub fn add<P: PersistenceAdapter>(
    store: &mut CollectionStore<P>,
    name: &str,
    link: Option<String>,
) {
    if store.is_following(name) {
        info!(name, "Already following stylist");
    } else {
        info!(name, "Following stylist");
    }
    store.add_following(Stylist::new(name, link));
}

/// Unfollow the stylist with exactly this name.
pub fn remove<P: PersistenceAdapter>(store: &mut CollectionStore<P>, name: &str) {
    store.remove_following(name);
    info!(name, "Unfollowed stylist");
}

/// Followed stylists, newest first.
#[must_use]
pub fn list<P: PersistenceAdapter>(store: &CollectionStore<P>) -> &[FollowedStylist] {
    store.following()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_add_twice_keeps_first_link() {
        let mut store = CollectionStore::default();
        add(&mut store, "Jane", None);
        add(&mut store, "Jane", Some("https://jane.example".to_string()));

        assert_eq!(list(&store).len(), 1);
        assert_eq!(list(&store)[0].link, "");

        remove(&mut store, "Jane");
        assert!(list(&store).is_empty());
    }
}
