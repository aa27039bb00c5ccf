//! Integration tests for saved collections surviving a reopen.
//!
//! Each test writes through one store instance and reads back through a
//! fresh one on the same directory, the way two `nedge` invocations would.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use nedge_core::collections::keys;
use nedge_core::{BookmarkedShoot, GarmentId, Stylist, WardrobeItem};
use nedge_integration_tests::open_store;

fn item(id: i64) -> WardrobeItem {
    WardrobeItem::new(GarmentId::new(id), "Trench", "Acne", "outerwear")
}

// =============================================================================
// Walkthroughs
// =============================================================================

#[test]
fn test_bookmark_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    assert!(store.bookmarks().is_empty());

    let original = BookmarkedShoot::new("Spring Drop", "Ana");
    store.add_bookmark(original.clone());
    assert_eq!(store.bookmarks(), &[original.clone()]);

    store.add_bookmark(
        BookmarkedShoot::new("Spring Drop", "Ana").with_field("description", "changed"),
    );
    assert_eq!(store.bookmarks(), &[original.clone()]);

    store.remove_bookmark(&original);
    assert!(store.bookmarks().is_empty());

    assert!(open_store(dir.path()).bookmarks().is_empty());
}

#[test]
fn test_following_first_write_wins_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open_store(dir.path());
        store.add_following(Stylist::new("Jane", Some(String::new())));
    }

    let mut store = open_store(dir.path());
    store.add_following(Stylist::new("Jane", Some("https://x".to_string())));

    let reopened = open_store(dir.path());
    assert_eq!(reopened.following().len(), 1);
    assert_eq!(reopened.following()[0].link, "");
}

#[test]
fn test_wardrobe_identity_across_pages() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store.add_wardrobe_item(item(5), "/a");
    store.add_wardrobe_item(item(5), "/b");
    store.add_wardrobe_item(item(5), "/a");
    store.add_wardrobe_item(item(6), "/a");

    let reopened = open_store(dir.path());
    let keys: Vec<_> = reopened
        .wardrobe()
        .iter()
        .map(WardrobeItem::identity_key)
        .collect();
    assert_eq!(keys, ["/a#6", "/b#5", "/a#5"]);

    let mut store = reopened;
    store.remove_wardrobe_item(GarmentId::new(5));
    let keys: Vec<_> = open_store(dir.path())
        .wardrobe()
        .iter()
        .map(WardrobeItem::identity_key)
        .collect();
    assert_eq!(keys, ["/a#6"]);
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn test_reopen_reproduces_all_collections() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store.add_bookmark(BookmarkedShoot::new("A", "Ana").with_field("looks", 12));
    store.add_bookmark(BookmarkedShoot::new("B", "Lee").with_field("slug", "b"));
    store.add_following(Stylist::new("Jane", None));
    store.add_following(Stylist::new("Lee", Some("https://lee.example".to_string())));
    store.add_wardrobe_item(item(1), "/shoots/a");
    store.add_wardrobe_item(item(2), "/shoots/b");

    let reopened = open_store(dir.path());

    assert_eq!(reopened.bookmarks(), store.bookmarks());
    assert_eq!(reopened.following(), store.following());
    assert_eq!(reopened.wardrobe(), store.wardrobe());
}

#[test]
fn test_bookmark_extra_named_like_identity_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());

    store.add_bookmark(BookmarkedShoot::new("Older", "Lee"));
    let mut shoot = BookmarkedShoot::new("Spring Drop", "Ana").with_field("title", "Alt");
    shoot
        .extra
        .insert("stylist".to_string(), serde_json::Value::from("Someone"));
    store.add_bookmark(shoot);

    let contents = fs::read_to_string(dir.path().join("nedge-bookmarks.json")).unwrap();
    assert_eq!(contents.matches("\"title\"").count(), 2);

    let reopened = open_store(dir.path());
    let titles: Vec<_> = reopened.bookmarks().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Spring Drop", "Older"]);
    assert_eq!(reopened.bookmarks()[0].stylist, "Ana");
}

#[test]
fn test_each_collection_has_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path());
    store.add_following(Stylist::new("Jane", None));

    for key in keys::ALL {
        let path = dir.path().join(format!("{key}.json"));
        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert!(value.is_array(), "{key} should hold a JSON array");
    }
}

// =============================================================================
// Degraded storage
// =============================================================================

#[test]
fn test_corrupt_file_starts_that_collection_empty() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open_store(dir.path());
        store.add_bookmark(BookmarkedShoot::new("A", "Ana"));
        store.add_following(Stylist::new("Jane", None));
    }

    fs::write(dir.path().join("nedge-bookmarks.json"), "[{truncated").unwrap();

    let mut store = open_store(dir.path());
    assert!(store.bookmarks().is_empty());
    assert_eq!(store.following().len(), 1);

    // The next mutation overwrites the corrupt value with a clean one.
    store.add_bookmark(BookmarkedShoot::new("B", "Lee"));
    assert_eq!(open_store(dir.path()).bookmarks().len(), 1);
}

#[test]
fn test_legacy_wardrobe_entries_without_link_still_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("nedge-my-wardrobe.json"),
        r#"[{"id": 3, "name": "Scarf", "brand": "Toteme", "type": "accessory"}]"#,
    )
    .unwrap();

    let store = open_store(dir.path());

    assert_eq!(store.wardrobe().len(), 1);
    assert_eq!(store.wardrobe()[0].identity_key(), "#3");
}
