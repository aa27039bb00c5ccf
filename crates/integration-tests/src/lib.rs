//! Integration tests for NEDGE.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p nedge-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `collections_persistence` - Store state surviving a reopen through the
//!   file adapter
//! - `catalog_to_collections` - Catalog exports flowing into saved collections
//!
//! This crate only hosts shared fixtures; the tests live under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use nedge_cli::storage::FilePersistence;
use nedge_core::CollectionStore;

/// A catalog export with two shoots sharing a stylist and a brand.
pub const CATALOG_EXPORT: &str = r#"[
    {
        "id": 1,
        "slug": "spring-drop",
        "title": "Spring Drop",
        "description": "Linen and light",
        "created_at": "2024-03-01T10:00:00+00:00",
        "stylist": {"id": 3, "name": "Ana", "link": "https://ana.example"},
        "shoot_garments": [
            {"garment": {"id": 5, "name": "Trench", "type": "outerwear",
                         "brand": {"id": 2, "name": "Acne", "link": "https://acne.example"}}},
            {"garment": {"id": 6, "name": "Loafer", "type": "shoes", "brand": null}}
        ]
    },
    {
        "id": 2,
        "slug": "night-shift",
        "title": "Night Shift",
        "stylist": {"id": 3, "name": "Ana", "link": "https://ana.example"},
        "shoot_garments": [
            {"garment": {"id": 5, "name": "Trench", "type": "outerwear",
                         "brand": {"id": 2, "name": "Acne", "link": "https://acne.example"}}},
            {"garment": null}
        ]
    }
]"#;

/// Open a store backed by files in `dir`, as the CLI does.
#[must_use]
pub fn open_store(dir: &Path) -> CollectionStore<FilePersistence> {
    CollectionStore::hydrate(FilePersistence::new(dir))
}
