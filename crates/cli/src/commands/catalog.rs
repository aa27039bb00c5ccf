//! Catalog commands.
//!
//! Catalog files are JSON arrays of shoot rows as exported from the backend
//! (each shoot with its nested stylist and garments).
//!
//! # Usage
//!
//! ```bash
//! # Flatten a catalog export into view models
//! nedge catalog shoots --input shoots.json
//! nedge catalog stylists --input shoots.json
//! nedge catalog brands --input shoots.json
//!
//! # Save things straight from a catalog export
//! nedge catalog bookmark --input shoots.json --slug spring-drop
//! nedge catalog follow --input shoots.json --slug spring-drop
//! nedge catalog save --input shoots.json --slug spring-drop --garment 5
//! ```

use std::fs;
use std::path::Path;

use nedge_core::catalog::{self, ShootRow, ShootView};
use nedge_core::{BookmarkedShoot, CollectionStore, GarmentId, PersistenceAdapter, Stylist, WardrobeItem};
use tracing::info;

use crate::error::{CliError, Result};

/// Read a catalog export and flatten it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// shoot rows.
pub fn load(path: &Path) -> Result<Vec<ShootView>> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<ShootRow> =
        serde_json::from_str(&contents).map_err(|source| CliError::DecodeInput {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), shoots = rows.len(), "Loaded catalog");
    Ok(catalog::convert_shoots(rows))
}

fn find<'a>(shoots: &'a [ShootView], slug: &str) -> Result<&'a ShootView> {
    catalog::find_shoot(shoots, slug).ok_or_else(|| CliError::ShootNotFound(slug.to_owned()))
}

/// Bookmark the shoot with this slug.
///
/// # Errors
///
/// Returns an error if no shoot has this slug.
pub fn bookmark<P: PersistenceAdapter>(
    store: &mut CollectionStore<P>,
    shoots: &[ShootView],
    slug: &str,
) -> Result<()> {
    let shoot = find(shoots, slug)?;
    store.add_bookmark(BookmarkedShoot::from(shoot));
    info!(slug, title = %shoot.details.title, "Bookmarked shoot from catalog");
    Ok(())
}

/// Follow the stylist of the shoot with this slug.
///
/// # Errors
///
/// Returns an error if no shoot has this slug.
pub fn follow<P: PersistenceAdapter>(
    store: &mut CollectionStore<P>,
    shoots: &[ShootView],
    slug: &str,
) -> Result<()> {
    let shoot = find(shoots, slug)?;
    if shoot.details.stylist.is_empty() {
        tracing::warn!(slug, "Shoot has no stylist, nothing to follow");
        return Ok(());
    }
    store.add_following(Stylist::from(&shoot.details));
    info!(slug, stylist = %shoot.details.stylist, "Following stylist from catalog");
    Ok(())
}

/// Save a garment featured in the shoot with this slug, using the shoot's
/// page as the source link.
///
/// # Errors
///
/// Returns an error if no shoot has this slug or the shoot does not feature
/// the garment.
pub fn save<P: PersistenceAdapter>(
    store: &mut CollectionStore<P>,
    shoots: &[ShootView],
    slug: &str,
    garment: GarmentId,
) -> Result<()> {
    let shoot = find(shoots, slug)?;
    let item = shoot
        .garments
        .iter()
        .find(|g| g.id == garment)
        .map(WardrobeItem::from)
        .ok_or_else(|| CliError::GarmentNotFound {
            slug: slug.to_owned(),
            id: garment,
        })?;

    store.add_wardrobe_item(item, &shoot.link);
    info!(slug, %garment, "Saved garment from catalog");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "id": 1,
            "slug": "spring-drop",
            "title": "Spring Drop",
            "stylist": {"id": 3, "name": "Ana", "link": "https://ana.example"},
            "shoot_garments": [
                {"garment": {"id": 5, "name": "Coat", "type": "outerwear",
                             "brand": {"id": 2, "name": "Acne"}}}
            ]
        },
        {"id": 2, "slug": "untitled", "title": "Untitled", "stylist": null}
    ]"#;

    fn write_catalog(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("shoots.json");
        fs::write(&path, CATALOG).unwrap();
        path
    }

    #[test]
    fn test_load_flattens_rows() {
        let dir = tempfile::tempdir().unwrap();
        let shoots = load(&write_catalog(dir.path())).unwrap();

        assert_eq!(shoots.len(), 2);
        assert_eq!(shoots[0].link, "/shoots/spring-drop");
        assert_eq!(shoots[0].garments[0].brand, "Acne");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::ReadInput { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        assert!(matches!(load(&path), Err(CliError::DecodeInput { .. })));
    }

    #[test]
    fn test_bookmark_follow_and_save_from_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let shoots = load(&write_catalog(dir.path())).unwrap();
        let mut store = CollectionStore::default();

        bookmark(&mut store, &shoots, "spring-drop").unwrap();
        follow(&mut store, &shoots, "spring-drop").unwrap();
        save(&mut store, &shoots, "spring-drop", GarmentId::new(5)).unwrap();

        assert_eq!(store.bookmarks()[0].identity_key(), "Spring Drop-Ana");
        assert_eq!(store.following()[0].link, "https://ana.example");
        assert!(store.has_wardrobe_item(GarmentId::new(5), "/shoots/spring-drop"));
    }

    #[test]
    fn test_follow_without_stylist_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let shoots = load(&write_catalog(dir.path())).unwrap();
        let mut store = CollectionStore::default();

        follow(&mut store, &shoots, "untitled").unwrap();
        assert!(store.following().is_empty());
    }

    #[test]
    fn test_unknown_slug_and_garment() {
        let dir = tempfile::tempdir().unwrap();
        let shoots = load(&write_catalog(dir.path())).unwrap();
        let mut store = CollectionStore::default();

        assert!(matches!(
            bookmark(&mut store, &shoots, "nope"),
            Err(CliError::ShootNotFound(_))
        ));
        assert!(matches!(
            save(&mut store, &shoots, "spring-drop", GarmentId::new(99)),
            Err(CliError::GarmentNotFound { .. })
        ));
    }
}
