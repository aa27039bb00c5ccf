//! Bookmark commands.
//!
//! # Usage
//!
//! ```bash
//! nedge bookmarks add --title "Spring Drop" --stylist Ana --field season=SS24
//! nedge bookmarks remove --title "Spring Drop" --stylist Ana
//! nedge bookmarks list
//! ```

use nedge_core::collections::BOOKMARK_IDENTITY_FIELDS;
use nedge_core::{BookmarkedShoot, CollectionStore, PersistenceAdapter};
use serde_json::Value;
use tracing::info;

use crate::error::{CliError, Result};

/// Bookmark a shoot by title and stylist, with optional extra fields.
///
/// # Errors
///
/// Returns an error if a field is not of the form `key=value`, or names
/// `title` or `stylist`.
pub fn add<P: PersistenceAdapter>(
    store: &mut CollectionStore<P>,
    title: &str,
    stylist: &str,
    fields: &[String],
) -> Result<()> {
    let mut shoot = BookmarkedShoot::new(title, stylist);
    for raw in fields {
        let (key, value) = parse_field(raw)?;
        shoot = shoot.with_field(key, value);
    }

    if store.is_bookmarked(&shoot) {
        info!(title, stylist, "Shoot already bookmarked");
    } else {
        info!(title, stylist, "Bookmarked shoot");
    }
    store.add_bookmark(shoot);
    Ok(())
}

/// Remove the bookmark with this title and stylist.
pub fn remove<P: PersistenceAdapter>(store: &mut CollectionStore<P>, title: &str, stylist: &str) {
    store.remove_bookmark(&BookmarkedShoot::new(title, stylist));
    info!(title, stylist, "Removed bookmark");
}

/// Bookmarked shoots, newest first.
#[must_use]
pub fn list<P: PersistenceAdapter>(store: &CollectionStore<P>) -> &[BookmarkedShoot] {
    store.bookmarks()
}

/// Split `key=value`. The value is taken as JSON when it parses, otherwise
/// as a plain string.
fn parse_field(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .filter(|(key, _)| {
            let key = key.trim();
            !key.is_empty() && !BOOKMARK_IDENTITY_FIELDS.contains(&key)
        })
        .ok_or_else(|| CliError::InvalidField(raw.to_owned()))?;

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.trim().to_owned(), value))
}
