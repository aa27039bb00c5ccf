//! Subcommand implementations.
//!
//! Each command works on a [`CollectionStore`](nedge_core::CollectionStore)
//! opened by `main` and returns what should be printed, so commands can be
//! exercised without a terminal.

pub mod bookmarks;
pub mod catalog;
pub mod following;
pub mod wardrobe;

use serde::Serialize;

use crate::error::Result;

/// Render a value as pretty-printed JSON for stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
