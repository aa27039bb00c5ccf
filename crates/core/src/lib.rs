//! NEDGE Core - user collections and catalog shaping.
//!
//! This crate holds everything about NEDGE that is independent of where it
//! runs:
//! - the user's saved collections (bookmarked shoots, followed stylists and
//!   wardrobe items) and the rules that keep them free of duplicates
//! - the persistence contract those collections are mirrored through
//! - the conversions that turn nested catalog rows into flat view models
//!
//! # Architecture
//!
//! No file system, network or database access lives here. Durable storage is
//! reached only through the [`PersistenceAdapter`] trait; the `cli` crate
//! provides the file-backed implementation.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs for shoots, stylists, brands and garments
//! - [`collections`] - The collection store and persistence adapters
//! - [`catalog`] - Catalog rows, view models and conversions between them

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod collections;
pub mod types;

pub use collections::{
    BookmarkedShoot, CollectionStore, FollowedStylist, MemoryPersistence, NoopPersistence,
    PersistenceAdapter, PersistenceError, Stylist, WardrobeItem,
};
pub use types::*;
