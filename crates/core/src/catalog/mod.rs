//! Catalog data shaping.
//!
//! The backend answers catalog queries with nested rows (a shoot with its
//! stylist, its garments and each garment's brand). Pages want flat records,
//! so everything read from the backend passes through [`conversions`] on its
//! way to a view.

pub mod conversions;
pub mod rows;
pub mod views;

pub use conversions::{
    collect_brands, collect_stylists, convert_shoot, convert_shoots, convert_stylist, find_shoot,
    shoot_link,
};
pub use rows::{BrandRow, GarmentRow, ShootGarmentRow, ShootRow, StylistRow};
pub use views::{BrandView, GarmentView, ShootDetails, ShootView, StylistView};
