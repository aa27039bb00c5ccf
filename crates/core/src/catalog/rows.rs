//! Rows as returned by the catalog backend.
//!
//! A shoot is fetched together with its stylist and the garments worn in it,
//! each garment joined with its brand:
//!
//! ```text
//! shoots (*, stylist:stylists(*), shoot_garments(garment:garments(*, brand:brands(*))))
//! ```
//!
//! Joins may come back `null` and nested arrays may be missing entirely, so
//! every relation here is optional or defaults to empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{BrandId, GarmentId, ShootId, StylistId};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootRow {
    pub id: ShootId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stylist: Option<StylistRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shoot_garments: Vec<ShootGarmentRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistRow {
    pub id: StylistId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Join row between a shoot and a garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootGarmentRow {
    #[serde(default)]
    pub garment: Option<GarmentRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentRow {
    pub id: GarmentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub brand: Option<BrandRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRow {
    pub id: BrandId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}
