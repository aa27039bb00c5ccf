//! Flat view models for catalog pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{GarmentId, ShootId};

/// A shoot ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootView {
    pub id: ShootId,
    pub slug: String,
    /// Page path of the shoot, e.g. `/shoots/spring-drop`.
    pub link: String,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub details: ShootDetails,
    pub garments: Vec<GarmentView>,
}

/// Headline fields of a shoot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootDetails {
    pub title: String,
    pub stylist: String,
    pub stylist_link: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentView {
    pub id: GarmentId,
    pub name: String,
    pub brand: String,
    pub brand_link: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A stylist directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistView {
    pub name: String,
    pub link: String,
    pub shoot_count: usize,
}

/// A brand directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandView {
    pub name: String,
    pub link: String,
    pub garment_count: usize,
}
