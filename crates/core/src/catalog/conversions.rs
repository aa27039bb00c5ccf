//! Conversions from catalog rows to view models, and from view models to
//! collection records.

use std::collections::HashSet;

use serde_json::Value;

use super::rows::{BrandRow, GarmentRow, ShootGarmentRow, ShootRow, StylistRow};
use super::views::{BrandView, GarmentView, ShootDetails, ShootView, StylistView};
use crate::collections::{BookmarkedShoot, Stylist, WardrobeItem};
use crate::types::GarmentId;

/// Page path for a shoot slug.
#[must_use]
pub fn shoot_link(slug: &str) -> String {
    format!("/shoots/{slug}")
}

// =============================================================================
// Rows -> views
// =============================================================================

pub fn convert_shoot(row: ShootRow) -> ShootView {
    let (stylist, stylist_link) = row
        .stylist
        .map(|s| (s.name, s.link.unwrap_or_default()))
        .unwrap_or_default();

    ShootView {
        id: row.id,
        link: shoot_link(&row.slug),
        slug: row.slug,
        image_url: row.image_url,
        created_at: row.created_at,
        details: ShootDetails {
            title: row.title,
            stylist,
            stylist_link,
            description: row.description.unwrap_or_default(),
        },
        garments: row
            .shoot_garments
            .into_iter()
            .filter_map(|ShootGarmentRow { garment }| garment)
            .map(convert_garment)
            .collect(),
    }
}

pub fn convert_shoots(rows: Vec<ShootRow>) -> Vec<ShootView> {
    rows.into_iter().map(convert_shoot).collect()
}

fn convert_garment(row: GarmentRow) -> GarmentView {
    let (brand, brand_link) = row
        .brand
        .map(|BrandRow { name, link, .. }| (name, link.unwrap_or_default()))
        .unwrap_or_default();

    GarmentView {
        id: row.id,
        name: row.name,
        brand,
        brand_link,
        kind: row.kind.unwrap_or_default(),
    }
}

/// Turn a stylist row into the input for following them.
pub fn convert_stylist(row: StylistRow) -> Stylist {
    Stylist {
        name: row.name,
        link: row.link,
    }
}

// =============================================================================
// Directories
// =============================================================================

/// Distinct stylists across `shoots`, in first-seen order, with how many
/// shoots each one styled.
#[must_use]
pub fn collect_stylists(shoots: &[ShootView]) -> Vec<StylistView> {
    let mut stylists: Vec<StylistView> = Vec::new();

    for shoot in shoots {
        let details = &shoot.details;
        if details.stylist.is_empty() {
            continue;
        }
        match stylists.iter_mut().find(|s| s.name == details.stylist) {
            Some(existing) => existing.shoot_count += 1,
            None => stylists.push(StylistView {
                name: details.stylist.clone(),
                link: details.stylist_link.clone(),
                shoot_count: 1,
            }),
        }
    }

    stylists
}

/// Distinct brands across `shoots`, in first-seen order, with how many
/// distinct garments of each appear.
#[must_use]
pub fn collect_brands(shoots: &[ShootView]) -> Vec<BrandView> {
    let mut brands: Vec<BrandView> = Vec::new();
    let mut seen: HashSet<(String, GarmentId)> = HashSet::new();

    for garment in shoots.iter().flat_map(|s| &s.garments) {
        if garment.brand.is_empty() || !seen.insert((garment.brand.clone(), garment.id)) {
            continue;
        }
        match brands.iter_mut().find(|b| b.name == garment.brand) {
            Some(existing) => existing.garment_count += 1,
            None => brands.push(BrandView {
                name: garment.brand.clone(),
                link: garment.brand_link.clone(),
                garment_count: 1,
            }),
        }
    }

    brands
}

#[must_use]
pub fn find_shoot<'a>(shoots: &'a [ShootView], slug: &str) -> Option<&'a ShootView> {
    shoots.iter().find(|s| s.slug == slug)
}

// =============================================================================
// Views -> collection records
// =============================================================================

impl From<&ShootView> for BookmarkedShoot {
    fn from(shoot: &ShootView) -> Self {
        let mut bookmark = Self::new(shoot.details.title.clone(), shoot.details.stylist.clone())
            .with_field("slug", shoot.slug.clone())
            .with_field("link", shoot.link.clone())
            .with_field("description", shoot.details.description.clone());

        if let Some(url) = &shoot.image_url {
            bookmark = bookmark.with_field("image_url", url.clone());
        }
        if let Some(created_at) = shoot.created_at {
            bookmark = bookmark.with_field("created_at", Value::String(created_at.to_rfc3339()));
        }

        bookmark
    }
}

impl From<&ShootDetails> for Stylist {
    fn from(details: &ShootDetails) -> Self {
        let link = (!details.stylist_link.is_empty()).then(|| details.stylist_link.clone());
        Self::new(details.stylist.clone(), link)
    }
}

impl From<&GarmentView> for WardrobeItem {
    fn from(garment: &GarmentView) -> Self {
        Self::new(
            garment.id,
            garment.name.clone(),
            garment.brand.clone(),
            garment.kind.clone(),
        )
    }
}
