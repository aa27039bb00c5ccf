//! Records held in the user's collections.
//!
//! Every record has an identity key. The store uses it to decide whether an
//! insert is new or a repeat, so two records with equal keys are the same
//! entry no matter what else they carry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::types::GarmentId;

/// Deserialize a string that may be absent or `null` as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keys held by [`BookmarkedShoot`]'s own fields. They never appear in
/// `extra`, or the flattened record would carry them twice.
pub const BOOKMARK_IDENTITY_FIELDS: [&str; 2] = ["title", "stylist"];

/// A shoot the user has bookmarked.
///
/// Identity is the pair of `title` and `stylist`. Every other field of the
/// shoot rides along untouched in `extra` and is flattened back next to the
/// identity fields when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkedShoot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stylist: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookmarkedShoot {
    /// Create a bookmark with no extra fields.
    #[must_use]
    pub fn new(title: impl Into<String>, stylist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylist: stylist.into(),
            extra: Map::new(),
        }
    }

    /// Attach an opaque field. `title` and `stylist` are ignored; set them
    /// through [`BookmarkedShoot::new`].
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !BOOKMARK_IDENTITY_FIELDS.contains(&key.as_str()) {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Drop any identity keys that were put into `extra` directly.
    pub(crate) fn strip_identity_fields(&mut self) {
        self.extra
            .retain(|key, _| !BOOKMARK_IDENTITY_FIELDS.contains(&key.as_str()));
    }

    /// Identity key: `"<title>-<stylist>"`.
    #[must_use]
    pub fn identity_key(&self) -> String {
        format!("{}-{}", self.title, self.stylist)
    }
}

/// A stylist as offered for following.
///
/// This is the loose input shape; the store normalizes it into a
/// [`FollowedStylist`] with a concrete link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylist {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Stylist {
    #[must_use]
    pub fn new(name: impl Into<String>, link: Option<String>) -> Self {
        Self {
            name: name.into(),
            link,
        }
    }
}

/// A stylist the user follows. Identity is `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowedStylist {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

impl From<Stylist> for FollowedStylist {
    fn from(stylist: Stylist) -> Self {
        Self {
            name: stylist.name,
            link: stylist.link.unwrap_or_default(),
        }
    }
}

/// A garment saved to the user's wardrobe.
///
/// Identity is `(source_shoot_link, id)`: the same garment saved from two
/// different pages is two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    #[serde(default)]
    pub id: GarmentId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brand: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(
        rename = "sourceShootLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_shoot_link: Option<String>,
}

impl WardrobeItem {
    /// Create an item that has not been placed on a page yet.
    #[must_use]
    pub fn new(
        id: GarmentId,
        name: impl Into<String>,
        brand: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            kind: kind.into(),
            source_shoot_link: None,
        }
    }

    /// Identity key: `"<source_shoot_link>#<id>"`.
    #[must_use]
    pub fn identity_key(&self) -> String {
        wardrobe_key(self.source_shoot_link.as_deref().unwrap_or_default(), self.id)
    }
}

/// Build the wardrobe identity key for a link and garment id.
#[must_use]
pub fn wardrobe_key(link: &str, id: GarmentId) -> String {
    format!("{link}#{id}")
}
