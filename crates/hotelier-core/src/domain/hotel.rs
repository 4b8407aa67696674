use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::normalize::{amenity_key, clean_text, dedupe_amenities};
use crate::HotelId;

/// Combine two optional text fields.
///
/// Precedence rule: `incoming` wins only when `current` is absent, or when
/// `incoming` is present and strictly longer by character count. Ties and
/// shorter incoming values keep `current`, so arrival order is observable.
pub fn merge_text(current: Option<String>, incoming: Option<String>) -> Option<String> {
    match (current, incoming) {
        (None, incoming) => incoming,
        (Some(current), Some(incoming))
            if incoming.chars().count() > current.chars().count() =>
        {
            Some(incoming)
        }
        (current, _) => current,
    }
}

/// Canonical hotel location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    /// Combine with another location; a present field is never discarded in
    /// favor of an absent one.
    ///
    /// Text fields follow [`merge_text`]; coordinates are first-present-wins
    /// (there is no notion of a "longer" number).
    pub fn combine(&mut self, other: Location) {
        self.address = merge_text(self.address.take(), other.address);
        self.city = merge_text(self.city.take(), other.city);
        self.country = merge_text(self.country.take(), other.country);
        self.lat = self.lat.or(other.lat);
        self.lng = self.lng.or(other.lng);
    }
}

/// Canonicalized amenity token lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

impl Amenities {
    /// Combine with another amenity set.
    ///
    /// Both categories are concatenated and deduplicated by
    /// [`amenity_key`], keeping the first-seen spelling. A token whose key
    /// lands in both categories stays in `room` only — room-category
    /// membership wins collisions.
    pub fn combine(&mut self, other: Amenities) {
        let general =
            dedupe_amenities(std::mem::take(&mut self.general).into_iter().chain(other.general));
        let room =
            dedupe_amenities(std::mem::take(&mut self.room).into_iter().chain(other.room));

        let room_keys: HashSet<String> = room.iter().map(|token| amenity_key(token)).collect();
        self.general = general
            .into_iter()
            .filter(|token| !room_keys.contains(&amenity_key(token)))
            .collect();
        self.room = room;
    }
}

/// Single hotel image; the link is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub link: Option<String>,
    pub description: Option<String>,
}

impl Image {
    /// Build an image from raw supplier fields, normalizing both parts.
    ///
    /// A link that normalizes to absent still yields an Image; identity
    /// resolution happens later through link equality in [`Images::combine`].
    pub fn from_parts(link: Option<String>, description: Option<String>) -> Self {
        Self {
            link: clean_text(link),
            description: clean_text(description),
        }
    }
}

/// The three image sequences carried per hotel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub rooms: Vec<Image>,
    pub site: Vec<Image>,
    pub amenities: Vec<Image>,
}

impl Images {
    /// Union each sequence by link equality and sort it by link.
    ///
    /// The first occurrence of a link keeps its description — this is a set
    /// union, not a field-level merge of descriptions.
    pub fn combine(&mut self, other: Images) {
        self.rooms = union_by_link(std::mem::take(&mut self.rooms), other.rooms);
        self.site = union_by_link(std::mem::take(&mut self.site), other.site);
        self.amenities = union_by_link(std::mem::take(&mut self.amenities), other.amenities);
    }
}

fn union_by_link(current: Vec<Image>, incoming: Vec<Image>) -> Vec<Image> {
    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut merged: Vec<Image> = current
        .into_iter()
        .chain(incoming)
        .filter(|image| seen.insert(image.link.clone()))
        .collect();
    merged.sort_by(|a, b| a.link.cmp(&b.link));
    merged
}

/// Canonical hotel record produced by every adapter and stored in the
/// catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub destination_id: i64,
    pub name: Option<String>,
    pub location: Location,
    pub description: Option<String>,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: BTreeSet<String>,
}

impl Hotel {
    /// Reconcile another record describing the same hotel into this one.
    ///
    /// Consumes `other` so the merged record never aliases the incoming
    /// operand. `id` and `destination_id` are never altered — only the
    /// descriptive fields are reconciled.
    ///
    /// Booking conditions are a plain set union with no case normalization,
    /// unlike amenities. The asymmetry matches observed supplier behavior.
    pub fn merge(&mut self, other: Hotel) {
        self.name = merge_text(self.name.take(), other.name);
        self.description = merge_text(self.description.take(), other.description);
        self.location.combine(other.location);
        self.amenities.combine(other.amenities);
        self.images.combine(other.images);
        self.booking_conditions.extend(other.booking_conditions);
    }
}
