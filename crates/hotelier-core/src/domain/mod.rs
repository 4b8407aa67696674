//! # Domain Models
//!
//! Canonical hotel types and their reconciliation rules.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Hotel`] | Canonical record, one per [`HotelId`] |
//! | [`Location`] | Address, city, country, coordinates |
//! | [`Amenities`] | Canonical token lists (general / room) |
//! | [`Images`] | Room, site and amenity image sequences |
//! | [`Image`] | Link (identity key) plus optional description |
//! | [`HotelId`] | Validated hotel identifier |
//!
//! ## Reconciliation
//!
//! Every type carries an explicit combine rule instead of operator
//! overloading: [`merge_text`] (longer non-empty text wins),
//! [`Location::combine`], [`Amenities::combine`], [`Images::combine`], and
//! [`Hotel::merge`] at the top. Absent values are `Option::None` throughout;
//! merging never replaces a present field with an absent one.

mod hotel;
mod hotel_id;

pub use hotel::{merge_text, Amenities, Hotel, Image, Images, Location};
pub use hotel_id::HotelId;
