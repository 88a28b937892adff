//! Shared venue records, as stored in the dataset and returned to the catalog.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub capacity_min: i64,
    pub capacity_max: i64,
    pub price_min: f64,
    pub price_max: f64,
    #[serde(default)]
    pub photos: Vec<VenuePhoto>,
    #[serde(default)]
    pub amenities: Vec<VenueAmenity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenuePhoto {
    pub id: String,
    pub url: String,
    pub alt_text: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueAmenity {
    pub id: String,
    pub name: String,
    pub group: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VenuesResponse {
    pub venues: Vec<Venue>,
    pub total: u64,
}

impl VenuesResponse {
    pub fn from_venues(venues: Vec<Venue>) -> Self {
        let total = venues.len() as u64;
        Self { venues, total }
    }
}

impl Venue {
    /// Photos ordered by `position`; equal positions keep storage order.
    pub fn photos_in_display_order(&self) -> Vec<&VenuePhoto> {
        let mut photos = self.photos.iter().collect::<Vec<_>>();
        photos.sort_by_key(|photo| photo.position);
        photos
    }

    pub fn cover_photo(&self) -> Option<&VenuePhoto> {
        self.photos_in_display_order().into_iter().next()
    }
}
