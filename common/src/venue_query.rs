//! Structured venue query models shared between frontend and backend.

use serde::{Deserialize, Serialize};

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_MIN_GUESTS: &str = "minGuests";
pub const PARAM_MAX_GUESTS: &str = "maxGuests";
pub const PARAM_MIN_PRICE: &str = "minPrice";
pub const PARAM_MAX_PRICE: &str = "maxPrice";
pub const PARAM_AMENITIES: &str = "amenities";
pub const PARAM_SORT_BY: &str = "sortBy";

pub const AMENITY_SEPARATOR: char = ',';


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VenueSortKey {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Capacity,
}

impl VenueSortKey {
    pub const ALL: [VenueSortKey; 4] = [
        VenueSortKey::Relevance,
        VenueSortKey::PriceLow,
        VenueSortKey::PriceHigh,
        VenueSortKey::Capacity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VenueSortKey::Relevance => "relevance",
            VenueSortKey::PriceLow => "price_low",
            VenueSortKey::PriceHigh => "price_high",
            VenueSortKey::Capacity => "capacity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VenueSortKey::Relevance => "Relevance",
            VenueSortKey::PriceLow => "Price: Low to High",
            VenueSortKey::PriceHigh => "Price: High to Low",
            VenueSortKey::Capacity => "Capacity",
        }
    }

    /// Unrecognized names fall back to `Relevance`.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or_default()
    }
}

/// A `None` maximum means the range has no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueQuery {
    pub search_text: String,
    pub min_guests: i64,
    pub max_guests: Option<i64>,
    pub min_price: f64,
    pub max_price: Option<f64>,
    pub amenity_names: Vec<String>,
    pub sort_key: VenueSortKey,
}

impl Default for VenueQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            min_guests: 0,
            max_guests: None,
            min_price: 0.0,
            max_price: None,
            amenity_names: Vec::new(),
            sort_key: VenueSortKey::Relevance,
        }
    }
}
