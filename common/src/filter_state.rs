//! User-editable filter state for the catalog page.
//!
//! The catalog keeps one `FilterState` in its URL. Every edit produces a new
//! value which is navigated to, so the page re-renders from the URL alone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::venue_query::{
    AMENITY_SEPARATOR, PARAM_AMENITIES, PARAM_MAX_GUESTS, PARAM_MAX_PRICE, PARAM_MIN_GUESTS,
    PARAM_MIN_PRICE, PARAM_SEARCH, PARAM_SORT_BY, VenueSortKey,
};

/// Amenities offered as checkboxes in the filter panel.
pub const AMENITY_OPTIONS: [&str; 4] = ["Wi-Fi", "Yoga Hall", "Gym", "Private Pool"];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTextField {
    Search,
    MinGuests,
    MaxGuests,
    MinPrice,
    MaxPrice,
}

impl FilterTextField {
    pub const ALL: [FilterTextField; 5] = [
        FilterTextField::Search,
        FilterTextField::MinGuests,
        FilterTextField::MaxGuests,
        FilterTextField::MinPrice,
        FilterTextField::MaxPrice,
    ];

    /// Query parameter key; the filter panel also uses it as the input's element id.
    pub fn param_name(&self) -> &'static str {
        match self {
            FilterTextField::Search => PARAM_SEARCH,
            FilterTextField::MinGuests => PARAM_MIN_GUESTS,
            FilterTextField::MaxGuests => PARAM_MAX_GUESTS,
            FilterTextField::MinPrice => PARAM_MIN_PRICE,
            FilterTextField::MaxPrice => PARAM_MAX_PRICE,
        }
    }
}

/// Numeric inputs stay as typed strings; the backend parser does the coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub min_guests: String,
    pub max_guests: String,
    pub min_price: String,
    pub max_price: String,
    pub selected_amenities: Vec<String>,
    pub sort_by: VenueSortKey,
}

impl FilterState {
    pub fn text_field(&self, field: FilterTextField) -> &str {
        match field {
            FilterTextField::Search => &self.search,
            FilterTextField::MinGuests => &self.min_guests,
            FilterTextField::MaxGuests => &self.max_guests,
            FilterTextField::MinPrice => &self.min_price,
            FilterTextField::MaxPrice => &self.max_price,
        }
    }

    pub fn with_text_field(&self, field: FilterTextField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FilterTextField::Search => &mut next.search,
            FilterTextField::MinGuests => &mut next.min_guests,
            FilterTextField::MaxGuests => &mut next.max_guests,
            FilterTextField::MinPrice => &mut next.min_price,
            FilterTextField::MaxPrice => &mut next.max_price,
        };
        *slot = value.into();
        next
    }

    pub fn is_amenity_selected(&self, amenity: &str) -> bool {
        self.selected_amenities.iter().any(|a| a == amenity)
    }

    /// Deselecting removes the amenity, selecting appends it at the end.
    pub fn with_amenity_toggled(&self, amenity: &str) -> Self {
        let mut next = self.clone();
        if next.is_amenity_selected(amenity) {
            next.selected_amenities.retain(|a| a != amenity);
        } else {
            next.selected_amenities.push(amenity.to_string());
        }
        next
    }

    pub fn with_sort_by(&self, sort_by: VenueSortKey) -> Self {
        Self { sort_by, ..self.clone() }
    }

    /// Raw request parameters; empty inputs are left out so the backend applies its defaults.
    pub fn to_query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        for field in [
            FilterTextField::Search,
            FilterTextField::MinGuests,
            FilterTextField::MaxGuests,
            FilterTextField::MinPrice,
            FilterTextField::MaxPrice,
        ] {
            let value = self.text_field(field);
            if !value.is_empty() {
                params.insert(field.param_name().to_string(), value.to_string());
            }
        }
        if !self.selected_amenities.is_empty() {
            params.insert(
                PARAM_AMENITIES.to_string(),
                self.selected_amenities.join(&AMENITY_SEPARATOR.to_string()),
            );
        }
        params.insert(PARAM_SORT_BY.to_string(), self.sort_by.as_str().to_string());
        params
    }
}
