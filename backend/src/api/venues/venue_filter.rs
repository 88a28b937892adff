//! Filter and sort stages of the venue catalog.
//!
//! Filters run in a fixed order (text search, capacity, price, amenities), each
//! keeping a stable subsequence of its input. Sorting happens once at the end
//! and is stable, so `Relevance` keeps the dataset order.

use std::cmp::Ordering;

use common::{venue::Venue, venue_query::{VenueQuery, VenueSortKey}};

pub fn apply_venue_query(venues: &[Venue], query: &VenueQuery) -> Vec<Venue> {
    let search_text = query.search_text.to_lowercase();
    let amenity_names = lowercase_all(&query.amenity_names);

    let mut result = venues
        .iter()
        .filter(|venue| search_text_matches(venue, &search_text))
        .filter(|venue| matches_capacity(venue, query.min_guests, query.max_guests))
        .filter(|venue| matches_price(venue, query.min_price, query.max_price))
        .filter(|venue| amenity_names_match(venue, &amenity_names))
        .cloned()
        .collect::<Vec<_>>();
    sort_venues(&mut result, query.sort_key);
    result
}

/// True when the venue passes every filter stage of `query`.
pub fn matches_query(venue: &Venue, query: &VenueQuery) -> bool {
    matches_search_text(venue, &query.search_text)
        && matches_capacity(venue, query.min_guests, query.max_guests)
        && matches_price(venue, query.min_price, query.max_price)
        && matches_amenities(venue, &query.amenity_names)
}

/// Case-insensitive substring match on title or city. Empty text matches everything.
pub fn matches_search_text(venue: &Venue, search_text: &str) -> bool {
    search_text_matches(venue, &search_text.to_lowercase())
}

/// Range overlap between the venue's capacity and the requested guest range.
pub fn matches_capacity(venue: &Venue, min_guests: i64, max_guests: Option<i64>) -> bool {
    venue.capacity_max >= min_guests && max_guests.map_or(true, |max| venue.capacity_min <= max)
}

/// Range overlap between the venue's price range and the requested one.
pub fn matches_price(venue: &Venue, min_price: f64, max_price: Option<f64>) -> bool {
    venue.price_max >= min_price && max_price.map_or(true, |max| venue.price_min <= max)
}

/// Any requested name found inside any of the venue's amenity names, ignoring case.
pub fn matches_amenities(venue: &Venue, amenity_names: &[String]) -> bool {
    amenity_names_match(venue, &lowercase_all(amenity_names))
}

pub fn sort_venues(venues: &mut [Venue], sort_key: VenueSortKey) {
    match sort_key {
        VenueSortKey::Relevance => {}
        VenueSortKey::PriceLow => venues.sort_by(|a, b| compare_f64(a.price_min, b.price_min)),
        VenueSortKey::PriceHigh => venues.sort_by(|a, b| compare_f64(b.price_min, a.price_min)),
        VenueSortKey::Capacity => venues.sort_by(|a, b| b.capacity_max.cmp(&a.capacity_max)),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

// `search_text` is already lowercased
fn search_text_matches(venue: &Venue, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    venue.title.to_lowercase().contains(search_text) || venue.city.to_lowercase().contains(search_text)
}

// `amenity_names` are already lowercased
fn amenity_names_match(venue: &Venue, amenity_names: &[String]) -> bool {
    if amenity_names.is_empty() {
        return true;
    }
    let venue_amenities = venue.amenities.iter().map(|amenity| amenity.name.to_lowercase()).collect::<Vec<_>>();
    amenity_names
        .iter()
        .any(|wanted| venue_amenities.iter().any(|name| name.contains(wanted.as_str())))
}
