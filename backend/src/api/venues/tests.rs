//! Venue API Tests
//!
//! - **Parameter parsing**: defaults, tolerant numbers, amenity lists, sort keys.
//! - **Filtering**: each stage on its own and their conjunction.
//! - **Sorting**: ordering per key and stability of ties.
//! - **Entry point**: the bundled dataset and repository failures.

use std::collections::BTreeMap;

use common::{
    filter_state::{FilterState, FilterTextField},
    venue::{Venue, VenueAmenity},
    venue_query::{VenueQuery, VenueSortKey},
};

use super::query_params::{parse_float_prefix, parse_int_prefix, parse_venue_query, split_amenity_names};
use super::venue_filter::{
    apply_venue_query, matches_amenities, matches_capacity, matches_price, matches_query,
    matches_search_text, sort_venues,
};
use super::{list_venues_from, list_venues_with_config};
use crate::config::CatalogConfig;

fn venue(id: &str, title: &str, city: &str, capacity: (i64, i64), price: (f64, f64), amenities: &[&str]) -> Venue {
    Venue {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        country: "Testland".to_string(),
        city: city.to_string(),
        capacity_min: capacity.0,
        capacity_max: capacity.1,
        price_min: price.0,
        price_max: price.1,
        photos: vec![],
        amenities: amenities
            .iter()
            .enumerate()
            .map(|(i, name)| VenueAmenity {
                id: format!("{id}-am-{i}"),
                name: name.to_string(),
                group: "General".to_string(),
                description: String::new(),
            })
            .collect(),
    }
}

fn lake_lodge() -> Venue {
    venue("A", "Lake Lodge", "Austin", (10, 50), (100.0, 500.0), &["Wi-Fi"])
}

fn city_hall() -> Venue {
    venue("B", "City Hall", "Austin", (100, 300), (1000.0, 3000.0), &["Gym"])
}

fn catalog() -> Vec<Venue> {
    vec![
        venue("v1", "Seaside Villa", "Lagos", (4, 16), (450.0, 1200.0), &["Private Pool", "Wi-Fi"]),
        venue("v2", "Grand Hotel", "Madrid", (50, 600), (2500.0, 12000.0), &["Ballroom", "Parking"]),
        venue("v3", "Lotus Retreat", "Ubud", (10, 40), (300.0, 900.0), &["Yoga Hall"]),
        venue("v4", "Harbour Warehouse", "Bristol", (80, 400), (1800.0, 6000.0), &["Exhibition Space"]),
        venue("v5", "Villa Montclair", "Bordeaux", (20, 150), (450.0, 5000.0), &["Outdoor Pool", "Garden"]),
        venue("v6", "Lake Lodge", "Austin", (10, 50), (300.0, 1100.0), &["Wi-Fi", "Gym"]),
    ]
}

fn ids(venues: &[Venue]) -> Vec<&str> {
    venues.iter().map(|v| v.id.as_str()).collect()
}

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn query(pairs: &[(&str, &str)]) -> VenueQuery {
    parse_venue_query(&params(pairs))
}

// ============================================================
// PARAMETER PARSING
// ============================================================

#[test]
fn test_parse_empty_params_gives_neutral_query() {
    assert_eq!(query(&[]), VenueQuery::default());
}

#[test]
fn test_parse_all_params() {
    let q = query(&[
        ("search", "Austin"),
        ("minGuests", "20"),
        ("maxGuests", "60"),
        ("minPrice", "99.5"),
        ("maxPrice", "750"),
        ("amenities", "Wi-Fi,Private Pool"),
        ("sortBy", "capacity"),
    ]);
    assert_eq!(q.search_text, "Austin");
    assert_eq!(q.min_guests, 20);
    assert_eq!(q.max_guests, Some(60));
    assert_eq!(q.min_price, 99.5);
    assert_eq!(q.max_price, Some(750.0));
    assert_eq!(q.amenity_names, vec!["Wi-Fi", "Private Pool"]);
    assert_eq!(q.sort_key, VenueSortKey::Capacity);
}

#[test]
fn test_parse_unparsable_numbers_use_defaults() {
    let q = query(&[("minGuests", "many"), ("maxGuests", ""), ("minPrice", "cheap"), ("maxPrice", "-")]);
    assert_eq!(q.min_guests, 0);
    assert_eq!(q.max_guests, None);
    assert_eq!(q.min_price, 0.0);
    assert_eq!(q.max_price, None);
}

#[test]
fn test_parse_unknown_sort_and_keys_ignored() {
    let q = query(&[("sortBy", "newest"), ("page", "3")]);
    assert_eq!(q, VenueQuery::default());
}

#[test]
fn test_parse_int_prefix() {
    assert_eq!(parse_int_prefix("42"), Some(42));
    assert_eq!(parse_int_prefix("  12abc"), Some(12));
    assert_eq!(parse_int_prefix("12.7"), Some(12));
    assert_eq!(parse_int_prefix("-5"), Some(-5));
    assert_eq!(parse_int_prefix("+7"), Some(7));
    assert_eq!(parse_int_prefix("abc"), None);
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
    assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(i64::MIN));
    assert_eq!(parse_int_prefix("99999999999999999999guests"), Some(i64::MAX));
}

#[test]
fn test_parse_float_prefix() {
    assert_eq!(parse_float_prefix("99.5usd"), Some(99.5));
    assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
    assert_eq!(parse_float_prefix("2.5E-1"), Some(0.25));
    assert_eq!(parse_float_prefix("7e"), Some(7.0));
    assert_eq!(parse_float_prefix("5."), Some(5.0));
    assert_eq!(parse_float_prefix("-3.25"), Some(-3.25));
    assert_eq!(parse_float_prefix(" 10"), Some(10.0));
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix("price"), None);
    assert_eq!(parse_float_prefix("1e999"), Some(f64::INFINITY));
    assert_eq!(parse_float_prefix("-1e400"), Some(f64::NEG_INFINITY));
}

#[test]
fn test_split_amenities_discards_empty_tokens() {
    assert_eq!(split_amenity_names(",Wi-Fi,,Gym,"), vec!["Wi-Fi", "Gym"]);
    assert_eq!(split_amenity_names("private pool"), vec!["private pool"]);
    assert!(split_amenity_names(",,").is_empty());
}

#[test]
fn test_filter_state_params_parse_back() {
    let state = FilterState::default()
        .with_text_field(FilterTextField::Search, "villa")
        .with_text_field(FilterTextField::MaxGuests, "30")
        .with_amenity_toggled("Private Pool")
        .with_sort_by(VenueSortKey::PriceLow);
    let q = parse_venue_query(&state.to_query_params());
    assert_eq!(q.search_text, "villa");
    assert_eq!(q.min_guests, 0);
    assert_eq!(q.max_guests, Some(30));
    assert_eq!(q.amenity_names, vec!["Private Pool"]);
    assert_eq!(q.sort_key, VenueSortKey::PriceLow);
}

// ============================================================
// FILTERING
// ============================================================

#[test]
fn test_neutral_query_returns_everything_in_order() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &VenueQuery::default());
    assert_eq!(result, venues);
}

#[test]
fn test_scenario_guest_range() {
    let venues = vec![lake_lodge(), city_hall()];
    let result = apply_venue_query(&venues, &query(&[("minGuests", "20"), ("maxGuests", "60")]));
    assert_eq!(ids(&result), vec!["A"]);
}

#[test]
fn test_scenario_search_city_keeps_order() {
    let venues = vec![lake_lodge(), city_hall()];
    let result = apply_venue_query(&venues, &query(&[("search", "austin")]));
    assert_eq!(ids(&result), vec!["A", "B"]);
}

#[test]
fn test_scenario_price_high() {
    let venues = vec![lake_lodge(), city_hall()];
    let result = apply_venue_query(&venues, &query(&[("sortBy", "price_high")]));
    assert_eq!(ids(&result), vec!["B", "A"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &query(&[("search", "VILLA")]));
    assert_eq!(ids(&result), vec!["v1", "v5"]);
    assert!(matches_search_text(&venues[0], "seaside VILLA"));
}

#[test]
fn test_search_ignores_description_and_country() {
    let venues = catalog();
    assert!(!matches_search_text(&venues[0], "description"));
    assert!(!matches_search_text(&venues[0], "testland"));
    assert!(matches_search_text(&venues[0], ""));
}

#[test]
fn test_capacity_is_overlap_not_containment() {
    let lodge = lake_lodge();
    // venue minimum is 10 but it still serves a 5..12 group
    assert!(matches_capacity(&lodge, 5, Some(12)));
    assert!(matches_capacity(&lodge, 50, Some(50)));
    assert!(!matches_capacity(&lodge, 51, None));
    assert!(!matches_capacity(&lodge, 0, Some(9)));
}

#[test]
fn test_price_is_overlap() {
    let lodge = lake_lodge();
    assert!(matches_price(&lodge, 400.0, Some(2000.0)));
    assert!(matches_price(&lodge, 0.0, Some(100.0)));
    assert!(!matches_price(&lodge, 500.01, None));
    assert!(!matches_price(&lodge, 0.0, Some(99.99)));
}

#[test]
fn test_unbounded_maximum_keeps_large_venues() {
    let stadium = venue("s", "Stadium", "Lisbon", (5_000, 60_000), (999_999.0, 5_000_000.0), &[]);
    let result = apply_venue_query(std::slice::from_ref(&stadium), &VenueQuery::default());
    assert_eq!(ids(&result), vec!["s"]);
}

#[test]
fn test_amenity_substring_match() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &query(&[("amenities", "pool")]));
    assert_eq!(ids(&result), vec!["v1", "v5"]);
    assert!(matches_amenities(&venues[0], &["PRIVATE".to_string()]));
}

#[test]
fn test_amenities_any_requested() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &query(&[("amenities", "Gym,Yoga Hall")]));
    assert_eq!(ids(&result), vec!["v3", "v6"]);
}

#[test]
fn test_inverted_guest_range_is_empty() {
    let venues = vec![lake_lodge(), city_hall()];
    let result = apply_venue_query(&venues, &query(&[("minGuests", "100"), ("maxGuests", "10")]));
    assert!(result.is_empty());
}

#[test]
fn test_oversized_minimums_exclude_everything() {
    let venues = vec![lake_lodge(), city_hall()];
    let result = apply_venue_query(&venues, &query(&[("minGuests", "99999999999999999999")]));
    assert!(result.is_empty());
    let result = apply_venue_query(&venues, &query(&[("minPrice", "1e400")]));
    assert!(result.is_empty());
}

#[test]
fn test_oversized_maximums_include_everything() {
    let venues = vec![lake_lodge(), city_hall()];
    let q = query(&[("maxGuests", "99999999999999999999"), ("maxPrice", "1e400")]);
    assert_eq!(q.max_guests, Some(i64::MAX));
    assert_eq!(q.max_price, Some(f64::INFINITY));
    assert_eq!(ids(&apply_venue_query(&venues, &q)), vec!["A", "B"]);
}

#[test]
fn test_negative_values_applied_as_given() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &query(&[("maxPrice", "-1")]));
    assert!(result.is_empty());
    let result = apply_venue_query(&venues, &query(&[("minGuests", "-100")]));
    assert_eq!(result, venues);
}

#[test]
fn test_every_result_matches_all_filters() {
    let venues = catalog();
    let queries = [
        query(&[("search", "a"), ("minGuests", "15")]),
        query(&[("minPrice", "400"), ("maxPrice", "2000"), ("amenities", "wi")]),
        query(&[("search", "lake"), ("maxGuests", "45"), ("sortBy", "capacity")]),
        query(&[("amenities", "pool,garden"), ("maxPrice", "500"), ("sortBy", "price_low")]),
    ];
    for q in &queries {
        let result = apply_venue_query(&venues, q);
        for v in &result {
            assert!(matches_query(v, q), "{} should not pass {:?}", v.id, q);
        }
        // and nothing that passes was dropped
        let expected = venues.iter().filter(|v| matches_query(v, q)).count();
        assert_eq!(result.len(), expected);
    }
}

#[test]
fn test_input_is_not_modified() {
    let venues = catalog();
    let before = venues.clone();
    let _ = apply_venue_query(&venues, &query(&[("sortBy", "price_high"), ("search", "a")]));
    assert_eq!(venues, before);
}

// ============================================================
// SORTING
// ============================================================

#[test]
fn test_price_low_is_non_decreasing_and_stable() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &query(&[("sortBy", "price_low")]));
    assert!(result.windows(2).all(|w| w[0].price_min <= w[1].price_min));
    // v1 and v5 share price_min 450 and keep catalog order
    assert_eq!(ids(&result), vec!["v3", "v6", "v1", "v5", "v4", "v2"]);
}

#[test]
fn test_price_high_is_non_increasing_and_stable() {
    let venues = catalog();
    let result = apply_venue_query(&venues, &query(&[("sortBy", "price_high")]));
    assert!(result.windows(2).all(|w| w[0].price_min >= w[1].price_min));
    assert_eq!(ids(&result), vec!["v2", "v4", "v1", "v5", "v3", "v6"]);
}

#[test]
fn test_capacity_is_non_increasing_and_stable() {
    let mut venues = catalog();
    venues.push(venue("v7", "Twin Lodge", "Austin", (1, 50), (10.0, 20.0), &[]));
    let result = apply_venue_query(&venues, &query(&[("sortBy", "capacity")]));
    assert!(result.windows(2).all(|w| w[0].capacity_max >= w[1].capacity_max));
    assert_eq!(ids(&result), vec!["v2", "v4", "v5", "v6", "v7", "v3", "v1"]);
}

#[test]
fn test_relevance_sort_is_noop() {
    let mut venues = catalog();
    let before = venues.clone();
    sort_venues(&mut venues, VenueSortKey::Relevance);
    assert_eq!(venues, before);
}

#[test]
fn test_apply_is_idempotent() {
    let venues = catalog();
    for sort in ["relevance", "price_low", "price_high", "capacity"] {
        let q = query(&[("search", "l"), ("minPrice", "300"), ("sortBy", sort)]);
        let once = apply_venue_query(&venues, &q);
        let twice = apply_venue_query(&once, &q);
        assert_eq!(once, twice, "sort {sort}");
    }
}

// ============================================================
// ENTRY POINT
// ============================================================

#[test]
fn test_list_venues_from_reports_total() {
    let venues = catalog();
    let response = list_venues_from(&venues, &params(&[("search", "lodge")]));
    assert_eq!(response.total, 1);
    assert_eq!(ids(&response.venues), vec!["v6"]);
}

#[tokio::test]
async fn test_list_venues_on_bundled_dataset() {
    let response = list_venues_with_config(&CatalogConfig::default(), params(&[("search", "austin")]))
        .await
        .unwrap();
    assert_eq!(response.total, response.venues.len() as u64);
    assert!(!response.venues.is_empty());
    assert!(response.venues.iter().all(|v| v.city.to_lowercase().contains("austin") || v.title.to_lowercase().contains("austin")));
}

#[tokio::test]
async fn test_list_venues_missing_dataset_fails() {
    let config = CatalogConfig::new("/nonexistent/venues-catalog/venues.json");
    assert!(list_venues_with_config(&config, BTreeMap::new()).await.is_err());
}
