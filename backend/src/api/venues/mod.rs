//! Venue catalog API: parameter parsing, filtering/sorting and the list entry point.

mod list_venues;
pub use list_venues::{list_venues, list_venues_from, list_venues_with_config};

pub mod query_params;
pub mod venue_filter;

#[cfg(test)]
mod tests;
