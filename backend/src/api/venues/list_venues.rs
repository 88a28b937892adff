//! Entry point used by the HTTP endpoint and the frontend server function.

use std::collections::BTreeMap;

use common::venue::{Venue, VenuesResponse};

use crate::api::venues::{query_params::parse_venue_query, venue_filter::apply_venue_query};
use crate::config::CatalogConfig;
use crate::db_utils::venue_repository::load_venues;

pub async fn list_venues(params: BTreeMap<String, String>) -> anyhow::Result<VenuesResponse> {
    list_venues_with_config(&CatalogConfig::from_env(), params).await
}

pub async fn list_venues_with_config(config: &CatalogConfig, params: BTreeMap<String, String>) -> anyhow::Result<VenuesResponse> {
    let venues = load_venues(&config.venues_data_path).await?;
    Ok(list_venues_from(&venues, &params))
}

pub fn list_venues_from(venues: &[Venue], params: &BTreeMap<String, String>) -> VenuesResponse {
    let query = parse_venue_query(params);
    tracing::debug!("venue query: {:?}", query);
    let result = apply_venue_query(venues, &query);
    tracing::info!("LIST VENUES: {} of {} matched", result.len(), venues.len());
    VenuesResponse::from_venues(result)
}
