//! `GET /api/venues` JSON endpoint.

use std::collections::BTreeMap;

use axum::{extract::{Query, State}, http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{api::venues::list_venues_with_config, config::CatalogConfig};

pub const VENUES_ENDPOINT_PATH: &str = "/api/venues";
pub const FETCH_VENUES_FAILED: &str = "Failed to fetch venues";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenuesErrorResponse {
    pub error: String,
}

pub async fn list_venues_endpoint(
    State(config): State<CatalogConfig>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    info!("Listing venues: {:?}", params);
    match list_venues_with_config(&config, params).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::error!("list_venues_endpoint: request failed: {:#?}", e);
            let body = VenuesErrorResponse { error: FETCH_VENUES_FAILED.to_string() };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
