//! Server functions for the venue catalog.

use std::collections::BTreeMap;

use common::venue::VenuesResponse;
use dioxus::prelude::*;


/// Failures reach the client as one generic message; the cause is only logged on the server.
#[server]
pub async fn list_venues(params: BTreeMap<String, String>) -> Result<VenuesResponse, ServerFnError> {
    let x = backend::api::venues::list_venues(params).await;
    x.map_err(|e| {
        dioxus::logger::tracing::error!("list_venues: request failed: {:#?}", e);
        ServerFnError::ServerError {
            message: backend::server_extra::venues_endpoint::FETCH_VENUES_FAILED.to_string(),
            code: 500,
            details: None,
        }
    })
}
