//! Result grid for the catalog page.

use dioxus::prelude::*;

use common::filter_state::FilterState;
use crate::{
    api::venues_api::list_venues,
    components::{catalog_components::venue_card::VenueCard, error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator},
};

#[component]
pub fn VenueGrid(filters: ReadSignal<FilterState>) -> Element {
    let mut venues = use_resource(move || {
        let params = filters.read().to_query_params();
        list_venues(params)
    });
    // when the filters change, drop the old list so the loading state shows
    use_effect(move || {
        let _ = filters.read();
        venues.clear();
        venues.restart();
    });

    let venues = venues.read();
    let response = match venues.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{}", e) } },
        Some(Ok(response)) => response,
        None => return rsx! { LoadingIndicator {} },
    };

    if response.venues.is_empty() {
        return rsx! { NoVenuesFound {} };
    }

    let total = response.total;
    let plural = if total == 1 { "" } else { "s" };
    let venue_list = response.venues.clone();

    rsx! {
        p {
            class: "x-venue-count",
            "{total} venue{plural} found"
        }
        div {
            id: "x-venue-grid",
            class: "x-venue-grid",
            for venue in venue_list {
                VenueCard { key: "{venue.id}", venue }
            }
        }
    }
}

#[component]
fn NoVenuesFound() -> Element {
    rsx! {
        div {
            class: "x-catalog-message",
            div {
                class: "x-catalog-message-title",
                style: "color: #4B5563;",
                "No venues found"
            }
            p {
                style: "color: #6B7280; margin: 0;",
                "Try adjusting your search criteria or filters."
            }
        }
    }
}
