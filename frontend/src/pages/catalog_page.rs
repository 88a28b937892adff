use dioxus::prelude::*;

use common::filter_state::FilterState;
use crate::{
    components::{catalog_components::{search_filters::SearchFilters, venue_grid::VenueGrid}, suspend_boundary::{LoadingIndicator, SuspendWrapper}},
    data_definitions::url_param::UrlParam, routes::Route,
};


/// `/centers` with no filters in the path. Redirects to the catalog with
/// default filters, so later edits stay on the same route variant.
#[component]
pub fn CatalogHome() -> Element {
    use_effect(move || {
        navigator().replace(Route::catalog_page_from_filters(FilterState::default()));
    });
    rsx! {
        LoadingIndicator {}
    }
}

/// Catalog page. The filters live in the URL, so every edit is a navigation.
#[component]
pub fn CatalogPage(filters: UrlParam<FilterState>) -> Element {
    rsx! {
        document::Title { "Venue Catalog - Browse Venues" }
        CatalogPageRootComponent { filters: filters.0.clone() }
    }
}

#[component]
fn CatalogPageRootComponent(filters: ReadSignal<FilterState>) -> Element {
    // replace, not push: one history entry per visit rather than per keystroke
    let set_filters = Callback::new(move |next: FilterState| {
        if *filters.peek() == next {
            return;
        }
        navigator().replace(Route::catalog_page_from_filters(next));
    });

    rsx! {
        div {
            id: "x-catalog-page-root-component",
            style: "
                min-height: 100%;
                width: 100%;
                background-color: #F9FAFB;
            ",
            div {
                class: "x-catalog-container",
                h1 {
                    class: "x-catalog-title",
                    "Venue Catalog"
                }
                SearchFilters { filters, set_filters }
                SuspendWrapper { VenueGrid { filters } }
            }
        }
    }
}
