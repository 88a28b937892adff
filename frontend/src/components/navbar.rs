//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            nav {
                id: "x-nav-topbar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 56px;
                    padding: 0 16px;
                    background-color: #1E3A8A;
                    flex-shrink: 0;
                ",

                Link {
                    to: Route::HomePage { },
                    style: "color: white; font-size: 20px; font-weight: 700; text-decoration: none;",
                    "Venue Catalog"
                }

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
                IconLink { to: Route::CatalogHome {}, icon: MdSearch, label: "Browse Venues" }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            style: "display: flex; align-items: center; gap: 6px; color: white; text-decoration: none;",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            span { class: "x-nav-label", "{label}" }
        }
    }
}
