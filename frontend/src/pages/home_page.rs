use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdInfo, MdSearch, MdSwapVert};

use crate::routes::Route;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeatureIcon {
    Search,
    Info,
    Sort,
}

const FEATURES: [(FeatureIcon, &str, &str); 3] = [
    (FeatureIcon::Search, "Search & Filter", "Find venues by location, capacity, price range, and amenities"),
    (FeatureIcon::Info, "Detailed Information", "View photos, amenities, pricing, and capacity for each venue"),
    (FeatureIcon::Sort, "Easy Sorting", "Sort by price, capacity, or relevance to find the perfect match"),
];

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Title { "Venue Catalog - Find Your Perfect Event Space" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 48px;
                width: 100%;
                min-height: 100%;
                padding: 64px 16px;
                background: linear-gradient(135deg, #EFF6FF 0%, #E0E7FF 100%);
                box-sizing: border-box;
            ",

            Hero {}
            FeaturesSection {}
        }
    }
}


#[component]
fn Hero() -> Element {
    rsx! {
        section {
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 24px;
                text-align: center;
            ",
            h1 {
                style: "font-size: 40px; font-weight: 700; color: #111827; margin: 0;",
                "Welcome to Venue Catalog"
            }
            p {
                style: "font-size: 20px; color: #4B5563; max-width: 672px; margin: 0;",
                "Discover amazing venues for your next retreat, event, or gathering. Search through our curated collection of hotels, villas, and event spaces."
            }
            Link {
                to: Route::CatalogHome {},
                class: "x-button-primary",
                "Browse Venues"
            }
        }
    }
}

#[component]
fn FeaturesSection() -> Element {
    rsx! {
        section {
            class: "x-feature-grid",
            for (icon, title, description) in FEATURES {
                FeatureCard {
                    key: "{title}",
                    icon,
                    title: title.to_string(),
                    description: description.to_string(),
                }
            }
        }
    }
}

#[component]
fn FeatureCard(icon: FeatureIcon, title: String, description: String) -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                text-align: center;
                padding: 24px;
                border-radius: 12px;
                background: white;
                box-shadow: 0 4px 12px rgba(0,0,0,0.06);
            ",
            div {
                style: "width: 40px; height: 40px; color: #2563EB;",
                FeatureIconView { icon }
            }
            h3 { style: "font-size: 20px; font-weight: 600; color: #111827; margin: 0;", "{title}" }
            p { style: "font-size: 16px; color: #4B5563; margin: 0;", "{description}" }
        }
    }
}

#[component]
fn FeatureIconView(icon: FeatureIcon) -> Element {
    match icon {
        FeatureIcon::Search => rsx! { Icon { icon: MdSearch, style: "width: 40px; height: 40px;" } },
        FeatureIcon::Info => rsx! { Icon { icon: MdInfo, style: "width: 40px; height: 40px;" } },
        FeatureIcon::Sort => rsx! { Icon { icon: MdSwapVert, style: "width: 40px; height: 40px;" } },
    }
}
