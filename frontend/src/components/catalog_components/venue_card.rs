//! Venue card component.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_social_icons::MdPeople}};

use common::{amenity_icons::AmenityIcon, venue::Venue};

use crate::components::catalog_components::amenity_chip::{AmenityChip, NamedAmenityChip};

const PLACEHOLDER_PHOTO: Asset = asset!("/assets/placeholder-venue.svg");
const VISIBLE_AMENITIES: usize = 3;

#[component]
pub fn VenueCard(venue: ReadSignal<Venue>) -> Element {
    let Venue {
        title,
        description,
        country,
        city,
        capacity_min,
        capacity_max,
        price_min,
        price_max,
        amenities,
        ..
    } = venue.read().clone();
    let (photo_url, photo_alt) = match venue.read().cover_photo() {
        Some(photo) => (photo.url.clone(), photo.alt_text.clone()),
        None => (PLACEHOLDER_PHOTO.to_string(), title.clone()),
    };
    let hidden_amenities = amenities.len().saturating_sub(VISIBLE_AMENITIES);

    rsx! {
        div {
            class: "x-venue-card",

            // PHOTO + PRICE BADGE
            div {
                class: "x-venue-card-photo",
                img {
                    src: "{photo_url}",
                    alt: "{photo_alt}",
                    loading: "lazy",
                }
                div {
                    class: "x-venue-card-price",
                    "${price_min}-${price_max}"
                }
            }

            div {
                class: "x-venue-card-body",
                h3 {
                    class: "x-venue-card-title",
                    "{title}"
                }

                div {
                    class: "x-venue-card-meta",
                    Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: #6B7280; margin-right: 4px;" }
                    "{city}, {country}"
                }

                p {
                    class: "x-venue-card-description",
                    "{description}"
                }

                div {
                    class: "x-venue-card-meta",
                    Icon { icon: MdPeople, style: "width: 16px; height: 16px; color: #6B7280; margin-right: 4px;" }
                    "{capacity_min} - {capacity_max}"
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for amenity in amenities.iter().take(VISIBLE_AMENITIES) {
                        NamedAmenityChip { key: "{amenity.id}", name: amenity.name.clone() }
                    }
                    if hidden_amenities > 0 {
                        AmenityChip { label: format!("+{hidden_amenities} more"), icon: AmenityIcon::Sparkles }
                    }
                }
            }
        }
    }
}
