use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::{md_action_icons::{MdHome, MdStars}, md_notification_icons::MdWifi};

use common::amenity_icons::{AmenityIcon, amenity_icon};


#[component]
pub fn AmenityChip(label: String, icon: AmenityIcon) -> Element {
    rsx! {
        span {
            class: "x-amenity-chip",
            AmenityIconView { icon }
            "{label}"
        }
    }
}

#[component]
pub fn NamedAmenityChip(name: String) -> Element {
    let icon = amenity_icon(&name);
    rsx! {
        AmenityChip { label: name, icon }
    }
}

#[component]
fn AmenityIconView(icon: AmenityIcon) -> Element {
    match icon {
        AmenityIcon::Wifi => rsx! { Icon { icon: MdWifi, style: "width: 12px; height: 12px; margin-right: 4px; flex-shrink: 0;" } },
        AmenityIcon::Sparkles => rsx! { Icon { icon: MdStars, style: "width: 12px; height: 12px; margin-right: 4px; flex-shrink: 0;" } },
        AmenityIcon::Home => rsx! { Icon { icon: MdHome, style: "width: 12px; height: 12px; margin-right: 4px; flex-shrink: 0;" } },
    }
}
