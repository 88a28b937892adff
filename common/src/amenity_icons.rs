//! Amenity name to decorative icon lookup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmenityIcon {
    Wifi,
    Sparkles,
    Home,
}

pub const FALLBACK_AMENITY_ICON: AmenityIcon = AmenityIcon::Home;

const AMENITY_ICON_TABLE: &[(&str, AmenityIcon)] = &[
    ("Wi-Fi", AmenityIcon::Wifi),
    ("Yoga Hall", AmenityIcon::Sparkles),
    ("Gym", AmenityIcon::Home),
    ("Private Pool", AmenityIcon::Sparkles),
    ("Conference Rooms", AmenityIcon::Home),
    ("Catering Service", AmenityIcon::Home),
    ("Parking", AmenityIcon::Home),
    ("Spa", AmenityIcon::Sparkles),
    ("Yoga Studio", AmenityIcon::Sparkles),
    ("Outdoor Pool", AmenityIcon::Sparkles),
    ("Outdoor Space", AmenityIcon::Home),
    ("Catering Kitchen", AmenityIcon::Home),
    ("Exhibition Space", AmenityIcon::Home),
    ("AV Equipment", AmenityIcon::Home),
    ("Bar Service", AmenityIcon::Home),
    ("Ocean View", AmenityIcon::Home),
    ("Catering", AmenityIcon::Home),
    ("Wine Tasting", AmenityIcon::Sparkles),
    ("Vineyard Tours", AmenityIcon::Home),
    ("Event Lawn", AmenityIcon::Home),
    ("Ballroom", AmenityIcon::Home),
    ("Wedding Coordinator", AmenityIcon::Home),
    ("Garden", AmenityIcon::Home),
    ("Meeting Rooms", AmenityIcon::Home),
    ("Coffee Bar", AmenityIcon::Home),
    ("Event Space", AmenityIcon::Home),
    ("Meditation Garden", AmenityIcon::Sparkles),
    ("Organic Kitchen", AmenityIcon::Home),
    ("Private Beach", AmenityIcon::Sparkles),
    ("Chef Kitchen", AmenityIcon::Home),
];

/// Exact, case-sensitive name lookup.
pub fn amenity_icon(amenity_name: &str) -> AmenityIcon {
    AMENITY_ICON_TABLE
        .iter()
        .find(|(name, _)| *name == amenity_name)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_AMENITY_ICON)
}
