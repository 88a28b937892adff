pub mod amenity_chip;
pub mod search_filters;
pub mod venue_card;
pub mod venue_grid;
