//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod venue;
pub mod venue_query;
pub mod filter_state;
pub mod amenity_icons;
