//! Venue catalog backend: dataset loading, query parsing, filtering and the HTTP endpoint.

pub mod api;
pub mod config;
pub mod db_utils;
pub mod server_extra;
