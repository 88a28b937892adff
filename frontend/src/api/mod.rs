pub mod venues_api;
