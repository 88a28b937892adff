pub mod venues_endpoint;
