pub mod venues;
