pub mod venue_repository;
