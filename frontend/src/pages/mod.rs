pub mod catalog_page;
pub mod home_page;
