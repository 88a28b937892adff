pub mod url_param;
pub mod edit_generation;
