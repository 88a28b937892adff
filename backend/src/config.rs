//! Runtime configuration read from the environment.

use std::path::PathBuf;

pub const VENUES_DATA_PATH_ENV: &str = "VENUES_DATA_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub venues_data_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { venues_data_path: default_venues_data_path() }
    }
}

impl CatalogConfig {
    pub fn new(venues_data_path: impl Into<PathBuf>) -> Self {
        Self { venues_data_path: venues_data_path.into() }
    }

    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(VENUES_DATA_PATH_ENV).ok())
    }

    /// An unset or blank variable selects the dataset bundled with this crate.
    pub fn from_env_value(venues_data_path: Option<String>) -> Self {
        match venues_data_path {
            Some(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

pub fn default_venues_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("venues.json")
}
