//! Reads the static venue dataset.

use std::path::Path;

use anyhow::Context;
use common::venue::Venue;

pub fn parse_venues(json: &str) -> anyhow::Result<Vec<Venue>> {
    let venues = serde_json::from_str::<Vec<Venue>>(json).context("venue dataset is not a JSON array of venues")?;
    Ok(venues)
}

pub async fn load_venues(path: &Path) -> anyhow::Result<Vec<Venue>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read venue dataset {}", path.display()))?;
    let venues = parse_venues(&json).with_context(|| format!("Failed to parse venue dataset {}", path.display()))?;
    tracing::debug!("Loaded {} venues from {}", venues.len(), path.display());
    Ok(venues)
}
