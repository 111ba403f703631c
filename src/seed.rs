//! Optional start-up seed for the session profile
//!
//! Read once at launch; nothing is ever written back.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::state::Profile;

/// Load the seed profile, falling back to built-in defaults when no path is given
pub fn load(path: Option<&Path>) -> Result<Profile> {
    let Some(path) = path else {
        info!("Using built-in seed profile");
        return Ok(Profile::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed profile from {:?}", path))?;
    let profile: Profile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse seed profile JSON from {:?}", path))?;

    info!(username = %profile.username, path = ?path, "Loaded seed profile");
    Ok(profile)
}

/// Default seed as pretty JSON, a starting point for custom seed files
pub fn default_json() -> Result<String> {
    serde_json::to_string_pretty(&Profile::default()).context("Failed to serialize seed profile")
}
