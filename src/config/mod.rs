//! # Configuration
//!
//! Resolves API credentials from the environment, falling back to the
//! per-user config file at `~/.config/notedrop/config`. The result is
//! an explicit [`Credentials`] value handed to the client; there is no
//! ambient configuration state.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

pub mod file;

use std::{cell::RefCell, env, fmt, fs, path::PathBuf};

use tracing::debug;

use crate::{
    constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_API_KEY, ENV_API_URL},
    error::CaptureError,
};

/// Keys accepted in the config file for each credential field.
/// The environment-variable names are tolerated as aliases so files
/// migrated from the old sourced-shell format keep working.
const API_KEY_FIELDS: &[&str] = &["api_key", ENV_API_KEY];
const API_URL_FIELDS: &[&str] = &["api_url", ENV_API_URL];

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect the config file to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect the config path without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Resolved API credentials, constructed once per invocation.
///
/// Both fields are non-empty after [`Credentials::resolve`] succeeds.
/// Never persisted by the tool itself, only read from the environment
/// or a file it does not write.
#[derive(Clone)]
pub struct Credentials {
    /// Bearer token for the document service.
    pub api_key: String,

    /// Base URL of the document service API.
    pub api_url: String,
}

// The key must never reach any log output, at any level.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Credentials {
    /// Returns the path to the fallback config file
    /// (`~/.config/notedrop/config`).
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to `$HOME/.config` (XDG Base Directory).
    pub fn config_path() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Resolves credentials, environment first.
    ///
    /// When both variables are set and non-empty the config file is
    /// never consulted. Otherwise the file fills the gaps, and any
    /// field that is still empty afterwards is an error naming it.
    pub fn resolve() -> Result<Self, CaptureError> {
        let env_key = env_value(ENV_API_KEY);
        let env_url = env_value(ENV_API_URL);

        if let (Some(api_key), Some(api_url)) = (env_key.clone(), env_url.clone()) {
            debug!("credentials resolved from environment");
            return Ok(Self { api_key, api_url });
        }

        let path = Self::config_path().ok_or_else(|| CaptureError::ConfigMissing {
            path: PathBuf::from(format!("~/.config/{CONFIG_DIR}/{CONFIG_FILENAME}")),
        })?;

        if !path.exists() {
            return Err(CaptureError::ConfigMissing { path });
        }

        let content = fs::read_to_string(&path).map_err(|source| CaptureError::ConfigRead {
            path: path.clone(),
            source,
        })?;

        let assignments = file::parse_assignments(&content);
        debug!(path = %path.display(), entries = assignments.len(), "loaded config file");

        Self::merge(env_key, env_url, &assignments)
    }

    /// Merges environment values over file assignments, field by field.
    fn merge(
        env_key: Option<String>,
        env_url: Option<String>,
        assignments: &[(String, String)],
    ) -> Result<Self, CaptureError> {
        let api_key = env_key
            .or_else(|| lookup(assignments, API_KEY_FIELDS))
            .ok_or(CaptureError::ConfigIncomplete { field: "api_key" })?;

        let api_url = env_url
            .or_else(|| lookup(assignments, API_URL_FIELDS))
            .ok_or(CaptureError::ConfigIncomplete { field: "api_url" })?;

        Ok(Self { api_key, api_url })
    }
}

/// Reads an environment variable, treating empty as unset.
fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Returns the last non-empty matching assignment, so later lines
/// override earlier ones the way repeated shell assignments did.
fn lookup(assignments: &[(String, String)], fields: &[&str]) -> Option<String> {
    assignments
        .iter()
        .rev()
        .find(|(key, value)| fields.contains(&key.as_str()) && !value.is_empty())
        .map(|(_, value)| value.clone())
}
