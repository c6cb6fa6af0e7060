//! # Constants
//!
//! Centralized constants for magic values used throughout notedrop.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Environment
// =============================================================================

/// API key variable, sent as the bearer token.
pub const ENV_API_KEY: &str = "NOTEDROP_API_KEY";

/// Base URL variable for the document service API.
pub const ENV_API_URL: &str = "NOTEDROP_API_URL";

/// Log filter override, in `tracing` `EnvFilter` syntax.
pub const ENV_LOG: &str = "NOTEDROP_LOG";

// =============================================================================
// Config File
// =============================================================================

/// Config directory name (inside the user's `~/.config`).
pub const CONFIG_DIR: &str = "notedrop";

/// Config file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

// =============================================================================
// Wire Protocol
// =============================================================================

/// Action segment appended to the base URL. Fixed, not parameterized.
pub const BLOCKS_ENDPOINT: &str = "blocks";

/// Placement of the new block within the target page.
pub const POSITION_END: &str = "end";

/// Target page selector.
pub const DATE_TODAY: &str = "today";

/// Markdown fence line used by `--code`.
pub const CODE_FENCE: &str = "```";
