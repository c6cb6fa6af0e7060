//! # Errors
//!
//! Failure taxonomy for a capture run. Every variant is terminal for the
//! invocation: nothing is retried or recovered locally, each failure
//! surfaces as a diagnostic on stderr and a non-zero exit.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::constants::{ENV_API_KEY, ENV_API_URL};

#[derive(Error, Debug)]
pub enum CaptureError {
    /// Neither the environment nor the fallback file provided credentials.
    #[error(
        "no configuration found: set {} and {}, or create {}",
        ENV_API_KEY,
        ENV_API_URL,
        .path.display()
    )]
    ConfigMissing { path: PathBuf },

    /// The config file was loaded but a required field is still unset.
    #[error("configuration incomplete: missing {field}")]
    ConfigIncomplete { field: &'static str },

    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nothing on the command line and stdin is an interactive terminal.
    #[error("no input provided")]
    NoInput,

    /// Input was selected but contains nothing to post.
    #[error("input is empty")]
    EmptyInput,

    #[error("failed to read stdin")]
    StdinRead(#[source] io::Error),

    /// The request body failed to serialize or to re-parse as JSON.
    #[error("request payload is not valid JSON")]
    PayloadInvalid(#[from] serde_json::Error),

    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("network error")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },
}
