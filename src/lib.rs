//! # notedrop
//!
//! Capture text from the command line or a pipe and append it as a
//! note block to today's page in your document service.
//!
//! A capture is a straight-line pipeline: resolve credentials, collect
//! the input, build the JSON payload, make one authenticated POST.
//! There is no retry and no local queue, so a failed send loses the
//! text unless the caller re-runs the tool.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod payload;
pub mod telemetry;

pub use client::{ApiClient, ApiResponse};
pub use config::{set_home_override, Credentials};
pub use error::CaptureError;
pub use payload::{CaptureRequest, Payload};
