//! # API Client
//!
//! One authenticated POST to the document service's blocks endpoint.
//! Single attempt, no retry, no local queue: a failed send is reported
//! and the text is gone unless the caller re-runs the capture.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

use reqwest::blocking::Client;
use tracing::debug;

use crate::{
    config::Credentials, constants::BLOCKS_ENDPOINT, error::CaptureError, payload::Payload,
};

/// Outcome of a capture request. Ephemeral: only used to decide
/// success and surface diagnostics.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Client for the document service's blocks endpoint.
pub struct ApiClient {
    credentials: Credentials,
    http: Client,
}

impl ApiClient {
    // No explicit timeout: the underlying client's default applies.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: Client::new(),
        }
    }

    /// Posts the payload to `{api_url}/blocks`.
    ///
    /// Any 2xx status is success; anything else fails with the status
    /// and raw response body. Transport failures surface as network
    /// errors.
    pub fn post_note(&self, payload: &Payload) -> Result<ApiResponse, CaptureError> {
        let body = payload.to_json()?;

        // Guard against a payload-builder bug before anything leaves
        // the machine.
        serde_json::from_str::<serde_json::Value>(&body)?;

        let endpoint = self.endpoint();
        debug!(%endpoint, bytes = body.len(), "posting note");

        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.credentials.api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let body = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(CaptureError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), response = %body, "note accepted");

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }

    /// Endpoint URL. A trailing slash on the configured base is
    /// tolerated so both common forms hit the same path.
    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.credentials.api_url.trim_end_matches('/'),
            BLOCKS_ENDPOINT
        )
    }
}
