//! # Payload
//!
//! Pure projection of a capture into the wire shape expected by the
//! blocks endpoint. Escaping of arbitrary user text (control
//! characters, quotes, backslashes, Unicode) is handled by
//! `serde_json` during serialization.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

use serde::Serialize;

use crate::constants::{CODE_FENCE, DATE_TODAY, POSITION_END};

/// A single capture with its placement.
///
/// Placement is fixed for this tool's one use case: appended to the
/// end of today's page.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    /// Text to post. Non-empty, guaranteed by the input collector.
    pub text: String,

    /// Placement within the target page.
    pub position: &'static str,

    /// Target page selector.
    pub date: &'static str,

    /// Wrap the text in a fenced code block before posting.
    pub code_wrapped: bool,
}

impl CaptureRequest {
    pub fn new(text: String, code_wrapped: bool) -> Self {
        Self {
            text,
            position: POSITION_END,
            date: DATE_TODAY,
            code_wrapped,
        }
    }
}

/// Request body for the blocks endpoint.
#[derive(Debug, Serialize)]
pub struct Payload {
    blocks: Vec<Block>,
    position: Position,
}

#[derive(Debug, Serialize)]
struct Block {
    #[serde(rename = "type")]
    kind: &'static str,
    markdown: String,
}

#[derive(Debug, Serialize)]
struct Position {
    position: &'static str,
    date: &'static str,
}

impl Payload {
    /// Projects a capture request into the wire shape. One block per
    /// request; the projection is one-to-one and cannot fail.
    pub fn for_request(request: &CaptureRequest) -> Self {
        let markdown = if request.code_wrapped {
            format!("{CODE_FENCE}\n{}\n{CODE_FENCE}", request.text)
        } else {
            request.text.clone()
        };

        Self {
            blocks: vec![Block {
                kind: "text",
                markdown,
            }],
            position: Position {
                position: request.position,
                date: request.date,
            },
        }
    }

    /// Serializes the payload to the JSON body sent on the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
