//! # Input Collection
//!
//! Selects the text to capture: positional arguments first, then piped
//! stdin. The two sources are never mixed. When any argument is
//! present, stdin is not read at all.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal, Read};

use tracing::debug;

use crate::error::CaptureError;

/// Returns the text to capture, or fails when nothing was provided.
///
/// Positional arguments are joined with a single space. Without
/// arguments, piped stdin is drained to end-of-stream; an interactive
/// terminal with nothing piped is the "no input provided" case.
pub fn collect(args: &[String]) -> Result<String, CaptureError> {
    let text = if args.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(CaptureError::NoInput);
        }
        debug!("reading capture text from stdin");
        read_piped(stdin.lock())?
    } else {
        args.join(" ")
    };

    finalize(text)
}

/// Drains a piped stream to end-of-stream.
/// Invalid UTF-8 is replaced rather than rejected; a JSON string
/// cannot carry raw bytes anyway.
fn read_piped(mut reader: impl Read) -> Result<String, CaptureError> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(CaptureError::StdinRead)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Rejects captures with nothing to post. The text itself is not
/// trimmed; only the emptiness check ignores whitespace.
fn finalize(text: String) -> Result<String, CaptureError> {
    if text.trim().is_empty() {
        return Err(CaptureError::EmptyInput);
    }
    Ok(text)
}
