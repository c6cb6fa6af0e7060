//! # Test Harness
//!
//! Utilities for integration-testing the `nd` binary without touching
//! the user's real configuration or the network: a temp home directory
//! with env scrubbing for each spawned command, and a one-shot loopback
//! HTTP responder that records the request it answered.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    fs,
    io::{BufRead, BufReader, Read, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    path::PathBuf,
    thread::{self, JoinHandle},
    time::Duration,
};

use assert_cmd::Command;
use tempfile::TempDir;

// =============================================================================
// Test Environment
// =============================================================================

/// Test environment with a temporary home directory, so the config
/// fallback path resolves inside the sandbox.
pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp home dir"),
        }
    }

    /// Path where the fallback config file lives under the temp home.
    pub fn config_path(&self) -> PathBuf {
        self.home
            .path()
            .join(".config")
            .join("notedrop")
            .join("config")
    }

    /// Writes the fallback config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config directory");
        }
        fs::write(path, content).expect("failed to write config file");
    }

    /// Command for the `nd` binary with `HOME` redirected into the
    /// sandbox and all notedrop variables scrubbed.
    pub fn nd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nd").expect("nd binary should build");
        cmd.env("HOME", self.home.path())
            .env_remove("NOTEDROP_API_KEY")
            .env_remove("NOTEDROP_API_URL")
            .env_remove("NOTEDROP_LOG");
        cmd
    }
}

// =============================================================================
// One-shot HTTP Fixture
// =============================================================================

/// The single HTTP request a [`FakeApi`] answered.
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ReceivedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Request body parsed as JSON.
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be valid JSON")
    }
}

/// Loopback HTTP server that accepts exactly one connection, records
/// the request, and answers with a canned response.
pub struct FakeApi {
    addr: SocketAddr,
    handle: JoinHandle<Option<ReceivedRequest>>,
}

impl FakeApi {
    pub fn spawn(status: u16, reason: &'static str, response_body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind loopback");
        let addr = listener.local_addr().expect("listener has no local addr");

        let handle = thread::spawn(move || serve_one(&listener, status, reason, response_body));

        Self { addr, handle }
    }

    /// Base URL to hand the tool as its API base.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shuts the server down and returns the request it saw, if any.
    pub fn finish(self) -> Option<ReceivedRequest> {
        // A throwaway connection wakes the accept call when the tool
        // never called in.
        let _ = TcpStream::connect(self.addr);
        self.handle.join().expect("server thread panicked")
    }

    /// The single request this server answered. Panics if none arrived.
    pub fn request(self) -> ReceivedRequest {
        self.finish()
            .expect("expected the tool to make a request, but none arrived")
    }
}

fn serve_one(
    listener: &TcpListener,
    status: u16,
    reason: &str,
    response_body: &str,
) -> Option<ReceivedRequest> {
    let (stream, _) = listener.accept().ok()?;
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .ok()?;

    let mut reader = BufReader::new(stream);

    // Request line. The wake-up connection from `finish` closes
    // without sending one, which lands in the `?` below.
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    // Headers until the blank line.
    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    // Body, sized by Content-Length.
    let content_length: usize = headers
        .get("content-length")
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0_u8; content_length];
    reader.read_exact(&mut body).ok()?;
    let body = String::from_utf8_lossy(&body).into_owned();

    let mut stream = reader.into_inner();
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
        response_body.len()
    );
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()?;

    Some(ReceivedRequest {
        method,
        path,
        headers,
        body,
    })
}
