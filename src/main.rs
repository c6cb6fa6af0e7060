//! # nd CLI
//!
//! Command-line shell for notedrop: parse flags, resolve credentials,
//! collect input, post the note, report the outcome.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;

use notedrop::{
    client::ApiClient,
    config::Credentials,
    input,
    payload::{CaptureRequest, Payload},
    telemetry, CaptureError,
};

const GLOBAL_HELP: &str = "\
Configuration:
  NOTEDROP_API_KEY    API key, sent as the bearer token
  NOTEDROP_API_URL    Base URL of the document service API
  NOTEDROP_LOG        Log filter (overrides --debug), e.g. `debug`

  When either variable is unset, credentials are read from
  ~/.config/notedrop/config, a file of plain KEY=value lines:

    api_key=xxxxxxxxxxxx
    api_url=https://api.example.com/v1

Examples:
  nd \"rotate the deploy key on friday\"     Capture an argument
  git diff --stat | nd --code               Capture a pipe as a code block
  pbpaste | nd                              Capture the clipboard

Note: there is no offline queue. When a send fails the text is not
persisted anywhere; re-run the capture once the service is reachable.";

#[derive(Parser)]
#[command(name = "nd")]
#[command(version)]
#[command(about = "Capture text to the end of today's note")]
#[command(
    long_about = "nd captures text and appends it as a note block to today's page in your \
document service. Input comes from the command line, or from stdin when no arguments are \
given and something is piped in.

Each invocation makes exactly one authenticated POST. Success means the note landed; any \
failure (missing configuration, empty input, an unreachable service, a non-2xx response) \
exits with status 1 and a diagnostic on stderr."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Text to capture; reads stdin when omitted and piped
    input: Vec<String>,

    /// Wrap the capture in a fenced code block
    #[arg(short, long)]
    code: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Every failure exits 1; clap's help/version output keeps 0.
            let failed = err.use_stderr();
            let _ = err.print();
            std::process::exit(i32::from(failed));
        }
    };

    telemetry::init(cli.debug);

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        if matches!(err.downcast_ref::<CaptureError>(), Some(CaptureError::NoInput)) {
            eprintln!("\n{}", Cli::command().render_help());
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let credentials = Credentials::resolve()?;
    let text = input::collect(&cli.input)?;

    let request = CaptureRequest::new(text, cli.code);
    let payload = Payload::for_request(&request);

    let response = ApiClient::new(credentials).post_note(&payload)?;
    tracing::debug!(status = response.status, "capture complete");

    println!("{} captured to today's note", "✓".green());

    Ok(())
}
