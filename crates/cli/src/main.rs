//! Conversational clock CLI
//!
//! A thin wrapper around clockbot-core: resolves settings, builds the CLU
//! client, and runs the interactive loop (or answers one utterance).

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use clockbot_core::{config, repl, CluClient, Turn};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "clockbot")]
#[command(about = "Ask for times, dates, and weekdays in plain English")]
struct Args {
    /// Single utterance to classify and answer (skips the interactive loop)
    utterance: Option<String>,

    /// Path to a TOML settings file (endpoint, api_key, project_name, deployment_name)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    verbose: bool,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Missing or incomplete settings end the process here, before any
    // request is attempted
    let settings = config::resolve(args.settings.as_deref())?;
    if args.verbose {
        eprintln!("DEBUG: Using endpoint {}", settings.endpoint);
        eprintln!("DEBUG: Project '{}', deployment '{}'", settings.project_name, settings.deployment_name);
    }

    let client = CluClient::new(settings, args.verbose)?;

    // Single-shot mode: answer one utterance and exit
    if let Some(ref utterance) = args.utterance {
        match repl::handle_line(&client, utterance) {
            Turn::Respond(text) => println!("{}", text),
            Turn::Skip | Turn::Quit => {}
        }
        return Ok(());
    }

    let stdin = io::stdin();
    repl::run(&client, stdin.lock(), io::stdout())
}

// ============================================================================
// Tests
// ============================================================================
