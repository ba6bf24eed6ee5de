//! Fixture Monitor - a terminal dashboard for hardware test fixtures
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use fixmon_app::{TerminalDescriptor, TerminalHost};
use fixmon_core::prelude::*;

/// Fixture Monitor - a terminal dashboard for hardware test fixtures
#[derive(Parser, Debug)]
#[command(name = "fixmon")]
#[command(about = "A terminal dashboard for hardware test fixtures", long_about = None)]
struct Args {
    /// Path to the fixture's properties document (properties.json)
    #[arg(value_name = "PROPERTIES")]
    properties: PathBuf,

    /// Base URL of the remote agent's shell endpoint
    #[arg(long, default_value = "ws://127.0.0.1:4080")]
    agent_url: String,

    /// Override the machine id from the properties document
    #[arg(long)]
    mid: Option<String>,
}

/// Terminal-window manager seam.
///
/// Session lifecycle belongs to an external manager; this binary only records
/// the handoff. Descriptors carry everything a manager needs: composite id,
/// machine id, and the resolved device path when one was required.
struct LoggingTerminalHost;

impl TerminalHost for LoggingTerminalHost {
    fn add_terminal(&mut self, id: &str, term: TerminalDescriptor) {
        match &term.path {
            Some(path) => info!("addTerminal {id}: {} via {path}", term.name),
            None => info!("addTerminal {id}: {} (fixture itself)", term.name),
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    fixmon_core::logging::init()?;

    let agent_url = Url::parse(&args.agent_url)
        .map_err(|e| Error::config(format!("invalid agent URL {:?}: {e}", args.agent_url)))?;
    if !matches!(agent_url.scheme(), "ws" | "wss") {
        return Err(Error::config(format!(
            "agent URL must use ws:// or wss://, got {:?}",
            args.agent_url
        ))
        .into());
    }

    let mut client = fixmon_core::load_client(&args.properties)?;
    if let Some(mid) = args.mid {
        client.mid = mid;
    }

    fixmon_tui::run(client, agent_url, Box::new(LoggingTerminalHost)).await?;
    Ok(())
}
