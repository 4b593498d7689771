//! `gum <uri>`: resolve the URI and start its handler.

use anyhow::Result;
use gum_core::command::ProcessLauncher;
use gum_core::config::GumConfig;
use gum_core::registry::ProtocolRegistry;
use gum_core::run::{run, RunOptions};

pub fn run_launch(uri: &str, cfg: GumConfig, debug: bool) -> Result<()> {
    println!("Connecting to: {uri}");
    let registry = ProtocolRegistry::new(cfg.protocols);
    let outcome = run(&registry, uri, &ProcessLauncher, RunOptions { debug })?;

    if outcome.username.is_empty() {
        println!("No user specified");
    } else {
        println!("User: {}", outcome.username);
    }
    if let Some(path) = &outcome.output_file {
        tracing::info!("field file written to {}", path.display());
    }
    Ok(())
}
