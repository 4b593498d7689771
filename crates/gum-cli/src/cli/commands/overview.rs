//! `gum` with no URI: usage plus the state of the configuration.

use gum_core::config::GumConfig;
use gum_core::registry::ProtocolRegistry;
use std::fmt::Write;
use std::path::Path;

pub fn print_overview(config_path: &Path, cfg: Option<&GumConfig>) {
    print!("{}", overview_text(config_path, cfg));
}

pub fn overview_text(config_path: &Path, cfg: Option<&GumConfig>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "gum {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out, "Usage: gum [--config <PATH>] [--debug] <URI>");
    let _ = writeln!(out);

    let Some(cfg) = cfg else {
        let _ = writeln!(out, "Cannot load configuration file: {}", config_path.display());
        return out;
    };
    let _ = writeln!(out, "Can load configuration file: {}", config_path.display());
    let _ = writeln!(out);

    let registry = ProtocolRegistry::new(cfg.protocols.clone());
    if registry.is_empty() {
        let _ = writeln!(out, "No protocols configured.");
    } else {
        let _ = writeln!(out, "Configured protocols are:");
        for scheme in registry.schemes() {
            let _ = writeln!(out, "- {scheme}");
        }
    }
    out
}
