//! Overview printed when no URI is given.

use crate::cli::commands::overview_text;
use gum_core::config::{GumConfig, ProtocolDefinition};
use std::path::Path;

fn proto(name: &str) -> ProtocolDefinition {
    ProtocolDefinition {
        protocol: name.to_string(),
        cmd: vec!["true".to_string()],
        ..Default::default()
    }
}

#[test]
fn lists_configured_protocols() {
    let cfg = GumConfig {
        debug: false,
        protocols: vec![proto("rdp"), proto("ssh")],
    };
    let text = overview_text(Path::new("/etc/gum/configuration.json"), Some(&cfg));
    assert!(text.contains("Can load configuration file: /etc/gum/configuration.json"));
    assert!(text.contains("Configured protocols are:\n- rdp\n- ssh\n"));
}

#[test]
fn reports_empty_protocol_list() {
    let text = overview_text(Path::new("c.json"), Some(&GumConfig::default()));
    assert!(text.contains("No protocols configured."));
}

#[test]
fn reports_unloadable_config() {
    let text = overview_text(Path::new("/missing/c.json"), None);
    assert!(text.contains("Cannot load configuration file: /missing/c.json"));
    assert!(!text.contains("Configured protocols"));
}
