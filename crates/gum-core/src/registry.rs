//! Protocol registry: scheme → protocol definition.

use crate::config::ProtocolDefinition;
use crate::error::{Error, Result};

/// Ordered protocol definitions as loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct ProtocolRegistry {
    protocols: Vec<ProtocolDefinition>,
}

impl ProtocolRegistry {
    /// Build the registry. Duplicate schemes are allowed; the later entry wins
    /// at resolution time and a warning is logged here.
    pub fn new(protocols: Vec<ProtocolDefinition>) -> Self {
        for (i, p) in protocols.iter().enumerate() {
            let shadowed = protocols[i + 1..]
                .iter()
                .any(|later| later.protocol.eq_ignore_ascii_case(&p.protocol));
            if shadowed {
                tracing::warn!(
                    "protocol {} is defined more than once; the last definition is used",
                    p.protocol
                );
            }
        }
        Self { protocols }
    }

    /// Find the definition for `scheme`, case-insensitively. Last match wins.
    pub fn resolve(&self, scheme: &str) -> Result<&ProtocolDefinition> {
        self.protocols
            .iter()
            .inspect(|p| tracing::debug!("- {}", p.protocol))
            .filter(|p| p.protocol.eq_ignore_ascii_case(scheme))
            .last()
            .ok_or_else(|| Error::UnsupportedProtocol(scheme.to_string()))
    }

    /// Configured scheme names in configuration order.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.protocols.iter().map(|p| p.protocol.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}
