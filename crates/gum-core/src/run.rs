//! One launch run: URI in, field file written (optionally) and command started.
//!
//! Stages: parse URL → match protocol → build output file → render command →
//! launch. The first failing stage ends the run; earlier side effects (a
//! written field file) are left in place.

use crate::command::{build_command, Launcher, ResolvedCommand};
use crate::error::Result;
use crate::fields::{assemble_fields, write_fields};
use crate::registry::ProtocolRegistry;
use crate::template::{Renderer, TemplateContext};
use crate::url_parts::decompose;
use std::path::PathBuf;

/// Per-run options, passed explicitly instead of living in global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Log the template context and field file contents.
    pub debug: bool,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub protocol: String,
    /// Decoded username; empty when the URI had none.
    pub username: String,
    pub output_file: Option<PathBuf>,
    pub command: ResolvedCommand,
}

/// Execute the full pipeline for `uri`.
pub fn run(
    registry: &ProtocolRegistry,
    uri: &str,
    launcher: &dyn Launcher,
    options: RunOptions,
) -> Result<RunOutcome> {
    tracing::debug!("parsing URL {uri}");
    let parts = decompose(uri)?;

    tracing::debug!("checking for a protocol matching {}", parts.scheme);
    let protocol = registry.resolve(&parts.scheme)?;
    tracing::info!("using protocol {} for {uri}", protocol.protocol);

    let ctx = TemplateContext::new(&parts, protocol);
    if options.debug {
        match serde_json::to_string_pretty(&ctx) {
            Ok(json) => tracing::debug!("template context:\n{json}"),
            Err(e) => tracing::debug!("template context not serializable: {e}"),
        }
    }
    let renderer = Renderer::new();

    let output_file = match protocol.output_path() {
        Some(path) => {
            tracing::debug!("creating output file {}", path.display());
            let fields = assemble_fields(protocol, parts.fragment.as_deref(), &renderer, &ctx)?;
            if options.debug {
                for (key, values) in fields.iter() {
                    tracing::debug!("field {key} = {values:?}");
                }
            }
            write_fields(path, &protocol.file_delimiter, &fields)?;
            Some(path.to_path_buf())
        }
        None => None,
    };

    tracing::debug!("rendering command templates");
    let command = build_command(protocol, &renderer, &ctx)?;

    tracing::debug!("launching {} {:?}", command.program, command.args);
    launcher.launch(&command)?;

    Ok(RunOutcome {
        protocol: protocol.protocol.clone(),
        username: parts.username,
        output_file,
        command,
    })
}
