//! Command building and the process launcher seam.
//!
//! The core only renders the command; starting it is delegated to a
//! [`Launcher`] so tests (and embedders) can observe launches without spawning.

use crate::config::ProtocolDefinition;
use crate::error::{Error, Result};
use crate::template::{Renderer, TemplateContext};
use std::process::{Command, Stdio};

/// A rendered command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ResolvedCommand {
    /// Split rendered cells into program and arguments.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let program = iter.next()?;
        Some(Self {
            program,
            args: iter.collect(),
        })
    }
}

/// Render `protocol.cmd` against `ctx`.
pub fn build_command(
    protocol: &ProtocolDefinition,
    renderer: &Renderer,
    ctx: &TemplateContext,
) -> Result<ResolvedCommand> {
    let cells = renderer.render_all(&protocol.cmd, ctx)?;
    ResolvedCommand::from_cells(cells).ok_or_else(|| Error::Launch {
        program: String::new(),
        source: None,
    })
}

/// Starts a resolved command. Implementations must not wait for it.
pub trait Launcher {
    fn launch(&self, command: &ResolvedCommand) -> Result<()>;
}

/// Spawns the command as a detached child with null stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command: &ResolvedCommand) -> Result<()> {
        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Launch {
                program: command.program.clone(),
                source: Some(e),
            })?;
        tracing::info!("started {} (pid {})", command.program, child.id());
        // Dropping the handle neither waits for nor kills the child.
        drop(child);
        Ok(())
    }
}
