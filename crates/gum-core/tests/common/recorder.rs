//! Launcher that records commands instead of spawning them.

use gum_core::command::{Launcher, ResolvedCommand};
use std::cell::RefCell;

#[derive(Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<ResolvedCommand>>,
}

impl RecordingLauncher {
    pub fn launched(&self) -> Vec<ResolvedCommand> {
        self.launched.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, command: &ResolvedCommand) -> gum_core::Result<()> {
        self.launched.borrow_mut().push(command.clone());
        Ok(())
    }
}
