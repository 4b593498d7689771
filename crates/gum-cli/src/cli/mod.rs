//! CLI for gum: one URI in, one configured handler launched.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use gum_core::config::{self, GumConfig};
use gum_core::logging;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use commands::{print_overview, run_launch};

/// How long a debug run keeps its console open before exiting.
const DEBUG_LINGER: Duration = Duration::from_secs(4);

/// Top-level CLI for gum.
#[derive(Debug, Parser)]
#[command(name = "gum", version)]
#[command(about = "Open a URI with the handler configured for its scheme", long_about = None)]
pub struct Cli {
    /// URI to open, e.g. rdp://user@host:3389. Without it, configured protocols are listed.
    pub uri: Option<String>,

    /// Configuration file (JSON, or TOML when the extension is .toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print full error detail and keep the console open briefly before exiting.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Run the CLI and map the outcome to an exit code.
    pub fn execute(self) -> ExitCode {
        let path = match self.config_path() {
            Ok(path) => path,
            Err(err) => {
                logging::init_logging_stderr(self.debug);
                report(&err, self.debug);
                return ExitCode::FAILURE;
            }
        };
        let loaded = config::load(&path);
        let debug = self.debug || loaded.as_ref().is_ok_and(|cfg| cfg.debug);

        if let Err(err) = logging::init_logging(debug) {
            logging::init_logging_stderr(debug);
            tracing::warn!("file logging unavailable: {err:#}");
        }
        log_config(&path, &loaded);

        let result = self.dispatch(&path, loaded, debug);
        let code = match &result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                report(err, debug);
                ExitCode::FAILURE
            }
        };
        if debug {
            std::thread::sleep(DEBUG_LINGER);
        }
        code
    }

    fn dispatch(
        &self,
        path: &Path,
        loaded: gum_core::Result<GumConfig>,
        debug: bool,
    ) -> Result<()> {
        match &self.uri {
            None => {
                print_overview(path, loaded.as_ref().ok());
                Ok(())
            }
            Some(uri) => run_launch(uri, loaded?, debug),
        }
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::config_path().context("locate configuration file"),
        }
    }
}

/// Record which configuration file was used. Runs once logging is up.
fn log_config(path: &Path, loaded: &gum_core::Result<GumConfig>) {
    match loaded {
        Ok(cfg) => tracing::debug!(
            "config file path is {} ({} protocols)",
            path.display(),
            cfg.protocols.len()
        ),
        Err(err) => tracing::debug!("config file path is {}: {err}", path.display()),
    }
}

/// Debug mode prints the whole error chain; otherwise one line.
fn report(err: &anyhow::Error, debug: bool) {
    if debug {
        eprintln!("gum error: {err:?}");
    } else {
        eprintln!("gum error: {err}");
    }
}

#[cfg(test)]
mod tests;
