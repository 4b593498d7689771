//! gum core: turn one URI plus protocol configuration into a rendered command
//! and, optionally, an assembled field file.

pub mod command;
pub mod config;
pub mod error;
pub mod fields;
pub mod fragment;
pub mod logging;
pub mod registry;
pub mod run;
pub mod template;
pub mod url_parts;

pub use error::{Error, Result};
