//! CLI actions: launching a URI, or describing the configuration when none is given.

mod launch;
mod overview;

pub use launch::run_launch;
pub use overview::print_overview;
#[cfg(test)]
pub use overview::overview_text;
