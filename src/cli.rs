//! CLI domain: parse, route and output only.
//! Reporting logic lives in `report`; the route hands it a loaded snapshot and sinks.

mod output;
mod parse;
mod route;

pub use output::{exit_code, map_error, EXIT_ERROR, EXIT_FAILURES, EXIT_SUCCESS};
pub use parse::Cli;
pub use route::{RunContext, RunOutcome};
