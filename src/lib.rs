//! desigit: git with Hinglish commands
//!
//! `desigit <alias> [args...]` looks the alias up in a fixed table, runs the
//! git subcommand it stands for with the remaining arguments unchanged, and
//! exits with git's exit code.
//!
//! - `artifacts`: the alias table and the translator
//! - `areas`: the application context and the process launcher
//! - `commands`: delegation and the informational commands
//! - `logging`: tracing setup

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod logging;
