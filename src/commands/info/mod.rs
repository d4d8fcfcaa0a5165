//! Informational commands
//!
//! ## Commands
//!
//! - `--list`: every alias grouped by category
//! - `--examples`: common usage examples
//! - `--explain <alias>`: help for one alias
//! - `--version`: desigit and git versions

pub mod examples;
pub mod explain;
pub mod list;
pub mod version;
