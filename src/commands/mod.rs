//! Command implementations
//!
//! - `run`: translate an alias and delegate to git
//! - `info`: informational commands that never touch a repository (alias
//!   listing, examples, per-alias help, version)

pub mod info;
pub mod run;
