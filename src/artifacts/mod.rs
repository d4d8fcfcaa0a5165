//! Translation data and logic
//!
//! - `aliases`: the static Hinglish alias table, categories and help texts
//! - `translator`: resolving an invocation into a git command line

pub mod aliases;
pub mod translator;
