//! Runtime components
//!
//! - `desigit`: application context (output writer + launcher) the commands run on
//! - `launcher`: spawning the underlying git executable

pub mod desigit;
pub mod launcher;
