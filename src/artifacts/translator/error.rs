use std::ffi::OsString;
use std::io;
use thiserror::Error;

/// Exit code for a missing or unrecognised alias.
pub const USAGE_EXIT_CODE: i32 = 1;
/// Shell convention for a program that exists but cannot be executed.
pub const NOT_EXECUTABLE_EXIT_CODE: i32 = 126;
/// Shell convention for a program that cannot be found.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no command given\n\nUsage: desigit <command> [args...]\nUse --list to see all available commands.")]
    MissingCommand,

    #[error("unknown command: {alias}{}", render_suggestions(.suggestions))]
    UnknownAlias {
        alias: String,
        suggestions: Vec<&'static str>,
    },

    #[error("{}: {source}", .program.to_string_lossy())]
    UnderlyingExecution {
        program: OsString,
        #[source]
        source: io::Error,
    },
}

impl TranslateError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TranslateError::MissingCommand | TranslateError::UnknownAlias { .. } => {
                USAGE_EXIT_CODE
            }
            TranslateError::UnderlyingExecution { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => NOT_FOUND_EXIT_CODE,
                io::ErrorKind::PermissionDenied => NOT_EXECUTABLE_EXIT_CODE,
                _ => USAGE_EXIT_CODE,
            },
        }
    }
}

fn render_suggestions(suggestions: &[&str]) -> String {
    let mut rendered = String::new();
    if !suggestions.is_empty() {
        rendered.push_str("\n\nDid you mean one of these?");
        for alias in suggestions {
            let canonical = crate::artifacts::aliases::canonical(alias).unwrap_or(*alias);
            rendered.push_str(&format!("\n  {alias} (git {canonical})"));
        }
    }
    rendered.push_str("\n\nUse --list to see all available commands.");
    rendered
}
