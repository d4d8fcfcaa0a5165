//! Alias resolution
//!
//! Turns the raw invocation (`[alias, args...]`) into a [`ResolvedCommand`].
//! Only the leading alias is looked at; the rest is carried along as-is.

pub mod error;
pub mod resolved_command;

use crate::artifacts::aliases::{self, suggest};
use error::TranslateError;
use resolved_command::ResolvedCommand;
use std::ffi::OsString;

pub fn resolve<I>(invocation: I) -> Result<ResolvedCommand, TranslateError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut invocation = invocation.into_iter();
    let alias = invocation.next().ok_or(TranslateError::MissingCommand)?;
    let trailing = invocation.collect::<Vec<_>>();

    let alias = match alias.into_string() {
        Ok(alias) => alias,
        Err(raw) => {
            return Err(TranslateError::UnknownAlias {
                alias: raw.to_string_lossy().into_owned(),
                suggestions: Vec::new(),
            });
        }
    };

    match aliases::canonical(&alias) {
        Some(canonical) => {
            tracing::debug!(%alias, canonical, trailing = trailing.len(), "resolved alias");
            Ok(ResolvedCommand::new(alias, canonical, trailing))
        }
        None => {
            let suggestions = suggest::similar_aliases(&alias);
            tracing::debug!(%alias, ?suggestions, "unknown alias");
            Err(TranslateError::UnknownAlias { alias, suggestions })
        }
    }
}
