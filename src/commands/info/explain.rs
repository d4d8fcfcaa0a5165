use crate::areas::desigit::Desigit;
use crate::artifacts::aliases::{self, ALIAS_EXAMPLES, DESCRIPTIONS, suggest};
use crate::artifacts::translator::error::TranslateError;
use colored::Colorize;
use std::io::Write;

const UNCATEGORISED: &str = "other";

impl Desigit {
    /// Prints what an alias runs, its category and a short description.
    pub fn explain(&self, alias: &str) -> anyhow::Result<()> {
        let git_command = aliases::canonical(alias).ok_or_else(|| TranslateError::UnknownAlias {
            alias: alias.to_string(),
            suggestions: suggest::similar_aliases(alias),
        })?;
        let category = aliases::category_of(alias).unwrap_or(UNCATEGORISED);

        let mut writer = self.writer();
        writeln!(
            writer,
            "\n{} ({})",
            alias.green(),
            format!("git {git_command}").yellow()
        )?;
        writeln!(writer, "Category: {}", category.blue())?;

        match DESCRIPTIONS.get(alias) {
            Some(description) => writeln!(writer, "\n{description} (git {git_command})")?,
            None => writeln!(writer, "\nNo help available for {alias}")?,
        }

        if let Some(example) = ALIAS_EXAMPLES.get(alias) {
            writeln!(writer, "\nExample: {example}")?;
        }

        writer.flush()?;
        Ok(())
    }
}
