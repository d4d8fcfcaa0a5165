use crate::areas::desigit::Desigit;
use crate::artifacts::aliases::{CATEGORIES, canonical};
use colored::Colorize;
use std::io::Write;

const ALIAS_WIDTH: usize = 15;

impl Desigit {
    pub fn list_aliases(&self) -> anyhow::Result<()> {
        let mut writer = self.writer();
        writeln!(writer, "\nAvailable Command Categories:")?;

        for (category, aliases) in CATEGORIES {
            writeln!(writer, "\n{}:", category.bold())?;
            for alias in *aliases {
                let git_command = canonical(alias).unwrap_or(*alias);
                writeln!(
                    writer,
                    "  {} -> git {}",
                    format!("{alias:<ALIAS_WIDTH$}").green(),
                    git_command
                )?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
