use crate::areas::desigit::Desigit;
use crate::artifacts::aliases::USAGE_EXAMPLES;
use std::io::Write;

const TITLE_WIDTH: usize = 20;

impl Desigit {
    pub fn show_examples(&self) -> anyhow::Result<()> {
        let mut writer = self.writer();
        writeln!(writer, "\nCommon Usage Examples:")?;

        for (name, example) in USAGE_EXAMPLES {
            writeln!(writer, "  {:<TITLE_WIDTH$} : {example}", title_case(name))?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// `new_branch` -> `New Branch`
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
