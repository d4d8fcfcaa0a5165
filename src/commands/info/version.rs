use crate::areas::desigit::Desigit;
use std::io::Write;

impl Desigit {
    pub fn version(&self) -> anyhow::Result<()> {
        let git_version = self.launcher().version();

        let mut writer = self.writer();
        writeln!(writer, "desigit version {}", env!("CARGO_PKG_VERSION"))?;
        if let Some(git_version) = git_version {
            writeln!(writer, "{git_version}")?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::desigit::Desigit;
    use crate::areas::desigit::test_support::SharedBuffer;
    use crate::areas::launcher::Launcher;

    #[test]
    fn missing_git_only_prints_own_version() {
        let buffer = SharedBuffer::default();
        let desigit = Desigit::new(
            Launcher::new("desigit-test-no-such-program"),
            Box::new(buffer.clone()),
        );

        desigit.version().unwrap();

        assert_eq!(
            buffer.contents(),
            format!("desigit version {}\n", env!("CARGO_PKG_VERSION"))
        );
    }
}
