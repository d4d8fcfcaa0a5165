use crate::areas::desigit::Desigit;
use crate::artifacts::translator;
use std::ffi::OsString;
use std::io::Write;

impl Desigit {
    /// Resolves `[alias, args...]` and runs the matching git command,
    /// returning git's exit code.
    ///
    /// Nothing is spawned when the alias is missing or unknown.
    pub fn run(&self, invocation: Vec<OsString>) -> anyhow::Result<i32> {
        let command = translator::resolve(invocation)?;
        self.writer().flush()?;

        Ok(self.launcher().launch(&command)?)
    }
}
