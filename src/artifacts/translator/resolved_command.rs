use derive_new::new;
use std::ffi::OsString;

/// An alias translated to the git command line it stands for, plus the
/// caller's trailing arguments, untouched.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ResolvedCommand {
    alias: String,
    canonical: &'static str,
    trailing: Vec<OsString>,
}

impl ResolvedCommand {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The canonical command line as written in the alias table, e.g. `checkout -b`.
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    pub fn trailing(&self) -> &[OsString] {
        &self.trailing
    }

    /// The argument vector handed to the underlying executable.
    pub fn argv(&self) -> Vec<OsString> {
        self.canonical
            .split_whitespace()
            .map(OsString::from)
            .chain(self.trailing.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_word_command_comes_before_trailing_args() {
        let resolved = ResolvedCommand::new(
            "dhaka".to_string(),
            "push",
            vec!["origin".into(), "master".into()],
        );

        assert_eq!(
            resolved.argv(),
            vec![
                OsString::from("push"),
                OsString::from("origin"),
                OsString::from("master")
            ]
        );
    }

    #[test]
    fn combined_command_is_split_into_separate_arguments() {
        let resolved =
            ResolvedCommand::new("nayi-tehni".to_string(), "checkout -b", vec!["feat".into()]);

        assert_eq!(
            resolved.argv(),
            vec![
                OsString::from("checkout"),
                OsString::from("-b"),
                OsString::from("feat")
            ]
        );
    }

    #[test]
    fn trailing_argument_with_spaces_stays_one_argument() {
        let resolved = ResolvedCommand::new(
            "zimma".to_string(),
            "commit",
            vec!["-m".into(), "Initial commit".into()],
        );

        assert_eq!(resolved.argv().len(), 3);
        assert_eq!(resolved.argv()[2], OsString::from("Initial commit"));
    }
}
