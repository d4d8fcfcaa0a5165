use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const LOG_ENV_VAR: &str = "MOCK_GIT_LOG";
pub const EXIT_ENV_VAR: &str = "MOCK_GIT_EXIT";
pub const VERSION_LINE: &str = "git version 0.0.0-mock";
pub const STDOUT_LINE: &str = "mock git was here";

const LOG_FILE: &str = "git-args";

const SCRIPT: &str = r#"#!/bin/sh
printf '%s\0' "$@" > "$MOCK_GIT_LOG"
if [ "$1" = "--version" ]; then
    echo "git version 0.0.0-mock"
else
    echo "mock git was here"
fi
exit "${MOCK_GIT_EXIT:-0}"
"#;

static MOCK_GIT: OnceLock<PathBuf> = OnceLock::new();

/// Path of the mock git script, written once per test binary.
///
/// Writing it once keeps concurrently running tests from exec'ing a file that
/// another test still holds open for writing.
pub fn path() -> &'static Path {
    MOCK_GIT.get_or_init(|| {
        let dir = std::env::temp_dir().join(format!("desigit-mock-git-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Failed to create mock git dir");

        let script = dir.join("git");
        std::fs::write(&script, SCRIPT).expect("Failed to write mock git");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make mock git executable");
        script
    })
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

/// The argv the mock git received in `dir`, or `None` if it never ran.
pub fn recorded_args(dir: &Path) -> Option<Vec<String>> {
    let raw = std::fs::read(log_path(dir)).ok()?;
    let args = raw
        .split(|byte| *byte == 0)
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect::<Vec<_>>();

    // printf leaves a trailing NUL, so the last chunk is always empty
    Some(args[..args.len() - 1].to_vec())
}
