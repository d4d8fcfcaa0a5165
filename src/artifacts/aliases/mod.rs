//! The Hinglish alias table
//!
//! Every alias maps to the git command line it stands for. Most entries are a
//! single subcommand (`ped` -> `init`); the combined entries carry fixed leading
//! arguments as well (`nayi-tehni` -> `checkout -b`) and are split on
//! whitespace when resolved.
//!
//! Lookup goes through [`ALIASES`]. [`CATEGORIES`] only drives the listing
//! and must cover every key of [`ALIASES`] exactly once.

pub mod suggest;

pub const ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Basic Commands
    "van" => "git",

    // Setup and Config
    "setting" => "config",
    "madad" => "help",
    "kharabi" => "bugreport",
    "vishwas" => "credential-helper",

    // Getting and Creating Projects
    "ped" => "init",
    "nakal" => "clone",

    // Basic Snapshotting
    "jodo" => "add",
    "haalat" => "status",
    "farak" => "diff",
    "zimma" => "commit",
    "tippani" => "notes",
    "wapas" => "restore",
    "reset" => "reset",
    "hatao" => "rm",
    "khisko" => "mv",

    // Branching and Merging
    "tehni" => "branch",
    "dekho" => "checkout",
    "badlo" => "switch",
    "milao" => "merge",
    "milap-yantra" => "mergetool",
    "dekhrek" => "log",
    "kuda" => "stash",
    "nishani" => "tag",
    "kaam-ped" => "worktree",

    // Sharing and Updating Projects
    "lao" => "fetch",
    "kheech" => "pull",
    "dhaka" => "push",
    "door" => "remote",
    "upshakha" => "submodule",

    // Inspection and Comparison
    "dikhao" => "show",
    "farak-yantra" => "difftool",
    "seema-farak" => "range-diff",
    "kitna" => "shortlog",
    "batao" => "describe",

    // Patching
    "lagao" => "apply",
    "chun-lo" => "cherry-pick",
    "nayi-neev" => "rebase",
    "ultao" => "revert",

    // Debugging
    "do-tukda" => "bisect",
    "dosh" => "blame",
    "khojo" => "grep",

    // Email
    "daakiya" => "am",
    "prarup" => "format-patch",
    "bhejo" => "send-email",
    "maang" => "request-pull",

    // External Systems
    "svn" => "svn",
    "jaldi-ghusao" => "fast-import",

    // Administration
    "saaf" => "clean",
    "raddi" => "gc",
    "jaanch" => "fsck",
    "ref-log" => "reflog",
    "chhanno" => "filter-branch",
    "web-dikho" => "instaweb",
    "sanrakshan" => "archive",
    "gathri" => "bundle",

    // Server Admin
    "sewak" => "daemon",
    "server-update" => "update-server-info",

    // Plumbing Commands
    "file-dekho" => "cat-file",
    "ignore-jaanch" => "check-ignore",
    "checkout-suchi" => "checkout-index",
    "zimma-ped" => "commit-tree",
    "ginti" => "count-objects",
    "farak-suchi" => "diff-index",
    "har-ek-ke-liye" => "for-each-ref",
    "hash-cheez" => "hash-object",
    "file-suchi" => "ls-files",
    "ped-suchi" => "ls-tree",
    "milao-adhaar" => "merge-base",
    "ped-padho" => "read-tree",
    "rev-suchi" => "rev-list",
    "rev-samjho" => "rev-parse",
    "dikho-ref" => "show-ref",
    "sanket-ref" => "symbolic-ref",
    "suchi-update" => "update-index",
    "ref-update" => "update-ref",
    "pack-jaanch" => "verify-pack",
    "ped-likho" => "write-tree",

    // Common Combined Commands
    "abhi-jodo" => "add .",
    "sab-saaf" => "clean -fd",
    "branch-saaf" => "remote prune origin",
    "nayi-tehni" => "checkout -b",
    "vapas-jao" => "checkout -",
    "stash-lagao" => "stash apply",
    "zimma-vapas" => "commit --amend",
    "setting-dekho" => "config --list",
    "door-dekho" => "remote -v",
};

/// Aliases grouped for `--list`, in display order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("Basic Commands", &["van"]),
    (
        "Setup and Config",
        &["setting", "madad", "kharabi", "vishwas"],
    ),
    ("Getting and Creating Projects", &["ped", "nakal"]),
    (
        "Basic Snapshotting",
        &[
            "jodo", "haalat", "farak", "zimma", "tippani", "wapas", "reset", "hatao", "khisko",
        ],
    ),
    (
        "Branching and Merging",
        &[
            "tehni",
            "dekho",
            "badlo",
            "milao",
            "milap-yantra",
            "dekhrek",
            "kuda",
            "nishani",
            "kaam-ped",
        ],
    ),
    (
        "Sharing and Updating Projects",
        &["lao", "kheech", "dhaka", "door", "upshakha"],
    ),
    (
        "Inspection and Comparison",
        &["dikhao", "farak-yantra", "seema-farak", "kitna", "batao"],
    ),
    ("Patching", &["lagao", "chun-lo", "nayi-neev", "ultao"]),
    ("Debugging", &["do-tukda", "dosh", "khojo"]),
    ("Email", &["daakiya", "prarup", "bhejo", "maang"]),
    ("External Systems", &["svn", "jaldi-ghusao"]),
    (
        "Administration",
        &[
            "saaf",
            "raddi",
            "jaanch",
            "ref-log",
            "chhanno",
            "web-dikho",
            "sanrakshan",
            "gathri",
        ],
    ),
    ("Server Admin", &["sewak", "server-update"]),
    (
        "Plumbing Commands",
        &[
            "file-dekho",
            "ignore-jaanch",
            "checkout-suchi",
            "zimma-ped",
            "ginti",
            "farak-suchi",
            "har-ek-ke-liye",
            "hash-cheez",
            "file-suchi",
            "ped-suchi",
            "milao-adhaar",
            "ped-padho",
            "rev-suchi",
            "rev-samjho",
            "dikho-ref",
            "sanket-ref",
            "suchi-update",
            "ref-update",
            "pack-jaanch",
            "ped-likho",
        ],
    ),
    (
        "Common Combined Commands",
        &[
            "abhi-jodo",
            "sab-saaf",
            "branch-saaf",
            "nayi-tehni",
            "vapas-jao",
            "stash-lagao",
            "zimma-vapas",
            "setting-dekho",
            "door-dekho",
        ],
    ),
];

pub const DESCRIPTIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "ped" => "Initialize a new git repository",
    "nakal" => "Clone a repository into a new directory",
    "jodo" => "Add file contents to the index",
    "haalat" => "Show the working tree status",
    "farak" => "Show changes between commits, commit and working tree, etc",
    "zimma" => "Record changes to the repository",
    "dhaka" => "Update remote refs along with associated objects",
    "kheech" => "Fetch from and integrate with another repository or local branch",
    "lao" => "Download objects and refs from another repository",
    "tehni" => "List, create, or delete branches",
    "dekho" => "Switch branches or restore working tree files",
    "badlo" => "Switch branches",
    "milao" => "Join two or more development histories together",
    "dekhrek" => "Show commit logs",
    "kuda" => "Stash the changes in a dirty working directory away",
    "nishani" => "Create, list, delete or verify a tag object",
    "nayi-neev" => "Reapply commits on top of another base tip",
    "chun-lo" => "Apply the changes introduced by some existing commits",
    "ultao" => "Revert some existing commits",
    "do-tukda" => "Use binary search to find the commit that introduced a bug",
    "abhi-jodo" => "Stage everything in the current directory",
    "nayi-tehni" => "Create a new branch and switch to it",
    "vapas-jao" => "Switch back to the previously checked out branch",
    "zimma-vapas" => "Amend the last commit",
};

/// Examples shown by `--examples`, in display order.
pub const USAGE_EXAMPLES: &[(&str, &str)] = &[
    ("initialize", "desigit ped"),
    ("add_files", "desigit jodo ."),
    ("commit", "desigit zimma -m \"your message\""),
    ("push", "desigit dhaka origin master"),
    ("pull", "desigit kheech origin master"),
    ("new_branch", "desigit tehni feature-branch"),
    ("checkout", "desigit dekho branch-name"),
    ("status", "desigit haalat"),
];

pub const ALIAS_EXAMPLES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "ped" => "desigit ped",
    "jodo" => "desigit jodo .",
    "zimma" => "desigit zimma -m \"your message\"",
    "dhaka" => "desigit dhaka origin master",
    "kheech" => "desigit kheech origin master",
    "tehni" => "desigit tehni feature-branch",
    "dekho" => "desigit dekho branch-name",
    "haalat" => "desigit haalat",
    "nayi-tehni" => "desigit nayi-tehni feature-branch",
};

/// Returns the git command line an alias stands for.
pub fn canonical(alias: &str) -> Option<&'static str> {
    ALIASES.get(alias).copied()
}

pub fn category_of(alias: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(_, aliases)| aliases.contains(&alias))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    #[test]
    fn every_alias_belongs_to_exactly_one_category() {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (_, aliases) in CATEGORIES {
            for alias in *aliases {
                *seen.entry(*alias).or_default() += 1;
            }
        }

        for alias in ALIASES.keys() {
            assert_eq!(seen.get(alias), Some(&1), "alias {alias} is not listed once");
        }
        assert_eq!(seen.len(), ALIASES.len());
    }

    #[test]
    fn descriptions_and_examples_only_reference_known_aliases() {
        for alias in DESCRIPTIONS.keys().chain(ALIAS_EXAMPLES.keys()) {
            assert!(ALIASES.contains_key(alias), "unknown alias {alias}");
        }
    }

    #[test]
    fn usage_examples_use_known_aliases() {
        for (_, example) in USAGE_EXAMPLES {
            let alias = example.split_whitespace().nth(1).unwrap();
            assert!(ALIASES.contains_key(alias), "unknown alias {alias}");
        }
    }

    #[rstest]
    #[case("ped", "init")]
    #[case("haalat", "status")]
    #[case("jodo", "add")]
    #[case("zimma", "commit")]
    #[case("dhaka", "push")]
    #[case("kheech", "pull")]
    #[case("tehni", "branch")]
    #[case("dekho", "checkout")]
    #[case("milao", "merge")]
    #[case("kuda", "stash")]
    #[case("nayi-tehni", "checkout -b")]
    fn documented_aliases_map_to_git_commands(#[case] alias: &str, #[case] expected: &str) {
        assert_eq!(canonical(alias), Some(expected));
    }

    #[rstest]
    #[case("Ped")]
    #[case("PED")]
    #[case("pe")]
    #[case("ped ")]
    #[case("")]
    fn lookup_is_exact_and_case_sensitive(#[case] alias: &str) {
        assert_eq!(canonical(alias), None);
    }

    #[test]
    fn category_is_found_for_listed_alias() {
        assert_eq!(category_of("zimma"), Some("Basic Snapshotting"));
        assert_eq!(category_of("door-dekho"), Some("Common Combined Commands"));
        assert_eq!(category_of("bewakoof"), None);
    }
}
