//! Branch discovery for the release section.

use std::{
    collections::HashSet,
    path::PathBuf,
    process::{Command, Stdio},
};

/// Branches never listed in a release section unless asked otherwise.
pub const DEFAULT_EXCLUDED: [&str; 2] = ["main", "prod"];

const REMOTE_REFS: [&str; 3] = ["for-each-ref", "--format=%(refname:short)", "refs/remotes/"];
const LOCAL_BRANCHES: [&str; 2] = ["branch", "--format=%(refname:short)"];

/// Something that can answer a branch-listing query.
///
/// Returns stdout on success and `None` when the query failed.
pub trait RefSource {
    fn run(&self, args: &[&str]) -> Option<String>;
}

/// Runs `git` in the current directory.
#[derive(Clone, Debug)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }
}

impl RefSource for GitCli {
    fn run(&self, args: &[&str]) -> Option<String> {
        let output = match Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("could not run {}: {e}", self.program.display());
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git {} failed, skipping",
                args.join(" ")
            );
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Default exclusions plus user-supplied ones.
pub fn exclusions(extra: Option<&[String]>) -> HashSet<String> {
    DEFAULT_EXCLUDED
        .iter()
        .map(|s| s.to_string())
        .chain(extra.unwrap_or_default().iter().cloned())
        .collect()
}

/// Drop excluded names from an explicit `--branches` list, keeping order.
pub fn filter_explicit(branches: &[String], exclude: &HashSet<String>) -> Vec<String> {
    branches
        .iter()
        .filter(|b| !exclude.contains(b.as_str()))
        .cloned()
        .collect()
}

/// Remote-tracking branches first, then local ones, deduplicated in first-seen order.
pub fn discover_branches(source: &dyn RefSource, exclude: &HashSet<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();

    for query in [&REMOTE_REFS[..], &LOCAL_BRANCHES[..]] {
        let Some(stdout) = source.run(query) else {
            continue;
        };

        for raw in stdout.lines() {
            let Some(name) = normalize(raw) else {
                continue;
            };
            if name == "HEAD" || exclude.contains(name) {
                continue;
            }
            if !seen.iter().any(|s| s == name) {
                seen.push(name.to_string());
            }
        }
    }

    seen
}

fn normalize(raw: &str) -> Option<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }
    let name = name.strip_prefix("origin/").unwrap_or(name);
    let name = name.strip_prefix("remotes/").unwrap_or(name);
    Some(name)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    /// Answers queries by their first argument; unknown queries fail.
    #[derive(Default)]
    struct FakeGit {
        outputs: HashMap<&'static str, &'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeGit {
        fn with(mut self, subcommand: &'static str, stdout: &'static str) -> Self {
            self.outputs.insert(subcommand, stdout);
            self
        }
    }

    impl RefSource for FakeGit {
        fn run(&self, args: &[&str]) -> Option<String> {
            self.calls.borrow_mut().push(args.join(" "));
            self.outputs.get(args[0]).map(|s| s.to_string())
        }
    }

    #[test]
    fn dedups_and_excludes_defaults() {
        let git = FakeGit::default()
            .with(
                "for-each-ref",
                "origin/HEAD\norigin/main\norigin/feature-x\norigin/prod\norigin/fix-y\n",
            )
            .with("branch", "main\nfeature-x\nlocal-only\n");

        let branches = discover_branches(&git, &exclusions(None));
        assert_eq!(branches, vec!["feature-x", "fix-y", "local-only"]);
    }

    #[test]
    fn queries_remote_then_local() {
        let git = FakeGit::default();
        assert!(discover_branches(&git, &exclusions(None)).is_empty());
        assert_eq!(
            *git.calls.borrow(),
            vec![
                "for-each-ref --format=%(refname:short) refs/remotes/".to_string(),
                "branch --format=%(refname:short)".to_string(),
            ]
        );
    }

    #[test]
    fn failed_query_is_skipped() {
        let git = FakeGit::default().with("branch", "feature-x\n  \n");
        assert_eq!(
            discover_branches(&git, &exclusions(None)),
            vec!["feature-x"]
        );
    }

    #[test]
    fn strips_remote_prefixes() {
        assert_eq!(normalize("origin/feature"), Some("feature"));
        assert_eq!(normalize("remotes/feature"), Some("feature"));
        assert_eq!(normalize("origin/remotes/feature"), Some("feature"));
        assert_eq!(normalize("  feature/nested  "), Some("feature/nested"));
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn user_exclusions_extend_defaults() {
        let extra = vec!["develop".to_string()];
        let exclude = exclusions(Some(extra.as_slice()));
        assert!(exclude.contains("main"));
        assert!(exclude.contains("prod"));
        assert!(exclude.contains("develop"));

        let git = FakeGit::default().with("branch", "develop\nfeature-x\n");
        assert_eq!(discover_branches(&git, &exclude), vec!["feature-x"]);
    }

    #[test]
    fn explicit_list_is_filtered_in_order() {
        let branches: Vec<String> = ["b", "main", "a", "prod"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            filter_explicit(&branches, &exclusions(None)),
            vec!["b", "a"]
        );
    }
}
