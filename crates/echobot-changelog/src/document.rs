use std::{fs, io::ErrorKind, path::Path, sync::OnceLock};

use regex::Regex;

use crate::Result;

pub const CHANGELOG_HEADER: &str = "# Changelog";

/// Version of the newest section already in the changelog at `path`.
///
/// Scans `##` headings top-down and returns the first `X.Y.Z` found. A missing
/// file yields `None`.
pub fn detect_previous_version(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(previous_version_in(&text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn previous_version_in(text: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let version_re =
        VERSION_RE.get_or_init(|| Regex::new(r"(\d+\.\d+\.\d+)").expect("valid regex"));
    text.lines()
        .filter(|line| line.starts_with("##"))
        .find_map(|line| version_re.find(line).map(|m| m.as_str().to_string()))
}

/// Insert `entry` at the top of the changelog text.
///
/// With a `# Changelog` first line the entry goes right after it and the rest
/// of the document is kept as is (minus leading blank lines). Without one a
/// header is synthesized.
pub fn inject_entry(changelog: &str, entry: &str) -> String {
    let (first, rest) = changelog.split_once('\n').unwrap_or((changelog, ""));
    let header = first.trim_end_matches('\r');

    if header.trim().to_lowercase().starts_with("# changelog") {
        return join_sections(header, entry, rest);
    }

    join_sections(CHANGELOG_HEADER, entry, changelog)
}

fn join_sections(header: &str, entry: &str, rest: &str) -> String {
    let rest = rest.trim_start_matches(['\n', '\r']);
    let mut out = format!("{header}\n\n{entry}");
    if !rest.is_empty() {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
        out.push_str(rest);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = "## 2.0.0 (1.0.0 -> 2.0.0) - 2024-01-01\n\n### Описание\nFixed bug\n";

    #[test]
    fn detects_first_versioned_heading() {
        let text = "# Changelog\n\n## 1.0.0 (N/A -> 1.0.0) - 2023-12-01\n\n## 0.9.0\n";
        assert_eq!(previous_version_in(text), Some("1.0.0".to_string()));
    }

    #[test]
    fn ignores_versions_outside_headings() {
        let text = "# Changelog\nbumped 3.4.5 somewhere\n## Unreleased\n## Hotfix 1.2.3 (1.2.2 -> 1.2.3)\n";
        assert_eq!(previous_version_in(text), Some("1.2.3".to_string()));
    }

    #[test]
    fn no_versioned_heading() {
        assert_eq!(previous_version_in("# Changelog\n\n## Unreleased\n"), None);
        assert_eq!(previous_version_in(""), None);
    }

    #[test]
    fn missing_changelog_has_no_previous_version() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            detect_previous_version(&dir.path().join("changelog.md")).unwrap(),
            None
        );
    }

    #[test]
    fn reads_previous_version_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changelog.md");
        fs::write(&path, "# Changelog\n\n## 1.0.0 ...\n").unwrap();
        assert_eq!(
            detect_previous_version(&path).unwrap(),
            Some("1.0.0".to_string())
        );
    }

    #[test]
    fn inserts_after_existing_header() {
        let rest = "## 1.0.0 (N/A -> 1.0.0) - 2023-12-01\n\n### Описание\nFirst release\n";
        let doc = format!("# Changelog\n\n{rest}");

        let out = inject_entry(&doc, ENTRY);
        assert_eq!(out, format!("# Changelog\n\n{ENTRY}\n{rest}"));
    }

    #[test]
    fn header_match_is_case_insensitive_and_kept_verbatim() {
        let out = inject_entry("# CHANGELOG of the bot\nold\n", ENTRY);
        assert_eq!(out, format!("# CHANGELOG of the bot\n\n{ENTRY}\nold\n"));
    }

    #[test]
    fn header_only_document() {
        assert_eq!(
            inject_entry("# Changelog\n", ENTRY),
            format!("# Changelog\n\n{ENTRY}")
        );
    }

    #[test]
    fn synthesizes_header_when_missing() {
        let out = inject_entry("## 1.0.0\nold notes\n", ENTRY);
        assert_eq!(out, format!("# Changelog\n\n{ENTRY}\n## 1.0.0\nold notes\n"));
    }

    #[test]
    fn empty_document_gets_header() {
        assert_eq!(inject_entry("", ENTRY), format!("# Changelog\n\n{ENTRY}"));
        assert_eq!(inject_entry("\n\n", ENTRY), format!("# Changelog\n\n{ENTRY}"));
    }
}
