use std::{fs, io::ErrorKind};

use chrono::NaiveDate;

use crate::{
    branches::{discover_branches, exclusions, filter_explicit, RefSource},
    cli::Args,
    document::{detect_previous_version, inject_entry, CHANGELOG_HEADER},
    entry::ChangelogEntry,
    inputs::{read_description, read_version},
    Result,
};

/// Resolve every input, then prepend the new section to the changelog.
///
/// Returns the new version. The changelog is written only after all inputs
/// resolved, so a failed run leaves it untouched.
pub fn generate(args: &Args, refs: &dyn RefSource, today: NaiveDate) -> Result<String> {
    let version = match non_blank(&args.new_version) {
        Some(v) => v.to_string(),
        None => read_version(&args.version_file)?,
    };
    let previous_version = match non_blank(&args.previous_version) {
        Some(v) => Some(v.to_string()),
        None => detect_previous_version(&args.changelog)?,
    };
    let date = args.date.unwrap_or(today);

    let exclude = exclusions(args.exclude_branches.as_deref());
    let branches = match &args.branches {
        Some(explicit) => filter_explicit(explicit, &exclude),
        None => discover_branches(refs, &exclude),
    };
    tracing::debug!(?branches, "branches resolved");

    let description = read_description(&args.description_file)?;

    let entry = ChangelogEntry {
        version,
        previous_version,
        date,
        branches,
        description,
        hotfix: args.hotfix,
    };

    let current = match fs::read_to_string(&args.changelog) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => format!("{CHANGELOG_HEADER}\n"),
        Err(e) => return Err(e.into()),
    };
    fs::write(&args.changelog, inject_entry(&current, &entry.render()))?;
    tracing::info!(
        changelog = %args.changelog.display(),
        "added section {}",
        entry.header()
    );

    if args.clear_description_file && args.description_file.exists() {
        fs::write(&args.description_file, "")?;
    }

    Ok(entry.version)
}

/// An override given as an empty string counts as not given.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
