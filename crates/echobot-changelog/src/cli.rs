use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

pub const DEFAULT_DESCRIPTION_PLACEHOLDER: &str = "- [ ] Добавьте описание изменений вручную";

#[derive(Parser, Debug, Clone)]
#[command(name = "generate-changelog")]
#[command(about = "Generate changelog entry skeleton.")]
pub struct Args {
    /// Path to changelog file.
    #[arg(long, default_value = "changelog.md")]
    pub changelog: PathBuf,

    /// Path to file that stores new version.
    #[arg(long, default_value = "version")]
    pub version_file: PathBuf,

    /// Override new version instead of reading version file.
    #[arg(long)]
    pub new_version: Option<String>,

    /// Override previous version instead of reading changelog.
    #[arg(long)]
    pub previous_version: Option<String>,

    /// Mark entry as hotfix.
    #[arg(long, default_value_t = false)]
    pub hotfix: bool,

    /// List branches included in release.
    #[arg(long, num_args = 0..)]
    pub branches: Option<Vec<String>>,

    /// Branch names to exclude when auto-discovering branches.
    #[arg(long, num_args = 0..)]
    pub exclude_branches: Option<Vec<String>>,

    /// Date to use in entry (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Placeholder line for manual description. Accepted but not rendered.
    #[arg(long, default_value = DEFAULT_DESCRIPTION_PLACEHOLDER)]
    pub description_placeholder: String,

    /// Path to file with manual description text.
    #[arg(long, default_value = "scripts/changelog/description.txt")]
    pub description_file: PathBuf,

    /// Truncate description file after successful generation.
    #[arg(long, default_value_t = false)]
    pub clear_description_file: bool,
}
