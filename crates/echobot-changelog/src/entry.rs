use chrono::NaiveDate;

/// Bullet shown when no branch made it into the release.
pub const EMPTY_BRANCHES_PLACEHOLDER: &str = "- [ ] Добавьте ветки, вошедшие в релиз";

/// One release section of the changelog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: String,
    pub previous_version: Option<String>,
    pub date: NaiveDate,
    pub branches: Vec<String>,
    pub description: String,
    pub hotfix: bool,
}

impl ChangelogEntry {
    pub fn header(&self) -> String {
        let label = if self.hotfix { "Hotfix " } else { "" };
        let baseline = self.previous_version.as_deref().unwrap_or("N/A");
        format!(
            "## {label}{version} ({baseline} -> {version}) - {date}",
            version = self.version,
            date = self.date.format("%Y-%m-%d"),
        )
    }

    /// Markdown for the section, ending with a newline.
    pub fn render(&self) -> String {
        let branch_lines = if self.branches.is_empty() {
            EMPTY_BRANCHES_PLACEHOLDER.to_string()
        } else {
            self.branches
                .iter()
                .map(|b| format!("- {b}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "{header}\n\n### Ветки\n{branch_lines}\n\n### Описание\n{description}\n",
            header = self.header(),
            description = self.description,
        )
    }
}
