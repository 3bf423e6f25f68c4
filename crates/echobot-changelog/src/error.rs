use std::path::PathBuf;

/// Fatal conditions of a changelog run. Each one aborts before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum ChangelogError {
    #[error("version file not found: {}", .0.display())]
    VersionFileMissing(PathBuf),

    #[error("version file {} is empty", .0.display())]
    VersionFileEmpty(PathBuf),

    #[error(
        "Description file is empty. Add release notes to {} before generating changelog.",
        .0.display()
    )]
    DescriptionMissing(PathBuf),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
