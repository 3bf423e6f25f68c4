use std::{fs, io::ErrorKind, path::Path};

use crate::{ChangelogError, Result};

/// Read the new version from `path`, trimmed.
pub fn read_version(path: &Path) -> Result<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ChangelogError::VersionFileMissing(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let version = text.trim();
    if version.is_empty() {
        return Err(ChangelogError::VersionFileEmpty(path.to_path_buf()));
    }
    Ok(version.to_string())
}

/// Read the release description. A missing file counts as empty.
pub fn read_description(path: &Path) -> Result<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let description = text.trim();
    if description.is_empty() {
        return Err(ChangelogError::DescriptionMissing(path.to_path_buf()));
    }
    Ok(description.to_string())
}
