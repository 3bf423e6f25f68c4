//! Release changelog generator.
//!
//! Reads the new version and a hand-written description, discovers the
//! branches that went into the release and prepends a section to a markdown
//! changelog.

pub mod branches;
pub mod cli;
pub mod document;
pub mod entry;
pub mod error;
pub mod generate;
pub mod inputs;

pub use error::{ChangelogError, Result};
