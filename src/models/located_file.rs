// src/models/located_file.rs
use std::path::PathBuf;

use crate::models::MetadataKind;

/// A candidate definition file found under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile {
    /// File name including its kind suffix.
    pub name: String,
    pub path: PathBuf,
}

impl LocatedFile {
    #[must_use]
    pub const fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }

    /// Consumes the file and returns its developer name, i.e. the file name
    /// with the kind suffix removed.
    #[must_use]
    pub fn into_developer_name(mut self, kind: MetadataKind) -> String {
        let suffix = kind.suffix();
        if self.name.ends_with(&suffix) {
            let stem_len = self.name.len().saturating_sub(suffix.len());
            self.name.truncate(stem_len);
        }
        self.name
    }
}
