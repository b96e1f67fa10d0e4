// src/core/matcher.rs
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::core::locator::ensure_exists;
use crate::error::{FieldUsageError, Result};
use crate::models::{LocatedFile, MetadataKind};

/// The object field being searched for and how strictly to match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageQuery {
    pub object: String,
    pub field: String,
    pub strict: bool,
}

impl UsageQuery {
    #[must_use]
    pub fn new(object: impl Into<String>, field: impl Into<String>, strict: bool) -> Self {
        Self {
            object: object.into(),
            field: field.into(),
            strict,
        }
    }

    /// Tags that place `<object>.<field>` in a filter column or a grouping
    /// column of a report or dashboard.
    #[must_use]
    pub fn structural_markers(&self) -> [String; 2] {
        let qualified = format!("{}.{}", self.object, self.field);
        [
            format!("<column>{qualified}</column>"),
            format!("<groupingColumn>{qualified}</groupingColumn>"),
        ]
    }

    /// Decides whether raw file `content` uses the field.
    ///
    /// The field name must appear anywhere in the text. In strict mode one of
    /// the [`structural_markers`](Self::structural_markers) must appear as
    /// well.
    #[must_use]
    pub fn is_used_in(&self, content: &str) -> bool {
        if !content.contains(&self.field) {
            return false;
        }
        if !self.strict {
            return true;
        }
        self.structural_markers()
            .iter()
            .any(|marker| content.contains(marker.as_str()))
    }
}

/// Filters located files down to those that use the field, returning their
/// developer names in the order the files were given.
///
/// An empty result is not an error here.
///
/// # Errors
///
/// * [`FieldUsageError::InvalidPath`] if a file disappeared after it was
///   located
/// * [`FieldUsageError::Io`] if a file cannot be read
pub fn find_usages(
    files: Vec<LocatedFile>,
    query: &UsageQuery,
    kind: MetadataKind,
) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for file in files {
        let content = read_content(&file.path)?;
        if query.is_used_in(&content) {
            debug!(file = %file.name, "field is used");
            names.push(file.into_developer_name(kind));
        } else {
            trace!(file = %file.name, "field not used");
        }
    }

    Ok(names)
}

/// Reads a whole file as text. Invalid UTF-8 is replaced rather than
/// rejected.
fn read_content(path: &Path) -> Result<String> {
    ensure_exists(path)?;
    let bytes = fs::read(path).map_err(|source| FieldUsageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
