// src/core/finder.rs
use std::path::Path;
use tracing::info;

use crate::core::locator::locate_files;
use crate::core::matcher::{UsageQuery, find_usages};
use crate::core::query::build_query;
use crate::error::{FieldUsageError, Result};
use crate::models::{MetadataKind, UsageReport};

/// Runs the whole search: locate candidate files under `root`, keep the ones
/// using the field, and build the query selecting them.
///
/// # Errors
///
/// * [`FieldUsageError::InvalidPath`] / [`FieldUsageError::Io`] from the walk
///   or from reading files
/// * [`FieldUsageError::NoMatches`] when no file uses the field
/// * [`FieldUsageError::UnsupportedKind`] when `kind` has no query template
pub fn find_field_usage(
    root: &Path,
    kind: MetadataKind,
    query: &UsageQuery,
) -> Result<UsageReport> {
    let files = locate_files(root, kind)?;
    let candidates = files.len();

    let names = find_usages(files, query, kind)?;
    if names.is_empty() {
        return Err(FieldUsageError::NoMatches {
            field: query.field.clone(),
            kind,
            strict: query.strict,
        });
    }

    info!(
        candidates,
        matches = names.len(),
        "{}.{} found in {kind} definitions",
        query.object,
        query.field
    );

    let soql = build_query(&names, kind)?;
    Ok(UsageReport {
        metadata: kind,
        object: query.object.clone(),
        field: query.field.clone(),
        strict: query.strict,
        count: names.len(),
        names,
        query: soql,
    })
}
