// src/core/query.rs
use crate::error::{FieldUsageError, Result};
use crate::models::MetadataKind;

/// Columns, sObject and ordering used to build the SOQL for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate {
    pub kind: MetadataKind,
    pub columns: &'static [&'static str],
    pub sobject: &'static str,
    pub order_by: &'static str,
}

pub const QUERY_TEMPLATES: &[QueryTemplate] = &[
    QueryTemplate {
        kind: MetadataKind::Report,
        columns: &["Id", "DeveloperName", "LastRunDate"],
        sobject: "Report",
        order_by: "LastRunDate",
    },
    QueryTemplate {
        kind: MetadataKind::Dashboard,
        columns: &["Id", "DeveloperName", "LastViewedDate"],
        sobject: "Dashboard",
        order_by: "LastViewedDate",
    },
];

/// Looks up the query template registered for `kind`.
///
/// # Errors
///
/// Returns [`FieldUsageError::UnsupportedKind`] when no template exists.
pub fn template_for(kind: MetadataKind) -> Result<&'static QueryTemplate> {
    QUERY_TEMPLATES
        .iter()
        .find(|template| template.kind == kind)
        .ok_or(FieldUsageError::UnsupportedKind { kind })
}

impl QueryTemplate {
    #[must_use]
    pub fn render(&self, in_clause: &str) -> String {
        format!(
            "SELECT {} FROM {} WHERE DeveloperName IN \n{in_clause}\nORDER BY {} DESC",
            self.columns.join(", "),
            self.sobject,
            self.order_by,
        )
    }
}

/// Formats names as a SOQL `IN` list: `('A','B')`.
#[must_use]
pub fn in_clause<S: AsRef<str>>(names: &[S]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| format!("'{}'", escape_literal(name.as_ref())))
        .collect();
    format!("({})", quoted.join(","))
}

/// Escapes a value for use inside a single-quoted SOQL string literal.
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the SOQL query selecting the given developer names.
///
/// # Errors
///
/// Returns [`FieldUsageError::UnsupportedKind`] when `kind` has no template.
pub fn build_query<S: AsRef<str>>(names: &[S], kind: MetadataKind) -> Result<String> {
    let template = template_for(kind)?;
    Ok(template.render(&in_clause(names)))
}
