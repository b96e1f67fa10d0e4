// src/models/usage_report.rs
use serde::Serialize;

use crate::models::MetadataKind;

/// Outcome of a successful `find` run.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub metadata: MetadataKind,
    pub object: String,
    pub field: String,
    pub strict: bool,
    /// Developer names in traversal order.
    pub names: Vec<String>,
    pub count: usize,
    pub query: String,
}

impl UsageReport {
    /// The `<kind>s found: <N>` summary line.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{}s found: {}", self.metadata, self.count)
    }
}
