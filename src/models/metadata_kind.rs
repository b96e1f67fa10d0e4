// src/models/metadata_kind.rs
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Category of metadata definition file that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataKind {
    Report,
    Dashboard,
}

impl MetadataKind {
    pub const ALL: [Self; 2] = [Self::Report, Self::Dashboard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Dashboard => "dashboard",
        }
    }

    /// File name suffix of definitions of this kind, e.g. `.report-meta.xml`.
    #[must_use]
    pub fn suffix(self) -> String {
        format!(".{}-meta.xml", self.as_str())
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
