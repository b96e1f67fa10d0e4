// src/models.rs
mod located_file;
mod metadata_kind;
mod usage_report;

pub use located_file::LocatedFile;
pub use metadata_kind::MetadataKind;
pub use usage_report::UsageReport;
