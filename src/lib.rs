// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Cli, Command, FindArgs, OutputFormat, run};
pub use crate::core::finder::find_field_usage;
pub use crate::core::locator::locate_files;
pub use crate::core::matcher::{UsageQuery, find_usages};
pub use crate::core::query::{QUERY_TEMPLATES, QueryTemplate, build_query, in_clause};
pub use error::FieldUsageError;
pub use models::{LocatedFile, MetadataKind, UsageReport};
