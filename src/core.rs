// src/core.rs
pub mod finder;
pub mod locator;
pub mod matcher;
pub mod query;
