//! Migrates legacy flat crater config files to the grouped schema.

pub mod document;
pub mod error;
pub mod files;
pub mod migrate;
pub mod report;

pub use migrate::migrate;
