//! Data layer for the Korat tilt-angle tracker report.
//!
//! Loads the daily CSV export, applies the afternoon time filter, classifies
//! and groups tracker columns, and writes the two XLSX reports.

pub mod filter;
pub mod reader;
pub mod summary;
pub mod writer;

pub use tilt_core as core;
