//! Domain layer for the Korat tilt-angle tracker report.
//!
//! Holds the tracker name transformer, the classifier, time-window helpers,
//! run settings and the shared error type.

pub mod classifier;
pub mod error;
pub mod models;
pub mod naming;
pub mod settings;
pub mod time_utils;

pub use error::{Result, TiltError};
