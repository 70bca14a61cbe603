//! Configuration for the detection engine
//!
//! This module provides the `DetectorConfig` struct and its validating
//! builder. Every field has a default matching the calibration of the
//! built-in rule table.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::DetectorConfigBuilder;
pub use types::{
    DetectorConfig, DEFAULT_CODE_CONFIDENCE_THRESHOLD, DEFAULT_CONFIDENCE_SCALE,
    DEFAULT_FALLBACK_CONFIDENCE, DEFAULT_MAX_REASONS, DEFAULT_MAX_SAMPLE_CHARS,
};
