//! Condition weighting and day-summary aggregation.
//!
//! This module validates a batch of hourly observations, boosts condition
//! weights whose precipitation or wind thresholds the batch meets, scores
//! each observed condition, resolves the dominant and secondary conditions,
//! and renders a one-line description.

pub mod aggregate;
pub mod analyzer;
pub mod describe;
pub mod types;
pub mod validate;
pub mod weights;
