//! Tunable thresholds of the engine.
//!
//! Grid geometry lives in [`crate::time`] because it defines the stored
//! coordinate format. The values here are planning policy and may differ
//! between schools. Every field has a default, so a partial JSON document
//! (or none at all) is a valid configuration.

use serde::Deserialize;

use crate::error::PlanningError;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Teacher availability rules.
    pub availability: AvailabilityConfig,
    /// Preflight review thresholds.
    pub preflight: PreflightConfig,
    /// Live monitor display.
    pub live: LiveConfig,
}

/// Teacher availability rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Minutes kept free before and after each exam a teacher sits in.
    pub exam_buffer_minutes: i32,
}

/// Preflight review thresholds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    /// A teacher is an outlier above `imbalance_factor × average` points.
    pub imbalance_factor: f64,
}

/// Live monitor display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LiveConfig {
    /// Countdowns appear this many minutes before the exam starts.
    pub countdown_horizon_minutes: i64,
    /// Countdowns disappear this many minutes after the exam started.
    pub countdown_grace_minutes: i64,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            exam_buffer_minutes: 60,
        }
    }
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            imbalance_factor: 1.8,
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            countdown_horizon_minutes: 60,
            countdown_grace_minutes: 30,
        }
    }
}

impl PlanningConfig {
    /// Parses a configuration from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PlanningError> {
        Ok(serde_json::from_str(json)?)
    }
}
