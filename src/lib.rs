//! Constraint engine for planning oral school exams.
//!
//! Validates a manually built exam plan and derives what the live
//! monitor shows on exam day. It does not search for a plan; it reports
//! why a given one is invalid.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Exam`, `Supervision`, `Teacher`, `Room`,
//!   `Subject`, `PlanningSnapshot`, `MinuteWindow`
//! - **`time`**: Packed slot coordinates, clock strings, exam boundary times
//! - **`checks`**: Hard collisions, soft consistency warnings, teacher availability
//! - **`workload`**: Teacher points and prep room load simulation
//! - **`live`**: Live phase and countdown of a running exam day
//! - **`preflight`**: Day review before export
//! - **`validation`**: Snapshot integrity (duplicate IDs, dangling references)
//! - **`config`**: Tunable thresholds
//!
//! # Architecture
//!
//! Every function is pure and synchronous: it reads the entity lists passed
//! in and returns a value. The engine holds no state, so callers must pass
//! the latest snapshot on every call and may call from anywhere at once.
//! Results are structured; their `Display` impls produce the German texts
//! shown in the planning UI.

pub mod checks;
pub mod config;
pub mod error;
pub mod live;
pub mod models;
pub mod preflight;
pub mod time;
pub mod validation;
pub mod workload;

pub use error::PlanningError;
