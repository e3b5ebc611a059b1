//! Per-exam and per-teacher checks.
//!
//! All checks are pure functions over the entity lists passed in. They
//! return structured results; `Display` renders the German UI text.
//!
//! | Check | Strength | Result |
//! |-------|----------|--------|
//! | [`check_collision`] | hard | [`Collision`] |
//! | [`check_consistency`] | soft | [`ConsistencyWarning`] |
//! | [`check_teacher_availability`] | hard | [`BusyReason`] |

mod availability;
mod collision;
mod consistency;

pub use availability::{
    check_teacher_availability, teacher_blocked_periods, teacher_subject_periods,
    AvailabilityQuery, BusyReason,
};
pub use collision::{check_collision, Collision, CollisionKind};
pub use consistency::{check_consistency, ConsistencyWarning};
