//! Workload accounting and prep room load.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Points | exams with any role + supervision hours |
//! | Outlier | points > factor × average of active teachers |
//! | Prep peak | max students preparing in one room at once |

mod points;
mod prep_load;

pub use points::{calculate_teacher_points, imbalance_outliers, workload_table, TeacherWorkload};
pub use prep_load::{calculate_prep_load, PrepLoad};
