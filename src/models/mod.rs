//! Exam planning domain models.
//!
//! Plain data records handed in by the surrounding application. The
//! engine only reads them; ids are weak references resolved by equality.
//!
//! # Domain Mappings
//!
//! | abitur-schedule | Scheduling term | Notes |
//! |-----------------|-----------------|-------|
//! | Exam | Activity | fixed 30 min, packed start coordinate |
//! | Teacher | Human resource | three roles per exam |
//! | Room | Primary resource | exam, prep, waiting, station |
//! | Supervision | Shift assignment | `HH:mm` start, station lane |

mod calendar;
mod exam;
mod room;
mod snapshot;
mod subject;
mod supervision;
mod teacher;

pub use calendar::MinuteWindow;
pub use exam::{Exam, ExamStatus};
pub use room::{Room, RoomType};
pub use snapshot::PlanningSnapshot;
pub use subject::{find_by_name as find_subject_by_name, Subject};
pub use supervision::Supervision;
pub use teacher::Teacher;
