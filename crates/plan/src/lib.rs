pub mod calendar;
pub mod passage;
pub mod progress;
pub mod schedule;

mod generate;

pub use calendar::CalendarDay;
pub use generate::*;
pub use passage::{PassageGroup, describe};
pub use schedule::{ProgressReport, ScheduleKind, ScheduleStatus, expected_day, status};
