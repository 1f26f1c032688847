use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Where a reader is in their plan.
///
/// `current_day` is normally `completed_days.len() + 1`, but nothing here
/// enforces it; the schedule code only reads the pointer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub current_day: u32,
    #[serde(default)]
    pub completed_days: Vec<u32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_read: Option<OffsetDateTime>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            current_day: 1,
            completed_days: Vec::new(),
            last_read: None,
        }
    }
}

impl ProgressState {
    /// State after finishing `day_number` at `at`.
    pub fn complete_day(&self, day_number: u32, at: OffsetDateTime) -> Self {
        let mut completed_days = self.completed_days.to_vec();
        if !completed_days.contains(&day_number) {
            completed_days.push(day_number);
        }

        Self {
            current_day: day_number.saturating_add(1),
            completed_days,
            last_read: Some(at),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed_days.len()
    }

    pub fn is_completed(&self, day_number: u32) -> bool {
        self.completed_days.contains(&day_number)
    }
}
