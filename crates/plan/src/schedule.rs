use std::fmt;

use lectio_shared::{PlanSettings, ProgressState, reading_days_between};
use serde::{Deserialize, Serialize};
use strum::Display;
use time::Date;

/// Day number the reader should be on by `today`.
///
/// Counts every reading day in `start..=today` with an exact calendar walk,
/// so the start date itself is day 1 unless it is a skipped weekend. Returns 0
/// before the plan starts.
pub fn expected_day(start: Date, today: Date, include_weekends: bool) -> u32 {
    if today < start {
        return 0;
    }

    reading_days_between(start, today, include_weekends)
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleKind {
    Ahead,
    Behind,
    OnTrack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatus {
    pub kind: ScheduleKind,
    pub days: u64,
}

impl ScheduleStatus {
    pub fn is_on_track(&self) -> bool {
        self.kind == ScheduleKind::OnTrack
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.days == 1 { "day" } else { "days" };

        match self.kind {
            ScheduleKind::Ahead => write!(f, "{} {unit} ahead", self.days),
            ScheduleKind::Behind => write!(f, "{} {unit} behind", self.days),
            ScheduleKind::OnTrack => f.write_str("On track"),
        }
    }
}

/// Compares the reader's current day against the expected one.
pub fn status(current_day: i64, expected_day: i64) -> ScheduleStatus {
    // i128 keeps the difference of any two i64 values exact.
    let difference = i128::from(current_day) - i128::from(expected_day);
    let days = u64::try_from(difference.unsigned_abs()).unwrap_or(u64::MAX);

    let kind = match difference {
        d if d > 0 => ScheduleKind::Ahead,
        d if d < 0 => ScheduleKind::Behind,
        _ => ScheduleKind::OnTrack,
    };

    ScheduleStatus { kind, days }
}

/// Everything the dashboard shows about a reader's progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub current_day: u32,
    pub expected_day: u32,
    pub status: ScheduleStatus,
    pub total_days: u32,
    pub completed_days: usize,
    pub remaining_days: usize,
    pub percent_complete: u8,
}

impl ProgressReport {
    pub fn evaluate(
        settings: &PlanSettings,
        progress: &ProgressState,
        today: Date,
    ) -> lectio_shared::Result<Self> {
        let total_days = settings.total_days()?;
        let expected_day = expected_day(settings.start_date, today, settings.include_weekends);
        let completed_days = progress.completed_count();

        Ok(Self {
            current_day: progress.current_day,
            expected_day,
            status: status(progress.current_day.into(), expected_day.into()),
            total_days,
            completed_days,
            remaining_days: (total_days as usize).saturating_sub(completed_days),
            percent_complete: percent_complete(completed_days, total_days),
        })
    }
}

/// Share of the plan completed, rounded and capped at 100.
pub fn percent_complete(completed_days: usize, total_days: u32) -> u8 {
    if total_days == 0 {
        return 0;
    }

    let percent = (completed_days as f64 / f64::from(total_days) * 100.0).round();

    percent.min(100.0) as u8
}
