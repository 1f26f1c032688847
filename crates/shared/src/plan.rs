use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use validator::Validate;

use crate::{ChapterRef, TestamentScope};

/// Average calendar days per month used to size a plan that reads every day.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Average weekdays per month used to size a weekday-only plan.
pub const WEEKDAYS_PER_MONTH: f64 = 22.0;

/// Longest plan accepted, in months.
pub const MAX_DURATION_MONTHS: f64 = 120.0;

/// Approximate number of reading days in `duration_months`.
///
/// This is deliberately not an exact calendar walk; scheduled dates are laid
/// out with [`crate::next_reading_day`] and may drift from this count.
pub fn total_reading_days(duration_months: f64, include_weekends: bool) -> i64 {
    let per_month = if include_weekends {
        DAYS_PER_MONTH
    } else {
        WEEKDAYS_PER_MONTH
    };

    (duration_months * per_month).round() as i64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSettings {
    pub start_date: Date,
    pub duration_months: f64,
    #[serde(default)]
    pub scope: TestamentScope,
    pub include_weekends: bool,
}

impl PlanSettings {
    /// Number of days the generated plan will contain.
    pub fn total_days(&self) -> crate::Result<u32> {
        if !self.duration_months.is_finite() || self.duration_months <= 0.0 {
            crate::invalid!(
                "duration must be a positive number of months, got {}",
                self.duration_months
            );
        }

        if self.duration_months > MAX_DURATION_MONTHS {
            crate::invalid!(
                "duration must be at most {MAX_DURATION_MONTHS} months, got {}",
                self.duration_months
            );
        }

        let total = total_reading_days(self.duration_months, self.include_weekends);
        if total < 1 {
            crate::invalid!(
                "{} months is too short to schedule a single reading day",
                self.duration_months
            );
        }

        match u32::try_from(total) {
            Ok(total) => Ok(total),
            Err(_) => crate::invalid!("{} months is too long", self.duration_months),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.total_days().map(|_| ())
    }
}

/// Raw onboarding form values.
#[derive(Validate, Clone, Debug, Deserialize)]
pub struct PlanInput {
    pub start_date: Date,
    #[validate(range(min = 1.0, max = 120.0, message = "Duration must be between 1 and 120 months"))]
    pub duration_months: f64,
    pub testament: String,
    pub include_weekends: bool,
}

impl PlanInput {
    pub fn into_settings(self) -> crate::Result<PlanSettings> {
        self.validate()?;

        let settings = PlanSettings {
            start_date: self.start_date,
            duration_months: self.duration_months,
            scope: TestamentScope::parse(&self.testament)?,
            include_weekends: self.include_weekends,
        };
        settings.validate()?;

        Ok(settings)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingDay {
    pub day_number: u32,
    pub scheduled_date: Date,
    pub passages: Vec<ChapterRef>,
    pub completed: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl ReadingDay {
    pub fn new(day_number: u32, scheduled_date: Date, passages: Vec<ChapterRef>) -> Self {
        Self {
            day_number,
            scheduled_date,
            passages,
            completed: false,
            completed_at: None,
        }
    }

    /// Flags the day as read. Completion is one-way: returns `false` and keeps
    /// the original timestamp when the day was already completed.
    pub fn mark_completed(&mut self, at: OffsetDateTime) -> bool {
        if self.completed {
            return false;
        }

        self.completed = true;
        self.completed_at = Some(at);

        true
    }
}
