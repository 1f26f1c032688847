use std::collections::HashSet;

use lectio_shared::{ProgressState, ReadingDay};
use time::{Date, OffsetDateTime};

/// Marks `day_number` as read in `plan` and returns the advanced progress.
///
/// Completing a day twice keeps its first timestamp but still moves the
/// progress pointer past it.
pub fn complete(
    plan: &mut [ReadingDay],
    progress: &ProgressState,
    day_number: u32,
    at: OffsetDateTime,
) -> lectio_shared::Result<ProgressState> {
    let Some(day) = plan.iter_mut().find(|day| day.day_number == day_number) else {
        lectio_shared::invalid!("day {day_number} is not part of this plan");
    };

    if day.mark_completed(at) {
        tracing::info!(day_number, passages = day.passages.len(), "Reading day completed");
    } else {
        tracing::debug!(day_number, "Reading day already completed");
    }

    Ok(progress.complete_day(day_number, at))
}

/// Calendar dates on which at least one reading day was completed.
pub fn completed_dates(plan: &[ReadingDay]) -> HashSet<Date> {
    plan.iter()
        .filter_map(|day| day.completed_at.map(|at| at.date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn plan() -> Vec<ReadingDay> {
        vec![
            ReadingDay::new(1, date!(2026 - 01 - 01), vec![]),
            ReadingDay::new(2, date!(2026 - 01 - 02), vec![]),
        ]
    }

    #[test]
    fn complete_marks_day_and_advances() {
        let mut plan = plan();
        let at = datetime!(2026-01-01 21:15:00 UTC);

        let progress = complete(&mut plan, &ProgressState::default(), 1, at).unwrap();

        assert!(plan[0].completed);
        assert_eq!(plan[0].completed_at, Some(at));
        assert!(!plan[1].completed);
        assert_eq!(progress.current_day, 2);
        assert_eq!(progress.completed_days, vec![1]);
    }

    #[test]
    fn complete_unknown_day_is_invalid() {
        let mut plan = plan();
        let at = datetime!(2026-01-01 21:15:00 UTC);

        let err = complete(&mut plan, &ProgressState::default(), 3, at).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn completed_dates_come_from_timestamps() {
        let mut plan = plan();
        let progress = ProgressState::default();
        let progress = complete(&mut plan, &progress, 1, datetime!(2026-01-03 08:00:00 UTC)).unwrap();
        complete(&mut plan, &progress, 2, datetime!(2026-01-03 20:00:00 UTC)).unwrap();

        let dates = completed_dates(&plan);
        assert_eq!(dates.len(), 1);
        assert!(dates.contains(&date!(2026 - 01 - 03)));
    }
}
