use lectio_shared::{PlanSettings, ReadingDay, next_reading_day};

/// Splits the chapters of `settings.scope` into dated daily readings.
///
/// Chapters are handed out in canonical order as contiguous runs of
/// `N / total_days`, with the first `N % total_days` days taking one extra.
/// Day 1 is always the start date, even on a weekend when weekends are
/// excluded; every later day moves to the next reading day.
pub fn generate(settings: &PlanSettings) -> lectio_shared::Result<Vec<ReadingDay>> {
    let total_days = settings.total_days()?;
    let chapters = lectio_canon::chapters(settings.scope);

    let days = total_days as usize;
    let base = chapters.len() / days;
    let remainder = chapters.len() - base * days;

    tracing::debug!(
        scope = %settings.scope,
        start = %settings.start_date,
        total_days,
        chapters = chapters.len(),
        base,
        remainder,
        "Generating reading plan"
    );

    let mut remaining = chapters.iter();
    let mut scheduled_date = settings.start_date;
    let mut plan = Vec::new();

    for day_number in 1..=total_days {
        if day_number > 1 {
            scheduled_date = next_reading_day(scheduled_date, settings.include_weekends)?;
        }

        let take = if (day_number as usize) <= remainder {
            base + 1
        } else {
            base
        };

        // Runs dry only when rounding produced more days than chapters.
        let passages = remaining.by_ref().take(take).cloned().collect();

        plan.push(ReadingDay::new(day_number, scheduled_date, passages));
    }

    Ok(plan)
}
