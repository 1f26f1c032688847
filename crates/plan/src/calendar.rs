use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: Date,
    pub day: u8,
    pub in_month: bool,
    pub is_today: bool,
    pub is_completed: bool,
    pub is_past: bool,
    pub is_before_start: bool,
}

/// Whole weeks (Sunday to Saturday) covering `month` of `year`.
pub fn month(
    year: i32,
    month: Month,
    today: Date,
    start: Option<Date>,
    completed: &HashSet<Date>,
) -> lectio_shared::Result<Vec<CalendarDay>> {
    let first = Date::from_calendar_date(year, month, 1)?;
    let last = last_day_of_month(first)?;

    let lead = i64::from(first.weekday().number_days_from_sunday());
    let trail = 6 - i64::from(last.weekday().number_days_from_sunday());

    let (Some(grid_start), Some(grid_end)) = (
        first.checked_sub(Duration::days(lead)),
        last.checked_add(Duration::days(trail)),
    ) else {
        lectio_shared::invalid!("{month} {year} is outside the supported calendar");
    };

    let mut days = Vec::with_capacity(42);
    let mut current = Some(grid_start);

    while let Some(date) = current.filter(|d| *d <= grid_end) {
        days.push(CalendarDay {
            date,
            day: date.day(),
            in_month: date.month() == month,
            is_today: date == today,
            is_completed: completed.contains(&date),
            is_past: date < today,
            is_before_start: start.is_some_and(|start| date < start),
        });

        current = date.next_day();
    }

    Ok(days)
}

fn last_day_of_month(first: Date) -> lectio_shared::Result<Date> {
    let (year, month) = match first.month() {
        Month::December => (first.year() + 1, Month::January),
        month => (first.year(), month.next()),
    };

    match Date::from_calendar_date(year, month, 1)?.previous_day() {
        Some(last) => Ok(last),
        None => lectio_shared::invalid!("no last day for month starting {first}"),
    }
}
