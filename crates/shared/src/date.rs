use time::{Date, Weekday};

pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Moves at least one calendar day forward, then keeps going while the date
/// falls on a weekend and weekends are excluded.
pub fn next_reading_day(date: Date, include_weekends: bool) -> crate::Result<Date> {
    let mut next = date;

    loop {
        next = match next.next_day() {
            Some(next) => next,
            None => crate::invalid!("date out of range after {date}"),
        };

        if include_weekends || !is_weekend(next) {
            return Ok(next);
        }
    }
}

/// Advances `start` by `days` reading days.
pub fn add_reading_days(start: Date, days: u32, include_weekends: bool) -> crate::Result<Date> {
    let mut date = start;

    for _ in 0..days {
        date = next_reading_day(date, include_weekends)?;
    }

    Ok(date)
}

/// Counts reading days in `start..=end`. Returns 0 when `end` is before `start`.
pub fn reading_days_between(start: Date, end: Date, include_weekends: bool) -> u32 {
    let mut days = 0;
    let mut current = Some(start);

    while let Some(date) = current.filter(|d| *d <= end) {
        if include_weekends || !is_weekend(date) {
            days += 1;
        }

        current = date.next_day();
    }

    days
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}
