use lectio_plan::{ProgressReport, ScheduleKind, calendar, progress};
use lectio_shared::{PlanSettings, ProgressState, TestamentScope};
use time::Month;
use time::macros::{date, datetime};

fn weekday_settings() -> PlanSettings {
    PlanSettings {
        start_date: date!(2026 - 01 - 05),
        duration_months: 12.0,
        scope: TestamentScope::Both,
        include_weekends: false,
    }
}

#[test]
fn reader_falls_behind_over_a_weekend_gap() -> anyhow::Result<()> {
    let settings = weekday_settings();
    let mut plan = lectio_plan::generate(&settings)?;
    let mut state = ProgressState::default();

    state = progress::complete(&mut plan, &state, 1, datetime!(2026-01-05 07:00:00 UTC))?;
    state = progress::complete(&mut plan, &state, 2, datetime!(2026-01-06 07:00:00 UTC))?;

    // Monday the 12th is the sixth weekday of the plan.
    let report = ProgressReport::evaluate(&settings, &state, date!(2026 - 01 - 12))?;

    assert_eq!(report.expected_day, 6);
    assert_eq!(report.current_day, 3);
    assert_eq!(report.status.kind, ScheduleKind::Behind);
    assert_eq!(report.status.to_string(), "3 days behind");
    assert_eq!(report.total_days, 264);
    assert_eq!(report.remaining_days, 262);

    Ok(())
}

#[test]
fn plan_not_started_reports_ahead_of_day_zero() -> anyhow::Result<()> {
    let settings = weekday_settings();
    let report =
        ProgressReport::evaluate(&settings, &ProgressState::default(), date!(2026 - 01 - 01))?;

    assert_eq!(report.expected_day, 0);
    assert_eq!(report.status.kind, ScheduleKind::Ahead);
    assert_eq!(report.status.to_string(), "1 day ahead");
    assert_eq!(report.percent_complete, 0);

    Ok(())
}

#[test]
fn completed_days_show_on_the_calendar() -> anyhow::Result<()> {
    let settings = weekday_settings();
    let mut plan = lectio_plan::generate(&settings)?;
    let state = progress::complete(
        &mut plan,
        &ProgressState::default(),
        1,
        datetime!(2026-01-05 07:00:00 UTC),
    )?;
    progress::complete(&mut plan, &state, 2, datetime!(2026-01-07 19:00:00 UTC))?;

    let completed = progress::completed_dates(&plan);
    let days = calendar::month(
        2026,
        Month::January,
        date!(2026 - 01 - 08),
        Some(settings.start_date),
        &completed,
    )?;

    let marked = days
        .iter()
        .filter(|d| d.is_completed)
        .map(|d| d.date)
        .collect::<Vec<_>>();

    assert_eq!(marked, vec![date!(2026 - 01 - 05), date!(2026 - 01 - 07)]);

    Ok(())
}

#[test]
fn describe_current_day() -> anyhow::Result<()> {
    let plan = lectio_plan::generate(&PlanSettings {
        start_date: date!(2026 - 01 - 01),
        duration_months: 6.0,
        scope: TestamentScope::New,
        include_weekends: true,
    })?;

    // 260 chapters over 183 days: 77 days of two, then one a day.
    assert_eq!(lectio_plan::describe(&plan[0].passages), "Matthew 1-2");
    assert_eq!(lectio_plan::describe(&plan[14].passages), "Mark 1-2");
    assert_eq!(lectio_plan::describe(&plan[13].passages), "Matthew 27-28");

    Ok(())
}
