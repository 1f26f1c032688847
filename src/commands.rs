use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use lectio_plan::{CalendarDay, ProgressReport};
use lectio_shared::{PlanInput, PlanSettings, ProgressState, ReadingDay};
use time::Date;
use time::macros::format_description;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("invalid date {value:?}: {e}"))
}

/// Builds plan settings from command line and configuration values, holding
/// them to the same 1 to 120 month range as the onboarding form.
pub fn plan_settings(
    start_date: Date,
    duration_months: f64,
    testament: &str,
    include_weekends: bool,
) -> lectio_shared::Result<PlanSettings> {
    PlanInput {
        start_date,
        duration_months,
        testament: testament.to_owned(),
        include_weekends,
    }
    .into_settings()
}

/// Progress of a reader on `current_day` who has read every earlier day.
pub fn progress_at(settings: &PlanSettings, current_day: u32) -> Result<ProgressState> {
    let total_days = settings.total_days()?;

    // One past the last day means the plan is finished.
    let last = total_days.saturating_add(1);
    if current_day == 0 || current_day > last {
        anyhow::bail!("current day must be between 1 and {last}, got {current_day}");
    }

    Ok(ProgressState {
        current_day,
        completed_days: (1..current_day).collect(),
        last_read: None,
    })
}

/// Generates a plan and writes it as JSON to `output`, or returns the JSON
/// text when no path is given.
pub fn generate(settings: &PlanSettings, output: Option<&Path>) -> Result<(Vec<ReadingDay>, String)> {
    let plan = lectio_plan::generate(settings)?;
    let json = serde_json::to_string_pretty(&plan)?;

    if let Some(path) = output {
        std::fs::write(path, &json)
            .with_context(|| format!("failed to write plan to {}", path.display()))?;
    }

    let chapters = plan.iter().map(|d| d.passages.len()).sum::<usize>();
    tracing::info!(
        days = plan.len(),
        chapters,
        start = %settings.start_date,
        end = %plan.last().map(|d| d.scheduled_date).unwrap_or(settings.start_date),
        "Reading plan generated"
    );

    Ok((plan, json))
}

pub fn load_plan(path: &Path) -> Result<Vec<ReadingDay>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a reading plan", path.display()))
}

/// One line per day: number, date and passages.
pub fn render_days(plan: &[ReadingDay], day_number: Option<u32>) -> Result<String> {
    let days = match day_number {
        Some(n) => match plan.iter().find(|d| d.day_number == n) {
            Some(day) => std::slice::from_ref(day),
            None => anyhow::bail!("day {n} is not part of this plan"),
        },
        None => plan,
    };

    let mut out = String::new();
    for day in days {
        let mark = if day.completed { "x" } else { " " };
        writeln!(
            out,
            "[{mark}] Day {:>3}  {}  {}",
            day.day_number,
            day.scheduled_date,
            lectio_plan::describe(&day.passages)
        )?;
    }

    Ok(out)
}

pub fn render_report(report: &ProgressReport) -> String {
    format!(
        "Day {} of {} (expected day {}): {}\n{} completed, {} remaining, {}% complete\n",
        report.current_day,
        report.total_days,
        report.expected_day,
        report.status,
        report.completed_days,
        report.remaining_days,
        report.percent_complete
    )
}

/// Text month grid, Sunday first. Completed days are marked `*`, today `>`.
pub fn render_calendar(days: &[CalendarDay]) -> String {
    let mut out = String::from(" Su  Mo  Tu  We  Th  Fr  Sa\n");

    for week in days.chunks(7) {
        let line = week
            .iter()
            .map(|d| {
                if !d.in_month {
                    "    ".to_string()
                } else {
                    let mark = match (d.is_today, d.is_completed) {
                        (_, true) => '*',
                        (true, false) => '>',
                        _ => ' ',
                    };
                    format!("{mark}{:>2} ", d.day)
                }
            })
            .collect::<String>();

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
