use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lectio::commands;
use time::{Date, Month, OffsetDateTime};

/// lectio - Bible reading plans
#[derive(Parser)]
#[command(name = "lectio")]
#[command(about = "Generate and follow calendar based Bible reading plans", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a reading plan as JSON
    Generate {
        /// First day of the plan (defaults to tomorrow)
        #[arg(long, value_parser = commands::parse_date)]
        start: Option<Date>,

        /// Plan length in months (overrides config file)
        #[arg(long)]
        months: Option<f64>,

        /// OT, NT or BOTH (overrides config file)
        #[arg(long)]
        testament: Option<String>,

        /// Read on Saturdays and Sundays (overrides config file)
        #[arg(long)]
        weekends: Option<bool>,

        /// Write the plan to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show whether a reader is ahead of or behind schedule
    Status {
        /// First day of the plan
        #[arg(long, value_parser = commands::parse_date)]
        start: Date,

        /// Day the reader is currently on
        #[arg(long)]
        current_day: u32,

        /// Date to evaluate against (defaults to today)
        #[arg(long, value_parser = commands::parse_date)]
        today: Option<Date>,

        /// Plan length in months (overrides config file)
        #[arg(long)]
        months: Option<f64>,

        /// Read on Saturdays and Sundays (overrides config file)
        #[arg(long)]
        weekends: Option<bool>,
    },
    /// Print passage descriptions from a generated plan
    Describe {
        /// Plan file produced by `generate`
        #[arg(long)]
        plan: PathBuf,

        /// Only this day
        #[arg(long)]
        day: Option<u32>,
    },
    /// Print a month calendar for a generated plan
    Calendar {
        /// Plan file produced by `generate`
        #[arg(long)]
        plan: PathBuf,

        #[arg(long)]
        year: i32,

        /// Month number, 1 to 12
        #[arg(long)]
        month: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = lectio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    lectio::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        config.logging.format,
    )?;

    let today = OffsetDateTime::now_utc().date();

    match cli.command {
        Commands::Generate {
            start,
            months,
            testament,
            weekends,
            output,
        } => {
            let start_date = match start {
                Some(start) => start,
                None => today
                    .next_day()
                    .ok_or_else(|| anyhow::anyhow!("no day after {today}"))?,
            };
            let settings = commands::plan_settings(
                start_date,
                months.unwrap_or(config.plan.duration_months),
                testament.as_deref().unwrap_or(&config.plan.testament),
                weekends.unwrap_or(config.plan.include_weekends),
            )?;

            let (_, json) = commands::generate(&settings, output.as_deref())?;
            if output.is_none() {
                println!("{json}");
            }
        }
        Commands::Status {
            start,
            current_day,
            today: evaluated_on,
            months,
            weekends,
        } => {
            let settings = commands::plan_settings(
                start,
                months.unwrap_or(config.plan.duration_months),
                &config.plan.testament,
                weekends.unwrap_or(config.plan.include_weekends),
            )?;
            let progress = commands::progress_at(&settings, current_day)?;

            let report = lectio_plan::ProgressReport::evaluate(
                &settings,
                &progress,
                evaluated_on.unwrap_or(today),
            )?;
            print!("{}", commands::render_report(&report));
        }
        Commands::Describe { plan, day } => {
            let plan = commands::load_plan(&plan)?;
            print!("{}", commands::render_days(&plan, day)?);
        }
        Commands::Calendar { plan, year, month } => {
            let plan = commands::load_plan(&plan)?;
            let month = Month::try_from(month)?;
            let start = plan.first().map(|d| d.scheduled_date);
            let completed = lectio_plan::progress::completed_dates(&plan);

            let days = lectio_plan::calendar::month(year, month, today, start, &completed)?;
            println!("{month} {year}");
            print!("{}", commands::render_calendar(&days));
        }
    }

    Ok(())
}
