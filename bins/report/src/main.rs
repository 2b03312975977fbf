//! Leadcost report CLI
//!
//! Loads expense and lead records from JSON files, runs the allocation
//! engine, and prints the report as JSON.
//!
//! Usage: leadcost --expenses expenses.json --leads leads.json --month 2024-01

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use leadcost_core::period::QueryWindow;
use leadcost_core::records::{ExpenseRecord, LeadRecord};
use leadcost_core::report::ReportService;
use leadcost_core::validation::{validate_expenses, validate_lead_coverage, validate_leads};
use leadcost_shared::types::{ProjectFilter, YearMonth};
use leadcost_shared::{AppConfig, AppError, AppResult};

/// Allocate monthly marketing expenses to a reporting window.
#[derive(Debug, Parser)]
#[command(name = "leadcost", version)]
struct Args {
    /// JSON file holding an array of expense records.
    #[arg(long)]
    expenses: PathBuf,

    /// JSON file holding an array of lead records.
    #[arg(long)]
    leads: PathBuf,

    /// Project to report on, or "all". Defaults to `report.default_project`.
    #[arg(long, conflicts_with = "by_project")]
    project: Option<String>,

    /// First day of an explicit window (YYYY-MM-DD).
    #[arg(long, requires = "to", conflicts_with_all = ["month", "year"])]
    from: Option<NaiveDate>,

    /// Last day of an explicit window (YYYY-MM-DD).
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// A single calendar month (YYYY-MM).
    #[arg(long, conflicts_with = "year")]
    month: Option<YearMonth>,

    /// A whole calendar year.
    #[arg(long)]
    year: Option<i32>,

    /// Sale count to use instead of counting leads flagged as sales.
    #[arg(long, conflicts_with = "by_project")]
    sale_count: Option<u64>,

    /// Print one report per project plus an all-project total.
    #[arg(long)]
    by_project: bool,

    /// Reject leads dated in a month without expenses for their project.
    #[arg(long)]
    strict: bool,

    /// Print unrounded amounts in minor units.
    #[arg(long)]
    raw: bool,
}

impl Args {
    /// Builds the query window. No window flags means all time.
    fn window(&self) -> AppResult<QueryWindow> {
        let window = match (self.from, self.to, self.month, self.year) {
            (Some(start), Some(end), _, _) => QueryWindow::explicit(start, end),
            (_, _, Some(month), _) => QueryWindow::Month { month },
            (_, _, _, Some(year)) => QueryWindow::year(year)?,
            _ => QueryWindow::AllTime,
        };
        Ok(window)
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error [{}]: {err}", err.error_code());
            return ExitCode::from(err.exit_code());
        }
    };

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let (code, kind) = classify(&err);
            error!(code = kind, "Report failed");
            eprintln!("Error [{kind}]: {err:#}");
            ExitCode::from(code)
        }
    }
}

/// Maps a failure to its exit code and machine-readable error code.
///
/// Failures that did not originate as an `AppError` count as internal.
fn classify(err: &anyhow::Error) -> (u8, &'static str) {
    let internal = AppError::Internal(String::new());
    let app = err.downcast_ref::<AppError>().unwrap_or(&internal);
    (app.exit_code(), app.error_code())
}

/// Loads, validates, computes, and renders the report as pretty JSON.
fn run(args: &Args, config: &AppConfig) -> anyhow::Result<String> {
    let expenses: Vec<ExpenseRecord> = read_json(&args.expenses)?;
    let leads: Vec<LeadRecord> = read_json(&args.leads)?;
    info!(
        expenses = expenses.len(),
        leads = leads.len(),
        "Loaded records"
    );

    validate_expenses(&expenses).map_err(AppError::from)?;
    validate_leads(&leads).map_err(AppError::from)?;
    if args.strict {
        validate_lead_coverage(&expenses, &leads).map_err(AppError::from)?;
    }

    let window = args.window()?;
    let scale = config.report.minor_unit_scale;
    let places = config.report.decimal_places;

    if args.by_project {
        let span = info_span!("project_reports", %window);
        let _guard = span.enter();

        let table = ReportService::compute_project_reports(&expenses, &leads, &window);
        info!(
            projects = table.rows.len(),
            total_cost = %table.total.metrics.total_cost,
            "Computed project report table"
        );

        let table = if args.raw {
            table
        } else {
            table
                .present(scale, places)
                .map_err(|e| AppError::Internal(e.to_string()))?
        };
        return render(&table);
    }

    let project = ProjectFilter::from(
        args.project
            .as_deref()
            .unwrap_or(config.report.default_project.as_str()),
    );
    let span = info_span!("expense_report", %project, %window);
    let _guard = span.enter();

    let report = ReportService::compute_expense_report(
        &expenses,
        &leads,
        &project,
        &window,
        args.sale_count,
    );
    for row in &report.months {
        debug!(
            project = %row.project,
            month = %row.month,
            overlap_days = row.overlap_days,
            days_in_month = row.days_in_month,
            fixed_share = %row.fixed_share,
            month_leads = row.month_lead_count,
            window_leads = row.window_lead_count,
            variable_share = %row.variable_share,
            "Allocated month"
        );
    }
    info!(
        start = %report.range.start,
        end = %report.range.end,
        fixed_total = %report.breakdown.fixed_total,
        variable_total = %report.breakdown.variable_total,
        leads = report.metrics.lead_count,
        sales = report.metrics.sale_count,
        cost_per_sale = %report.metrics.cost_per_sale,
        "Computed expense report"
    );

    let report = if args.raw {
        report
    } else {
        report
            .present(scale, places)
            .map_err(|e| AppError::Internal(e.to_string()))?
    };
    render(&report)
}

/// Renders a report as pretty JSON.
fn render<T: serde::Serialize>(report: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report).map_err(|e| AppError::Internal(e.to_string()))?)
}

/// Reads a JSON document from a file.
fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::InvalidInput(e.to_string()))
        .with_context(|| format!("Failed to parse {}", path.display()))
}
