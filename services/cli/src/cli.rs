use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use safe_scan::assessment::{AnswerValue, StatusFilter};
use safe_scan::config::AppConfig;
use safe_scan::error::AppError;
use safe_scan::telemetry;
use tracing::debug;

use crate::commands::{run_assess, run_checklist, run_clear, run_dashboard, run_export};
use crate::infra::{file_service, parse_answer};

#[derive(Parser, Debug)]
#[command(
    name = "S.A.F.E. School Scan",
    about = "School Assessment For Early-warning: score a room checklist and review saved assessments",
    version
)]
struct Cli {
    /// Override the configured data directory for saved assessments
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the checklist items and their allowed answers
    Checklist,
    /// Score a room checklist and save it to the dashboard
    Assess(AssessArgs),
    /// Show saved assessments, most recent first
    Dashboard(DashboardArgs),
    /// Export saved assessments as CSV
    Export(ExportArgs),
    /// Remove every saved assessment
    Clear(ClearArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// School name
    #[arg(long, default_value = "")]
    pub(crate) school: String,
    /// Room or area being assessed
    #[arg(long, default_value = "")]
    pub(crate) room: String,
    /// Assessor name
    #[arg(long, default_value = "")]
    pub(crate) assessor: String,
    /// Checklist answer as KEY=VALUE (repeatable); unanswered items keep their no-issue default
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, AnswerValue)>,
    /// Reference to a captured photo (repeatable), stored verbatim
    #[arg(long = "photo")]
    pub(crate) photos: Vec<String>,
    /// Free-text observations
    #[arg(long, default_value = "")]
    pub(crate) notes: String,
    /// Print the evaluation without saving it
    #[arg(long)]
    pub(crate) dry_run: bool,
    /// Print the evaluation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// ALL, GREEN, YELLOW or RED
    #[arg(long, default_value = "ALL")]
    pub(crate) status: StatusFilter,
    /// Print the summary and records as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportArgs {
    /// ALL, GREEN, YELLOW or RED
    #[arg(long, default_value = "ALL")]
    pub(crate) status: StatusFilter,
    /// Destination file; defaults to stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ClearArgs {
    /// Confirm removal of all saved assessments
    #[arg(long)]
    pub(crate) yes: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    telemetry::init(&config.telemetry, config.environment)?;
    debug!(?config.environment, data_dir = %config.storage.data_dir.display(), "configuration loaded");

    let service = file_service(&config.storage);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Checklist => run_checklist(&mut out),
        Command::Assess(args) => run_assess(&service, args, &mut out),
        Command::Dashboard(args) => run_dashboard(&service, args, &mut out),
        Command::Export(args) => run_export(&service, args, &mut out),
        Command::Clear(args) => run_clear(&service, args, &mut out),
    }
}
