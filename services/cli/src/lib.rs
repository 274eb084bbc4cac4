mod cli;
mod commands;
mod infra;

use safe_scan::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
