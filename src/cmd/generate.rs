use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use clap::Args;

use crate::context::AppContext;
use crate::domain::{DowntimeWindow, GenerationOutcome, ReleaseForm};
use crate::error::{AppError, AppResult};
use crate::session::SessionState;
use crate::workflow::generate::run_generation;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Backend version number (e.g., 4.3.1).
    #[arg(long, value_name = "VERSION")]
    pub backend: Option<String>,

    /// Web platform version number.
    #[arg(long, value_name = "VERSION")]
    pub web: Option<String>,

    /// Mobile app version number.
    #[arg(long, value_name = "VERSION")]
    pub mobile: Option<String>,

    /// Native build version; when set, the announcement reminds mobile users
    /// to update their app.
    #[arg(long, value_name = "VERSION")]
    pub native: Option<String>,

    /// Release date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,

    /// Release time, 24-hour clock (HH:MM).
    #[arg(long, value_parser = parse_time)]
    pub time: NaiveTime,

    /// Downtime window: none, 15min, 30min, 1hour, or custom.
    #[arg(long, default_value = "none")]
    pub downtime: String,

    /// Read ticket details from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    pub notes: Option<PathBuf>,
}

pub async fn run(ctx: &AppContext, args: GenerateArgs) -> AppResult<GenerationOutcome> {
    let form = build_form(args)?;
    let mut session = SessionState::with_form(form);

    match run_generation(ctx, &mut session).await? {
        Some(outcome) => Ok(outcome),
        // A freshly seeded session is never mid-generation.
        None => Err(AppError::InvalidForm(
            "generation already in flight".to_string(),
        )),
    }
}

/// Composes the prompt through the same session gate as `run`, without
/// touching the network.
pub fn preview(args: GenerateArgs) -> AppResult<String> {
    let form = build_form(args)?;
    let mut session = SessionState::with_form(form);

    match session.begin_generation() {
        Some(request) => Ok(request.prompt().to_string()),
        None => {
            let missing = session.form().missing_required().join(", ");
            Err(AppError::InvalidForm(format!(
                "missing required fields: {missing}"
            )))
        }
    }
}

fn build_form(args: GenerateArgs) -> AppResult<ReleaseForm> {
    let ticket_details = read_ticket_details(args.notes.as_deref())?;
    Ok(ReleaseForm {
        backend_version: args.backend,
        web_version: args.web,
        mobile_version: args.mobile,
        native_version: args.native,
        release_date: Some(args.date),
        release_time: Some(args.time),
        ticket_details,
        downtime: DowntimeWindow::parse(&args.downtime),
    })
}

fn read_ticket_details(notes: Option<&Path>) -> AppResult<String> {
    match notes {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter ticket details, then press Ctrl-D:");
            }
            let mut details = String::new();
            stdin.read_to_string(&mut details)?;
            Ok(details)
        }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("expected 24-hour HH:MM, got '{value}'"))
}
