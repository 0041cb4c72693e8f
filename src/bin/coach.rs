//! Coach CLI - Command-line interface for CoverCoach
//!
//! Commands:
//! - metrics: Compute performance scores from a practice log
//! - plan: Generate a weekly training plan from a profile
//! - feedback: Generate coaching feedback from a profile and log
//! - validate: Validate a practice log file

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use covercoach::{
    catalog, FeedbackGenerator, MetricsEngine, PlanGenerator, ProgressEntry, User, COACH_VERSION,
};

/// Coach - cricket training analytics and plan generation
#[derive(Parser)]
#[command(name = "coach")]
#[command(version = COACH_VERSION)]
#[command(about = "Turn a practice log into scores, feedback, and a weekly plan", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute performance metrics from a practice log
    Metrics {
        /// Practice log, one JSON entry per line (use - for stdin)
        #[arg(short, long)]
        log: PathBuf,
    },

    /// Generate a weekly training plan from a user profile
    Plan {
        /// User profile JSON file (use - for stdin)
        #[arg(short, long)]
        profile: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate coaching feedback from a profile and practice log
    Feedback {
        /// User profile JSON file
        #[arg(short, long)]
        profile: PathBuf,

        /// Practice log, one JSON entry per line (use - for stdin)
        #[arg(short, long)]
        log: PathBuf,

        /// Generation date (YYYY-MM-DD, defaults to today); drives quote selection
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Validate a practice log file
    Validate {
        /// Practice log, one JSON entry per line (use - for stdin)
        #[arg(short, long)]
        log: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Metrics { log } => cmd_metrics(&log),
        Commands::Plan { profile, output } => cmd_plan(&profile, output.as_deref()),
        Commands::Feedback { profile, log, date } => cmd_feedback(&profile, &log, date),
        Commands::Validate { log } => cmd_validate(&log),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_metrics(log: &Path) -> Result<(), String> {
    let entries = read_log(log)?;
    let metrics = MetricsEngine::compute(&entries);
    let json = serde_json::to_string_pretty(&metrics).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn cmd_plan(profile: &Path, output: Option<&Path>) -> Result<(), String> {
    let user = read_profile(profile)?;
    let plan = PlanGenerator::generate(&user, &catalog()).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&plan).map_err(|e| e.to_string())?;
    write_output(output, &json)
}

fn cmd_feedback(profile: &Path, log: &Path, date: Option<NaiveDate>) -> Result<(), String> {
    let user = read_profile(profile)?;
    let entries = read_log(log)?;
    let metrics = MetricsEngine::compute(&entries);
    let on = date.unwrap_or_else(|| Utc::now().date_naive());
    let feedback = FeedbackGenerator::generate(&user, &entries, &metrics, on);
    let json = serde_json::to_string_pretty(&feedback).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn cmd_validate(log: &Path) -> Result<(), String> {
    let entries = read_log(log)?;
    println!("ok: {} entries", entries.len());
    Ok(())
}

fn read_profile(path: &Path) -> Result<User, String> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).map_err(|e| format!("invalid profile: {e}"))
}

/// Read a practice log: one JSON entry per line, blank lines skipped.
fn read_log(path: &Path) -> Result<Vec<ProgressEntry>, String> {
    let raw = read_input(path)?;
    let mut entries = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: ProgressEntry = serde_json::from_str(line)
            .map_err(|e| format!("invalid log entry on line {}: {e}", number + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| e.to_string())?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let mut file = fs::File::create(path).map_err(|e| format!("{}: {e}", path.display()))?;
            writeln!(file, "{content}").map_err(|e| e.to_string())
        }
        _ => {
            println!("{content}");
            Ok(())
        }
    }
}
