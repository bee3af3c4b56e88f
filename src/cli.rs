use crate::dates;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "eco",
    version,
    about = "FIRO-B interpersonal needs questionnaire (54 items, six scales)"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file layered over ~/.config/eco/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Administer the questionnaire interactively (default)
    Run(RunCommand),
    /// Score a completed JSON response sheet
    Score(ScoreCommand),
    /// Print the 54 questions with their answer legends
    Questions,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Args, Default)]
pub struct RunCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Reference date used for the age (defaults to the local date)
    #[arg(long, value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub sheet: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long, value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    dates::parse_date(raw).map_err(|e| e.to_string())
}
