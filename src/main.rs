mod cli;
mod config;
mod dates;
mod error;
mod instrument;
mod report;
mod score;
mod session;
mod sheet;
mod types;

use crate::error::EcoError;
use crate::types::config::{EcoConfig, ReportFormatSetting};
use chrono::NaiveDate;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_SHEET: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_today(flag: Option<NaiveDate>, config: &EcoConfig) -> Result<NaiveDate, EcoError> {
    if let Some(today) = flag {
        return Ok(today);
    }
    Ok(config
        .reference_date()?
        .unwrap_or_else(|| chrono::Local::now().date_naive()))
}

fn render_options(flag: Option<cli::ReportFormat>, config: &EcoConfig) -> report::RenderOptions {
    let format = match flag {
        Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        None => match config.report_format() {
            ReportFormatSetting::Text => report::OutputFormat::Text,
            ReportFormatSetting::Json => report::OutputFormat::Json,
        },
    };
    report::RenderOptions {
        format,
        show_temperament: config.show_temperament(),
    }
}

fn print_report(
    report: &types::report::ScoreReport,
    options: report::RenderOptions,
) -> Result<(), EcoError> {
    let rendered = report::render(report, options)?;
    match options.format {
        report::OutputFormat::Text => print!("{rendered}"),
        report::OutputFormat::Json => println!("{rendered}"),
    }
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32, EcoError> {
    let config = config::load_config(cli.config.as_deref())?;
    let command = cli
        .command
        .unwrap_or_else(|| cli::Commands::Run(cli::RunCommand::default()));

    match command {
        cli::Commands::Run(cmd) => {
            let today = resolve_today(cmd.today, &config)?;
            let report = {
                let stdin = io::stdin();
                let stdout = io::stdout();
                let mut session = session::Session::new(stdin.lock(), stdout.lock());
                session.run(today, config.age_rule())?
            };
            print_report(&report, render_options(cmd.format, &config))?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let today = resolve_today(cmd.today, &config)?;
            let sheet = sheet::load_sheet(&cmd.sheet)?;
            let report = score::assess(sheet.respondent, today, config.age_rule(), &sheet.answers)?;
            print_report(&report, render_options(cmd.format, &config))?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Questions => {
            for question in &instrument::QUESTIONS {
                println!("Pergunta {}: {}", question.id, question.text);
                for (value, label) in (1..).zip(question.legend.options()) {
                    println!("  {value} - {label}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                EcoError::InvalidSheet(_) => exit_code::INVALID_SHEET,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(log_filter(0, true), "error");
        assert_eq!(log_filter(0, false), "warn");
        assert_eq!(log_filter(2, false), "debug");
        assert_eq!(log_filter(7, false), "trace");
    }

    #[test]
    fn flag_date_overrides_config_reference_date() {
        let config: EcoConfig =
            toml::from_str("[session]\nreference_date = \"2020-01-01\"\n").expect("config parses");
        let flag = NaiveDate::from_ymd_opt(2024, 6, 15);
        assert_eq!(resolve_today(flag, &config).expect("resolves"), flag.expect("valid"));
        assert_eq!(
            resolve_today(None, &config).expect("resolves"),
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid")
        );
    }

    #[test]
    fn format_flag_overrides_config() {
        let config: EcoConfig =
            toml::from_str("[report]\nformat = \"json\"\n").expect("config parses");
        assert_eq!(render_options(None, &config).format, report::OutputFormat::Json);
        assert_eq!(
            render_options(Some(cli::ReportFormat::Text), &config).format,
            report::OutputFormat::Text
        );
    }
}
