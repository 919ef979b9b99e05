//! `cekkirim` command-line front end for the calculation core

#![forbid(unsafe_code)]

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::commands::{execute, Command};
use crate::config::{init_tracing, AppConfig};
use crate::error::CliResult;

#[derive(Debug, Parser)]
#[command(name = "cekkirim", version)]
#[command(about = "Marketplace fee, shipping emission and credit score calculators")]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Reference data bundle (overrides CEKKIRIM_REFERENCE_DATA)
    #[arg(long, global = true)]
    reference_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_tracing(&config.log_level);

    match run(cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> CliResult<String> {
    let reference = config.load_reference(cli.reference_data.as_deref())?;
    execute(cli.command, &reference)?.render(cli.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pricing_with_global_json() {
        let cli = Cli::try_parse_from([
            "cekkirim", "pricing", "--platform", "shopee", "--price", "100000", "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Pricing { ref platform, tier: None, price: 100_000, cost: 0 } if platform == "shopee"
        ));
    }

    #[test]
    fn parses_carbon_mode() {
        let cli = Cli::try_parse_from([
            "cekkirim",
            "carbon",
            "--from",
            "jakarta",
            "--to",
            "bandung",
            "--weight-grams",
            "1500",
            "--mode",
            "rail",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Carbon { weight_grams: 1_500, mode: commands::ModeArg::Rail, all_modes: false, .. }
        ));
    }

    #[test]
    fn parses_credit_history_path() {
        let cli = Cli::try_parse_from([
            "cekkirim", "credit", "--orders", "10", "--success", "95", "--dispute", "1",
            "--payment", "90", "--history", "seller-1.json",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Credit { subject: None, history: Some(ref path), .. }
                if path == std::path::Path::new("seller-1.json")
        ));
    }

    #[test]
    fn rejects_missing_required_argument() {
        assert!(Cli::try_parse_from(["cekkirim", "credit", "--orders", "5"]).is_err());
    }

    #[test]
    fn run_uses_builtin_reference_by_default() {
        let cli = Cli::try_parse_from(["cekkirim", "reference"]).unwrap();
        let config = AppConfig {
            reference_data: None,
            log_level: "warn".to_owned(),
        };
        let output = run(cli, &config).unwrap();
        assert!(output.starts_with("Fingerprint: "));
    }
}
