//! CLI binary for SBET Extract
//!
//! Usage: `sbet_extract <SBET_FILE> <OUTPUT_DIR>` writes `<OUTPUT_DIR>/sbet.csv`.

use anyhow::Result;
use clap::{Arg, Command};
use sbet_extract::{export_sbet_file, ExportOptions, SbetError};
use std::path::Path;

fn build_command() -> Command {
    Command::new("SBET Extract")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a binary SBET file to CSV (GpsTime, X, Y, Z, Heading, Roll, Pitch). Angles are written in degrees.")
        .arg(
            Arg::new("input")
                .help("Binary SBET file to convert")
                .value_name("SBET_FILE")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .help("Existing directory to write sbet.csv into")
                .value_name("OUTPUT_DIR")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output (overridden by RUST_LOG)")
                .action(clap::ArgAction::SetTrue),
        )
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Print a fatal error and exit with status 1
fn fail(err: impl Into<anyhow::Error>) -> ! {
    eprintln!("{:#}", err.into());
    std::process::exit(1);
}

/// Positional argument value, treating an empty string as absent
fn required_arg<'a>(matches: &'a clap::ArgMatches, id: &str, what: &'static str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) if !value.is_empty() => value.as_str(),
        _ => fail(SbetError::ArgumentMissing(what)),
    }
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_logging(debug);

    let input = required_arg(&matches, "input", "input file path");
    let output_dir = required_arg(&matches, "output-dir", "output directory path");

    log::debug!("Input: {input}, output directory: {output_dir}");

    let options = ExportOptions::new(output_dir);
    match export_sbet_file(Path::new(input), &options) {
        Ok(report) => {
            if let (Some(first), Some(last)) = (report.first_gps_time, report.last_gps_time) {
                log::debug!(
                    "GPS time range {first:.3} - {last:.3} ({:.1}s)",
                    last - first
                );
            }
            Ok(())
        }
        Err(e) => fail(e),
    }
}
