//! # print-receipt
//!
//! Prints a JSON receipt as tape text on stdout.
//!
//! ## Usage
//! ```bash
//! # Receipt from a file, default 40-column tape
//! cargo run -p checkout-printer --bin print-receipt -- --receipt ./receipt.json
//!
//! # Receipt from stdin on a 32-column tape
//! cat receipt.json | cargo run -p checkout-printer --bin print-receipt -- -c 32
//!
//! # Explicit config file
//! cargo run -p checkout-printer --bin print-receipt -- --config ./receipt.toml -r ./receipt.json
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` for detail) so stdout carries only
//! the tape.

use checkout_printer::input::read_receipt;
use checkout_printer::{PrinterConfig, ReceiptPrinter};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    receipt_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    columns: Option<usize>,
    help: bool,
}

/// Parses arguments (without the program name). A flag missing its value
/// is an error rather than being skipped.
fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--receipt" | "-r" => {
                options.receipt_path = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--columns" | "-c" => {
                let value = flag_value(args, i)?;
                options.columns = Some(
                    value
                        .parse()
                        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))?,
                );
                i += 1;
            }
            "--config" => {
                options.config_path = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown argument '{}', see --help", other)),
        }
        i += 1;
    }

    Ok(options)
}

/// Returns the value following the flag at `i`.
fn flag_value(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} expects a value", args[i]))
}

fn print_help() {
    println!("Checkout receipt printer");
    println!();
    println!("Usage: print-receipt [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -r, --receipt <PATH>   JSON receipt to print (default: stdin)");
    println!("  -c, --columns <N>      Tape width in characters (default: 40)");
    println!("      --config <PATH>    Printer config file (receipt.toml)");
    println!("  -h, --help             Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_help();
        return Ok(());
    }

    init_tracing();

    let mut config = PrinterConfig::load(options.config_path)?;
    if let Some(columns) = options.columns {
        config.columns = columns;
        config.validate()?;
    }
    info!(
        columns = config.columns,
        overflow = %config.overflow,
        "Printer configured"
    );

    let receipt = read_receipt(options.receipt_path.as_deref())?;
    let tape = ReceiptPrinter::with_config(config).format(&receipt)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(tape.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: warnings, plus info from checkout_printer
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,checkout_printer=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse_args(&args(&["-r", "r.json", "--columns", "32", "--config", "p.toml"]))
            .unwrap();
        assert_eq!(options.receipt_path, Some(PathBuf::from("r.json")));
        assert_eq!(options.columns, Some(32));
        assert_eq!(options.config_path, Some(PathBuf::from("p.toml")));
        assert!(!options.help);
    }

    #[test]
    fn test_no_args_reads_stdin_with_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_flag_without_value_is_an_error() {
        assert_eq!(parse_args(&args(&["-r"])).unwrap_err(), "-r expects a value");
        assert_eq!(
            parse_args(&args(&["--columns"])).unwrap_err(),
            "--columns expects a value"
        );
        assert_eq!(
            parse_args(&args(&["-r", "r.json", "--config"])).unwrap_err(),
            "--config expects a value"
        );
    }

    #[test]
    fn test_bad_columns_and_unknown_flags() {
        assert_eq!(
            parse_args(&args(&["-c", "wide"])).unwrap_err(),
            "-c expects a number, got 'wide'"
        );
        assert!(parse_args(&args(&["--wrap"])).is_err());
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }
}
