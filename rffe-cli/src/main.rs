//! rffectl: batch control runner for the RF front-end
//!
//! Loads a JSON batch configuration, opens one control session, and plays
//! the commands through it sequentially (with `set_frontend_attenuation`
//! moved to the end of the run). Any transport failure ends the run with a
//! nonzero exit; per-command dispatch failures are logged and skipped.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rffe_client::{run_batch, BatchConfig, ConfigError, Session};

#[derive(Parser, Debug)]
#[command(name = "rffectl", version, about = "Batch control client for the RF front-end")]
struct Args {
    /// Path to the JSON batch configuration
    config: PathBuf,

    /// Override the device IP/hostname from the config
    #[arg(long)]
    ip: Option<String>,

    /// Override the device TCP port from the config
    #[arg(long)]
    port: Option<u16>,

    /// Round-trip timeout in seconds
    #[arg(long, default_value_t = 5)]
    timeout: u64,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the default level.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("rffe_cli={level},rffe_client={level},rffe_protocol={level}")
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(args.verbose).into()),
        )
        .init();
    if let Err(err) = run(args) {
        tracing::error!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = BatchConfig::load(&args.config)?;
    info!(path = %args.config.display(), "loaded batch configuration");

    let host = args
        .ip
        .or_else(|| config.server_ip.clone())
        .ok_or(ConfigError::MissingAddress)?;
    let port = args.port.unwrap_or(config.server_port);
    if config.commands.is_empty() {
        return Err(ConfigError::NoCommands.into());
    }

    info!(%host, port, "opening session with the front-end");
    let mut session = Session::connect(&host, port, Duration::from_secs(args.timeout))?;
    info!(peer = %session.peer(), "connected");

    let outcome = run_batch(&mut session, &config.commands)?;
    info!(
        executed = outcome.executed,
        skipped = outcome.skipped,
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_counts_occurrences() {
        let args = Args::try_parse_from(["rffectl", "batch.json"]).unwrap();
        assert_eq!(args.verbose, 0);

        let args = Args::try_parse_from(["rffectl", "-v", "batch.json"]).unwrap();
        assert_eq!(args.verbose, 1);

        let args = Args::try_parse_from(["rffectl", "-vv", "batch.json"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn verbosity_selects_the_default_level() {
        assert_eq!(
            default_filter(0),
            "rffe_cli=info,rffe_client=info,rffe_protocol=info"
        );
        assert_eq!(
            default_filter(1),
            "rffe_cli=debug,rffe_client=debug,rffe_protocol=debug"
        );
        assert_eq!(
            default_filter(3),
            "rffe_cli=trace,rffe_client=trace,rffe_protocol=trace"
        );
    }
}
