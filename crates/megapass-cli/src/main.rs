//! mmpass - generate Mega Man IV / V passwords from a progress record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use megapass::{EncodedPassword, Encoder, EncoderConfig, Mode, ProgressRecord, Variant};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod request;

use crate::request::{PasswordRequest, parse_record};

const LOG_ENV: &str = "MEGAPASS_LOG";

#[derive(Parser, Debug)]
#[command(name = "mmpass", version)]
#[command(about = "Generate Mega Man IV and Mega Man V passwords")]
struct Cli {
    /// Target game: `iv` or `v`.
    #[arg(short, long)]
    game: Option<Variant>,

    /// `authentic` matches the game, `reference` matches the published worked example.
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Packed 40-bit record (`0x..`, `0b..` or decimal). Defaults to everything complete.
    #[arg(short, long)]
    record: Option<String>,

    /// YAML or JSON request file; command-line flags take precedence.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Grid)]
    format: Format,

    /// Log every pipeline stage to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Rows of the in-game entry grid.
    Grid,
    /// The symbol sequence on one line.
    Flat,
    /// Game, mode, password and grid rows as JSON.
    Json,
}

#[derive(Serialize)]
struct JsonOutput {
    game: Variant,
    mode: Mode,
    password: String,
    grid: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = match &cli.request {
        Some(path) => PasswordRequest::load(path)?,
        None => PasswordRequest::default(),
    };

    let config = EncoderConfig {
        variant: cli.game.or(request.game).unwrap_or_default(),
        mode: cli.mode.or(request.mode).unwrap_or_default(),
    };
    let record = resolve_record(cli.record.as_deref(), &request)?;
    tracing::info!(
        game = config.variant.short_name(),
        mode = %config.mode,
        record = %format!("{:#012x}", record.as_u64()),
        "encoding"
    );

    let password = Encoder::with_config(config)
        .encode(&record)
        .context("failed to encode password")?;
    println!("{}", render(&password, config, cli.format)?);
    Ok(())
}

fn resolve_record(flag: Option<&str>, request: &PasswordRequest) -> Result<ProgressRecord> {
    if let Some(text) = flag {
        if request.record.is_some() {
            tracing::debug!("--record overrides the request file record");
        }
        return parse_record(text);
    }
    match &request.record {
        Some(fields) => {
            ProgressRecord::from_fields(fields).context("request file record is out of range")
        }
        None => Ok(ProgressRecord::ULTIMATE),
    }
}

fn render(password: &EncodedPassword, config: EncoderConfig, format: Format) -> Result<String> {
    Ok(match format {
        Format::Grid => password.grid().to_string(),
        Format::Flat => password.as_string(),
        Format::Json => serde_json::to_string_pretty(&JsonOutput {
            game: config.variant,
            mode: config.mode,
            password: password.as_string(),
            grid: password.grid().lines(),
        })?,
    })
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
