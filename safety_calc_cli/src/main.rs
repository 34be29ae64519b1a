//! # Safety Value Calculator
//!
//! Computes SSR, SOS and SCW safety increment thresholds for a drive from its
//! pole pairs, maximum speed or displacement, and transmission ratio.
//!
//! # Usage
//!
//! ```bash
//! # Direct transmission ratio (mm per revolution)
//! safety_calc --mode ssr --pole-pairs 4 --max-value 100 --ratio 10
//!
//! # Ratio from an encoder fraction at 16-bit resolution
//! safety_calc --mode scw --pole-pairs 4 --max-value 100 \
//!     --numerator 10 --denominator 65536 --encoder-bits 16
//!
//! # Stored drive profile, every safety function, JSON output
//! safety_calc --profile config/axis_x.toml --all --output json
//! ```

mod display;
mod inputs;

use clap::{Parser, ValueEnum};
use safety_calc::config::{ConfigLoader, LogLevel, ProfileConfig};
use safety_calc::increment::SafetyFunction;
use safety_calc::request::CalculationResult;
use std::path::PathBuf;
use std::process;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::display::{GENERIC_ERROR, format_json, format_result};
use crate::inputs::{InputError, RawInputs};

/// Result output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// `<label>: <value>` lines.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Safety Value Calculator - drive safety increment thresholds
#[derive(Parser, Debug)]
#[command(name = "safety_calc")]
#[command(version)]
#[command(about = "Computes SSR, SOS and SCW safety increment thresholds")]
#[command(long_about = None)]
struct Args {
    /// Drive profile TOML ([shared] + [drive]). Flags override its values.
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Safety function: ssr, sos or scw (default: profile value, then ssr).
    #[arg(short, long, conflicts_with = "all")]
    mode: Option<SafetyFunction>,

    /// Compute every safety function for the same inputs.
    #[arg(short, long)]
    all: bool,

    /// Motor pole pairs.
    #[arg(long)]
    pole_pairs: Option<f64>,

    /// Max speed [mm/s] for SSR/SCW, max displacement [mm] for SOS.
    #[arg(long, visible_aliases = ["speed", "displacement"])]
    max_value: Option<f64>,

    /// Transmission ratio [mm/rev].
    #[arg(short, long, conflicts_with_all = ["numerator", "denominator", "encoder_bits"])]
    ratio: Option<f64>,

    /// Encoder fraction numerator.
    #[arg(long)]
    numerator: Option<f64>,

    /// Encoder fraction denominator.
    #[arg(long)]
    denominator: Option<f64>,

    /// Encoder resolution in bits; counts per revolution is 2^bits.
    #[arg(long)]
    encoder_bits: Option<f64>,

    /// Result output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

impl Args {
    fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            function: self.mode,
            pole_pairs: self.pole_pairs,
            max_value: self.max_value,
            ratio: self.ratio,
            numerator: self.numerator,
            denominator: self.denominator,
            encoder_bits: self.encoder_bits,
        }
    }
}

fn main() {
    let args = Args::parse();

    // The profile is read first so its log level can seed the subscriber.
    let profile = args
        .profile
        .as_deref()
        .map(ProfileConfig::load)
        .transpose();
    let log_level = profile
        .as_ref()
        .ok()
        .and_then(Option::as_ref)
        .map(|p| p.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);

    let outcome = profile
        .map_err(InputError::from)
        .and_then(|profile| run(&args, profile.as_ref()));

    match outcome {
        Ok(output) => println!("{output}"),
        Err(e) => {
            warn!("Calculation rejected: {e}");
            eprintln!("{GENERIC_ERROR}");
            process::exit(1);
        }
    }
}

fn run(args: &Args, profile: Option<&ProfileConfig>) -> Result<String, InputError> {
    if let Some(p) = profile {
        p.shared.validate()?;
        info!("Using drive profile '{}'", p.shared.service_name);
    }

    let request = args.raw_inputs().to_request(profile.map(|p| &p.drive))?;
    let functions: &[SafetyFunction] = if args.all {
        &SafetyFunction::ALL
    } else {
        std::slice::from_ref(&request.function)
    };

    let results = functions
        .iter()
        .map(|&f| {
            debug!("{}: {}", f.input_label(), request.max_value);
            request.with_function(f).evaluate()
        })
        .collect::<Result<Vec<CalculationResult>, _>>()?;

    render(&results, args.output)
}

fn render(results: &[CalculationResult], format: OutputFormat) -> Result<String, InputError> {
    Ok(match format {
        OutputFormat::Text => results
            .iter()
            .map(format_result)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => format_json(results)?,
    })
}

/// Setup tracing subscriber based on CLI arguments and profile log level.
///
/// Logs go to stderr so stdout carries results only.
fn setup_tracing(args: &Args, profile_level: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from(profile_level)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
