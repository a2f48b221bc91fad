// crates/px_cli/src/args.rs
//
// Argument surface for `px`, plus resolution of the effective NumericConfig
// (defaults → --config file → --epsilon/--places overrides).

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use px_core::{NumericConfig, NumericError};
use thiserror::Error;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "px",
    version,
    disable_help_subcommand = true,
    about = "Tolerant comparison, proportions, GCD, bit packing and rounding"
)]
pub struct Args {
    /// JSON file providing `epsilon` and/or `decimal_places`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Comparison tolerance (overrides the config file).
    #[arg(long, global = true)]
    pub epsilon: Option<f64>,

    /// Print one JSON object instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log verbosity: -v info, -vv debug. `PX_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compare two numbers with the configured tolerance.
    #[command(allow_negative_numbers = true)]
    Compare { a: f64, b: f64 },

    /// Solve variable / total = percentage / 100 for the one omitted quantity.
    #[command(allow_negative_numbers = true)]
    Ratio {
        #[arg(long)]
        total: Option<String>,
        #[arg(long)]
        variable: Option<String>,
        #[arg(long)]
        percentage: Option<String>,
        /// Use fixed-point decimal arithmetic.
        #[arg(long)]
        decimal: bool,
    },

    /// Greatest common divisor.
    #[command(allow_negative_numbers = true)]
    Gcd {
        a: String,
        b: String,
        /// Use fixed-point decimal arithmetic.
        #[arg(long)]
        decimal: bool,
    },

    /// Pack two i32 into one i64.
    #[command(allow_negative_numbers = true)]
    Pack { left: i32, right: i32 },

    /// Split an i64 into its two i32 halves.
    #[command(allow_negative_numbers = true)]
    Unpack { value: i64 },

    /// Round so the result is never below the input.
    #[command(allow_negative_numbers = true)]
    RoundUp {
        value: f64,
        /// Decimal places (overrides the config file).
        #[arg(long)]
        places: Option<u32>,
    },

    /// Force a value into [min, max].
    #[command(allow_negative_numbers = true)]
    Clamp { value: f64, min: f64, max: f64 },

    /// Smallest even integer not below n.
    #[command(allow_negative_numbers = true)]
    Even { n: i32 },

    /// Describe a raster of the given size.
    Raster {
        #[arg(long)]
        width: u16,
        #[arg(long)]
        height: u16,
        #[arg(long, default_value_t = px_raster::DEFAULT_CHANNEL_COUNT)]
        channels: u8,
        #[arg(long, default_value_t = px_raster::DEFAULT_BITS_PER_CHANNEL)]
        bits: u8,
        /// Horizontal and vertical DPI.
        #[arg(long)]
        dpi: Option<f64>,
        /// Report the proportional height at this width.
        #[arg(long)]
        target_width: Option<f64>,
    },
}

/// Errors surfaced while resolving configuration.
/// Keep messages short/stable (handy for scripts/tests).
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {msg}")]
    ConfigParse { path: String, msg: String },
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// Defaults, then the config file, then flag overrides; validated last.
pub fn resolve_config(args: &Args) -> Result<NumericConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => NumericConfig::default(),
    };
    if let Some(eps) = args.epsilon {
        config.epsilon = eps;
    }
    if let Command::RoundUp { places: Some(p), .. } = &args.command {
        config.decimal_places = *p;
    }
    config.validate()?;
    tracing::debug!(epsilon = config.epsilon, decimal_places = config.decimal_places, "effective config");
    Ok(config)
}

fn load_config(path: &Path) -> Result<NumericConfig, CliError> {
    let shown = path.to_string_lossy().into_owned();
    let bytes = fs::read(path).map_err(|source| CliError::ConfigRead { path: shown.clone(), source })?;
    serde_json::from_slice(&bytes).map_err(|e| CliError::ConfigParse { path: shown, msg: e.to_string() })
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn negative_positionals_parse() {
        let a = Args::try_parse_from(["px", "pack", "-5", "-1"]).unwrap();
        assert!(matches!(a.command, Command::Pack { left: -5, right: -1 }));
    }

    #[test]
    fn flag_overrides_apply() {
        let a = Args::try_parse_from(["px", "round-up", "2.401", "--places", "2", "--epsilon", "0.5"]).unwrap();
        let c = resolve_config(&a).unwrap();
        assert_eq!(c.decimal_places, 2);
        assert_eq!(c.epsilon, 0.5);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let a = Args::try_parse_from(["px", "compare", "1", "2", "--epsilon", "0"]).unwrap();
        assert!(matches!(resolve_config(&a), Err(CliError::Numeric(NumericError::InvalidTolerance(_)))));
    }
}
