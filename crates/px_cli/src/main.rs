// crates/px_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, logging, CLI parsing, and one
// handler per subcommand. Each handler returns a plain-text line and the
// equivalent JSON object; `--json` selects which one is printed.

mod args;

mod exitcodes {
    pub const OK: u8 = 0;
    pub const VALIDATION: u8 = 2;
    pub const IO: u8 = 4;
}

use std::process::ExitCode;

use clap::Parser;
use serde_json::{json, Value};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use args::{resolve_config, Args, CliError, Command};
use px_core::{
    clamp, cross_multiply_decimal, cross_multiply_f64, gcd_decimal, gcd_f64, missing_term, next_even,
    pack, unpack, Decimal, NumericConfig, NumericError, ProportionTerm,
};
use px_raster::{FnListener, ObservedRaster, RasterChange, RasterDescriptor};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug, Error)]
enum MainError {
    /// Bad numbers, bad argument combinations, invalid config values.
    #[error("{0}")]
    Validation(String),
    /// Config file unreadable.
    #[error("{0}")]
    Io(String),
}

impl From<NumericError> for MainError {
    fn from(e: NumericError) -> Self { MainError::Validation(e.to_string()) }
}

impl From<CliError> for MainError {
    fn from(e: CliError) -> Self {
        match e {
            CliError::ConfigRead { .. } => MainError::Io(e.to_string()),
            CliError::ConfigParse { .. } | CliError::Numeric(_) => MainError::Validation(e.to_string()),
        }
    }
}

/// One result in both renderings.
struct Report {
    text: String,
    json: Value,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(report) => {
            if args.json {
                println!("{}", report.json);
            } else {
                println!("{}", report.text);
            }
            ExitCode::from(exitcodes::OK)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("px: error: {e}");
            ExitCode::from(map_error(&e))
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("PX_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn map_error(e: &MainError) -> u8 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

fn run(args: &Args) -> Result<Report, MainError> {
    let config = resolve_config(args)?;
    tracing::info!(command = ?args.command, "running");

    match &args.command {
        Command::Compare { a, b } => Ok(compare(*a, *b, &config)?),
        Command::Ratio { total, variable, percentage, decimal } => {
            ratio(total.as_deref(), variable.as_deref(), percentage.as_deref(), *decimal)
        }
        Command::Gcd { a, b, decimal } => gcd(a, b, *decimal),
        Command::Pack { left, right } => {
            let packed = pack(*left, *right);
            Ok(Report { text: packed.to_string(), json: json!({ "packed": packed }) })
        }
        Command::Unpack { value } => {
            let (left, right) = unpack(*value);
            Ok(Report { text: format!("{left} {right}"), json: json!({ "left": left, "right": right }) })
        }
        Command::RoundUp { value, .. } => {
            let rounded = config.round_up(*value);
            let places = config.decimal_places as usize;
            Ok(Report {
                text: format!("{rounded:.places$}"),
                json: json!({ "value": rounded, "decimal_places": config.decimal_places }),
            })
        }
        Command::Clamp { value, min, max } => {
            let v = clamp(*value, *min, *max);
            Ok(Report { text: v.to_string(), json: json!({ "value": v }) })
        }
        Command::Even { n } => {
            let v = next_even(*n);
            Ok(Report { text: v.to_string(), json: json!({ "value": v }) })
        }
        Command::Raster { width, height, channels, bits, dpi, target_width } => {
            raster(*width, *height, *channels, *bits, *dpi, *target_width, &config)
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                                  Handlers                                  */
/* -------------------------------------------------------------------------- */

fn compare(a: f64, b: f64, config: &NumericConfig) -> Result<Report, NumericError> {
    let tol = config.tolerance()?;
    let eq = tol.nearly_equal(a, b);
    let gt = tol.greater_than(a, b);
    let lt = tol.smaller_than(a, b);
    let le = tol.smaller_than_or_close(a, b);
    Ok(Report {
        text: format!("nearly_equal={eq} greater_than={gt} smaller_than={lt} smaller_than_or_close={le}"),
        json: json!({
            "epsilon": tol.value(),
            "nearly_equal": eq,
            "greater_than": gt,
            "smaller_than": lt,
            "smaller_than_or_close": le,
        }),
    })
}

fn term_name(term: ProportionTerm) -> &'static str {
    match term {
        ProportionTerm::Total => "total",
        ProportionTerm::Variable => "variable",
        ProportionTerm::Percentage => "percentage",
    }
}

fn ratio(
    total: Option<&str>,
    variable: Option<&str>,
    percentage: Option<&str>,
    decimal: bool,
) -> Result<Report, MainError> {
    let term = term_name(missing_term(total, variable, percentage)?);

    if decimal {
        let parse = |s: Option<&str>| s.map(str::parse::<Decimal>).transpose();
        let value = cross_multiply_decimal(parse(total)?, parse(variable)?, parse(percentage)?)?;
        Ok(Report {
            text: format!("{term}={value}"),
            json: json!({ "term": term, "value": value.to_string() }),
        })
    } else {
        let value = cross_multiply_f64(parse_f64(total)?, parse_f64(variable)?, parse_f64(percentage)?)?;
        Ok(Report { text: format!("{term}={value}"), json: json!({ "term": term, "value": value }) })
    }
}

fn gcd(a: &str, b: &str, decimal: bool) -> Result<Report, MainError> {
    if decimal {
        let g = gcd_decimal(a.parse()?, b.parse()?);
        Ok(Report { text: g.to_string(), json: json!({ "gcd": g.to_string() }) })
    } else {
        let g = gcd_f64(parse_number(a)?, parse_number(b)?);
        Ok(Report { text: g.to_string(), json: json!({ "gcd": g }) })
    }
}

fn raster(
    width: u16,
    height: u16,
    channels: u8,
    bits: u8,
    dpi: Option<f64>,
    target_width: Option<f64>,
    config: &NumericConfig,
) -> Result<Report, MainError> {
    let log_change = |c: &RasterChange| tracing::debug!(property = %c.property, old = %c.old, new = %c.new, "raster");
    let mut obs = ObservedRaster::new(RasterDescriptor::new(width, height), FnListener(log_change));
    obs.update(|r| r.set_channel_count(channels));
    obs.update(|r| r.set_bits_per_channel(bits));
    if let Some(d) = dpi {
        obs.update(|r| r.set_horizontal_dpi(d));
        obs.update(|r| r.set_vertical_dpi(d));
    }
    let r = obs.raster();

    let (aw, ah) = r.aspect_ratio();
    let scaled = target_width.map(|w| r.scaled_height(w)).transpose()?;
    let standard_dpi = r.has_dpi(96.0, config.tolerance()?);

    let mut text = format!(
        "aspect={aw}:{ah} bytes_per_pixel={} expected_data_length={} standard_dpi={standard_dpi}",
        r.bytes_per_pixel(),
        r.expected_data_length(),
    );
    if let Some(h) = scaled {
        text.push_str(&format!(" scaled_height={h}"));
    }
    Ok(Report {
        text,
        json: json!({
            "aspect_ratio": [aw, ah],
            "bytes_per_pixel": r.bytes_per_pixel(),
            "expected_data_length": r.expected_data_length(),
            "standard_dpi": standard_dpi,
            "scaled_height": scaled,
        }),
    })
}

fn parse_number(s: &str) -> Result<f64, MainError> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| MainError::Validation(format!("not a number: {s}")))
}

fn parse_f64(s: Option<&str>) -> Result<Option<f64>, MainError> {
    s.map(parse_number).transpose()
}
