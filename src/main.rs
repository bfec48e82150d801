//! Drillsheet CLI
//!
//! Generate column-arithmetic worksheets and worked solutions as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Addition worksheet with forced carries
//! drillsheet generate --seed deadbeef --operator add --chain
//!
//! # Worksheet from a config file, with solutions, written to a file
//! drillsheet generate --config div.json --solutions --out sheet.json
//!
//! # Trace 22 / 7 through its repeating period
//! drillsheet divide 22 7 --extra 6
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drillsheet::{
    compute_div_details, compute_mul_details, format_seed, generate_problems, parse_seed,
    Operator, Solution, Worksheet, WorksheetConfig,
};
use serde::Serialize;

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Application name
pub const APP_NAME: &str = "drillsheet";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest divisor the `divide` command traces (bringing down a digit must not overflow)
pub const DIVISOR_CLI_MAX: u32 = 100_000_000;

// =============================================================================
// CLI
// =============================================================================

/// Column-arithmetic worksheet generator
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = "Column-arithmetic worksheets with worked solutions")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a worksheet
    Generate(GenerateArgs),
    /// Trace a long division
    Divide {
        /// Dividend
        dividend: u32,
        /// Divisor
        divisor: u32,
        /// Decimal places to extend to
        #[arg(long, default_value_t = 0)]
        extra: u32,
    },
    /// Trace a long multiplication
    Multiply {
        /// Multiplicand
        multiplicand: u32,
        /// Multiplier
        multiplier: u32,
    },
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Seed as decimal or 8 hex characters (random when omitted)
    #[arg(long)]
    seed: Option<String>,

    /// JSON config file (overrides the operator flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Operator: add, sub, mul or div
    #[arg(long, value_parser = parse_operator, default_value = "add")]
    operator: Operator,

    /// Narrowest first operand
    #[arg(long)]
    min_digits: Option<u32>,

    /// Widest first operand
    #[arg(long)]
    max_digits: Option<u32>,

    /// Narrowest multiplier or divisor
    #[arg(long)]
    second_min_digits: Option<u32>,

    /// Widest multiplier or divisor
    #[arg(long)]
    second_max_digits: Option<u32>,

    /// Addends per problem
    #[arg(long)]
    operands: Option<usize>,

    /// Force consecutive carries or borrows
    #[arg(long)]
    chain: bool,

    /// Decimal mode
    #[arg(long)]
    decimal: bool,

    /// Allow division remainders
    #[arg(long)]
    remainder: bool,

    /// Allow repeating decimals in decimal division
    #[arg(long)]
    repeating: bool,

    /// Include worked solutions
    #[arg(long)]
    solutions: bool,

    /// Write JSON here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_operator(s: &str) -> Result<Operator, String> {
    Operator::parse(s).ok_or_else(|| format!("unknown operator {s:?}"))
}

impl GenerateArgs {
    /// Build the configuration from a file, or from flags over the operator defaults.
    fn to_config(&self) -> anyhow::Result<WorksheetConfig> {
        if let Some(path) = &self.config {
            return Ok(WorksheetConfig::from_json_file(path)?);
        }

        let mut config = WorksheetConfig::for_operator(self.operator);
        match &mut config {
            WorksheetConfig::Add(c) => {
                c.min_digits = self.min_digits.unwrap_or(c.min_digits);
                c.max_digits = self.max_digits.unwrap_or(c.max_digits);
                c.num_operands = self.operands.unwrap_or(c.num_operands);
                c.consecutive_carries = self.chain;
                c.decimal_mode = self.decimal;
            }
            WorksheetConfig::Sub(c) => {
                c.min_digits = self.min_digits.unwrap_or(c.min_digits);
                c.max_digits = self.max_digits.unwrap_or(c.max_digits);
                c.consecutive_borrows = self.chain;
                c.decimal_mode = self.decimal;
            }
            WorksheetConfig::Mul(c) => {
                c.min_digits = self.min_digits.unwrap_or(c.min_digits);
                c.max_digits = self.max_digits.unwrap_or(c.max_digits);
                c.mul_min_digits = self.second_min_digits.unwrap_or(c.mul_min_digits);
                c.mul_max_digits = self.second_max_digits.unwrap_or(c.mul_max_digits);
            }
            WorksheetConfig::Div(c) => {
                c.min_digits = self.min_digits.unwrap_or(c.min_digits);
                c.max_digits = self.max_digits.unwrap_or(c.max_digits);
                c.div_min_digits = self.second_min_digits.unwrap_or(c.div_min_digits);
                c.div_max_digits = self.second_max_digits.unwrap_or(c.div_max_digits);
                c.allow_remainder = self.remainder;
                c.decimal_mode = self.decimal;
                c.allow_repeating = self.repeating;
            }
        }

        Ok(config.normalize())
    }
}

/// Worksheet JSON with optional solutions alongside.
#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    worksheet: &'a Worksheet,
    #[serde(skip_serializing_if = "Option::is_none")]
    solutions: Option<Vec<Solution>>,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    tracing::debug!("{} v{}", APP_NAME, APP_VERSION);

    match cli.command {
        Commands::Generate(args) => {
            let config = args.to_config()?;
            let seed = match &args.seed {
                Some(s) => parse_seed(s)?,
                None => rand::random(),
            };
            // Seeds are logged so any worksheet can be regenerated.
            tracing::info!(
                seed = %format_seed(seed),
                operator = %config.operator(),
                "Generating worksheet"
            );

            let worksheet = generate_problems(seed, &config);
            let output = Output {
                worksheet: &worksheet,
                solutions: args.solutions.then(|| worksheet.solutions()),
            };
            let json = serde_json::to_string_pretty(&output)?;

            match &args.out {
                Some(path) => {
                    std::fs::write(path, json)?;
                    tracing::info!(
                        "Wrote {} problems to {}",
                        worksheet.problems.len(),
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
        }
        Commands::Divide {
            dividend,
            divisor,
            extra,
        } => {
            anyhow::ensure!(divisor > 0, "divisor must be non-zero");
            anyhow::ensure!(
                divisor <= DIVISOR_CLI_MAX,
                "divisor {} exceeds {}",
                divisor,
                DIVISOR_CLI_MAX
            );
            let details = compute_div_details(dividend, divisor, extra);
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Commands::Multiply {
            multiplicand,
            multiplier,
        } => {
            anyhow::ensure!(
                multiplicand.checked_mul(multiplier).is_some(),
                "{} x {} overflows u32",
                multiplicand,
                multiplier
            );
            let details = compute_mul_details(multiplicand, multiplier);
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
    }

    Ok(())
}
