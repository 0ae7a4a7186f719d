use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str = "A command-line tool for estimating the effective nuclear charge felt by the outermost electron using Slater's rules.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(version, about = ABOUT, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Elements to evaluate.
    ///
    /// Each item is an element symbol (Fe), an atomic number (26) or an inclusive range of
    /// either (1-99, H-Ne). When omitted, every element in the configuration table is evaluated.
    #[arg(value_name = "ELEMENTS")]
    pub elements: Vec<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub calculation: CalculationOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places for the pretty and CSV formats.
    ///
    /// JSON output always carries full precision.
    #[arg(short, long, default_value_t = 2)]
    pub precision: usize,
}

/// Options for controlling where configurations come from.
#[derive(Args)]
#[command(next_help_heading = "Calculation Options")]
pub struct CalculationOptions {
    /// Custom configuration table in TOML format.
    ///
    /// If not specified, the built-in ground-state configurations are used.
    #[arg(short = 'C', long, value_name = "FILE")]
    pub configurations: Option<PathBuf>,

    /// Explicit electron configuration, e.g. "[Ar] 3d6 4s2".
    ///
    /// Requires exactly one element and overrides its table entry.
    #[arg(short, long, value_name = "CONFIG")]
    pub notation: Option<String>,
}

/// Options for controlling diagnostic output.
#[derive(Args)]
#[command(next_help_heading = "Logging Options")]
pub struct LoggingOptions {
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write logs to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Output format for the calculation results.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table with configuration, rule branch, S and Z_eff per element.
    Pretty,
    /// Comma-separated values including the per-bucket electron counts.
    Csv,
    /// JSON object containing the full screening breakdown per element.
    Json,
}
