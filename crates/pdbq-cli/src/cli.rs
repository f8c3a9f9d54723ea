use clap::{Args, Parser, Subcommand};
use pdbq::engine::session::MaskKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pdbq - parse PDB structure files and run distance and selection queries over them.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip malformed records instead of aborting the parse
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// Path to a TOML configuration file with query defaults
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the structure summary (atom/residue/bond totals) as JSON.
    Info(InfoArgs),
    /// List atoms within a radius of a query atom and print them as a mask.
    Near(NearArgs),
    /// Compute the full distance matrix and export it as CSV, optionally
    /// rendering a heatmap figure.
    Map(MapArgs),
    /// Build a selection from explicit atom serials and print it as a mask.
    Mask(MaskArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input PDB structure file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `near` subcommand.
#[derive(Args, Debug)]
pub struct NearArgs {
    /// Path to the input PDB structure file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Serial of the query atom.
    #[arg(short, long, value_name = "SERIAL")]
    pub atom: usize,

    /// Neighborhood radius in Angstroms (defaults to the configured value).
    #[arg(short, long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Mask kind to print for the neighbor selection ('atoms' or 'residues').
    #[arg(short, long, value_name = "KIND")]
    pub mask: Option<MaskKind>,
}

/// Arguments for the `map` subcommand.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Path to the input PDB structure file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the distance matrix CSV output.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Also render the distance map as an SVG heatmap at this path.
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,
}

/// Arguments for the `mask` subcommand.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Path to the input PDB structure file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Atom serials to select, in order.
    #[arg(short, long, value_name = "SERIAL", num_args(1..), required = true)]
    pub atoms: Vec<usize>,

    /// Mask kind to print ('atoms' or 'residues').
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<MaskKind>,
}
