use clap::{Parser, ValueEnum};
use graphein::graph::config::{DEFAULT_CUTOFF, UnknownElementPolicy};
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
    about = "graphein - converts molecular structure files (PDB) into featurized distance graphs for machine-learning pipelines.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Glob pattern(s) selecting the input structure files (e.g. 'data/*.pdb').
    #[arg(short, long = "inputs", required = true, value_name = "GLOB", num_args = 1..)]
    pub inputs: Vec<String>,

    /// Maximum distance in Angstroms between two atoms for an edge to be
    /// created between their nodes. The boundary is inclusive.
    #[arg(short, long, value_name = "FLOAT", default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,

    /// Policy for atoms whose element symbol is not in the built-in feature table.
    #[arg(
        long,
        value_enum,
        value_name = "POLICY",
        default_value_t = UnknownElementArg::Abort
    )]
    pub on_unknown_element: UnknownElementArg,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel conversion.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

/// CLI-facing mirror of the core unknown-element policy.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownElementArg {
    /// Fail the file on the first element symbol the feature table does not know.
    Abort,
    /// Keep the node and emit its four feature fields as null.
    NullFeatures,
}

impl From<UnknownElementArg> for UnknownElementPolicy {
    fn from(arg: UnknownElementArg) -> Self {
        match arg {
            UnknownElementArg::Abort => UnknownElementPolicy::Abort,
            UnknownElementArg::NullFeatures => UnknownElementPolicy::NullFeatures,
        }
    }
}
