use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "HelixGen Developers",
    version,
    about = "HelixGen CLI - Verify generated protein candidates by recomputing their molecular weight and stability from sequence.",
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

    /// Set the number of threads for parallel verification.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a batch of candidate proposals produced by a generative model.
    Verify(VerifyArgs),
    /// Compute sequence properties for one or more raw sequences.
    Analyze(AnalyzeArgs),
    /// Print the residue table used for all calculations.
    Residues,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    // --- Core Arguments ---
    /// Path to the collaborator output: a JSON array of candidate proposals.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the verified candidates (JSON). Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Request Overrides ---
    /// Override the design target name.
    #[arg(long = "target", value_name = "TEXT")]
    pub target_name: Option<String>,

    /// Override the desired function of the design.
    #[arg(long = "function", value_name = "TEXT")]
    pub desired_function: Option<String>,

    /// Override the minimum stability score (0-100). Only reported, never enforced.
    #[arg(long, value_name = "FLOAT")]
    pub min_stability: Option<f64>,

    /// Override the maximum molecular weight in kDa. Only reported, never enforced.
    #[arg(long, value_name = "FLOAT")]
    pub max_weight: Option<f64>,

    // --- Verification Overrides ---
    /// Override the prefix of generated candidate ids.
    #[arg(long, value_name = "PREFIX")]
    pub id_prefix: Option<String>,

    /// Verify candidates on a single thread.
    #[arg(long)]
    pub sequential: bool,

    // --- Output Overrides ---
    /// Write compact single-line JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,

    /// List rejected proposals and the reason for each rejection.
    #[arg(long)]
    pub show_rejections: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S request.constraints.min-stability=60
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// One-letter amino-acid sequences to analyze.
    #[arg(required = true, value_name = "SEQUENCE")]
    pub sequences: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn verify_parses_overrides() {
        let cli = Cli::parse_from([
            "helixgen",
            "-vv",
            "verify",
            "-i",
            "batch.json",
            "--min-stability",
            "60",
            "--sequential",
            "-S",
            "verification.id-prefix=hx",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Verify(args) = cli.command else {
            panic!("Expected 'verify' subcommand");
        };
        assert_eq!(args.input, PathBuf::from("batch.json"));
        assert_eq!(args.min_stability, Some(60.0));
        assert!(args.sequential);
        assert_eq!(args.set_values, vec!["verification.id-prefix=hx"]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["helixgen", "-q", "-v", "residues"]);
        assert!(result.is_err());
    }

    #[test]
    fn analyze_requires_a_sequence() {
        assert!(Cli::try_parse_from(["helixgen", "analyze"]).is_err());
        let cli = Cli::parse_from(["helixgen", "analyze", "MKT", "AAAA"]);
        let Commands::Analyze(args) = cli.command else {
            panic!("Expected 'analyze' subcommand");
        };
        assert_eq!(args.sequences, vec!["MKT", "AAAA"]);
    }
}
