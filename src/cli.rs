use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  directory-checksum .
  directory-checksum --max-depth 0 /srv/data
  directory-checksum --max-depth=5 --strict ./build";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "directory-checksum",
    version,
    about = "Compute a deterministic checksum of a directory tree",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Absolute or relative path of the directory to scan (may be `.`)
    pub path: PathBuf,

    /// Max directory depth (level) of the listing to be printed
    #[arg(
        long = "max-depth",
        default_value_t = 2,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(usize)
    )]
    pub max_depth: usize,

    /// Fail on devices, sockets and pipes instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Default log filter implied by `--verbose` / `--quiet`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
