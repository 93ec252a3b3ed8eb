#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use directory_checksum::cli::Args;
use directory_checksum::fs::OsFilesystem;
use directory_checksum::{scan_directory, ScanConfig, UnsupportedPolicy};
use std::io::Write as _;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse().validated();
    init_logging(&args);

    if let Err(e) = run_app(&args) {
        eprintln!("directory-checksum: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("directory_checksum={}", args.log_level())));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_app(args: &Args) -> Result<()> {
    let config = ScanConfig {
        root: args.path.clone(),
        fs: &OsFilesystem,
        unsupported: if args.strict {
            UnsupportedPolicy::Fail
        } else {
            UnsupportedPolicy::Skip
        },
    };

    let mut scan = scan_directory(&config).context("unable to scan the directory")?;
    scan.tree
        .compute_checksums()
        .context("unexpected error while computing directory checksums")?;
    let output = scan.tree.print_checksums(args.max_depth)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write listing")?;
    Ok(())
}
