#![forbid(unsafe_code)]
//! Writes shell completions and a man page for `directory-checksum`.
//!
//! Usage: `generate-assets [OUT_DIR]` (defaults to `dist`).

use anyhow::Context;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use directory_checksum::cli::Args;
use std::fs;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    }

    let bin_name = Args::command().get_name().to_string();
    for shell in Shell::value_variants() {
        let mut cmd = Args::command();
        let written = generate_to(*shell, &mut cmd, &bin_name, &completions_dir)?;
        eprintln!("wrote {}", written.display());
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let page_path = man_dir.join(format!("{bin_name}.1"));
    fs::write(&page_path, page)?;
    eprintln!("wrote {}", page_path.display());
    Ok(())
}
