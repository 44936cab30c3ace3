//! `restore-upstream`: force-restore the tracked file list from upstream.
//!
//! Per-file failures are reported on stderr and do not change the exit code.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use maint_core::config::{CliOverrides, MaintConfig};
use upstream_restore::{restore_args, run_restore, GitRestore, RESTORE_FILES};

/// Restore the tracked file list from an upstream ref.
#[derive(Parser, Debug)]
#[command(name = "restore-upstream", version)]
#[command(
    about = "Force-restore a fixed list of files from the upstream branch",
    long_about = None
)]
struct Cli {
    /// Git ref to restore from (default: configured ref, `upstream/main`).
    #[arg(long)]
    source: Option<String>,

    /// Print the git commands without running them.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    maint_core::tracing::init_tracing();
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let overrides = CliOverrides {
        restore_source_ref: cli.source,
    };
    let config = MaintConfig::load_restore(&cwd, Some(&overrides))
        .context("Failed to load configuration")?;
    let source_ref = config.effective_source_ref();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        for path in RESTORE_FILES {
            writeln!(out, "git {}", restore_args(source_ref, path).join(" "))?;
        }
        return Ok(());
    }

    let backend = GitRestore::new()?;
    let stderr = io::stderr();
    let mut err = stderr.lock();
    run_restore(RESTORE_FILES, source_ref, &backend, &mut out, &mut err)?;

    Ok(())
}
