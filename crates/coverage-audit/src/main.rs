//! `check-coverage`: exit non-zero when any TypeScript source disables
//! istanbul coverage.
//!
//! Exit codes: 0 clean, 1 violations found. Nothing else is fatal: config
//! problems fall back to the compiled default roots.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coverage_audit::{resolve_roots, write_json, write_text, Auditor, ReportFormat};
use maint_core::config::{AuditConfig, MaintConfig};

/// Scan TypeScript sources for `istanbul ignore` directives.
#[derive(Parser, Debug)]
#[command(name = "check-coverage", version)]
#[command(about = "Fail when TypeScript sources disable istanbul coverage", long_about = None)]
struct Cli {
    /// Root directories to scan. Defaults to the configured roots
    /// (`apps` and `packages` unless overridden in maint.toml).
    roots: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> ExitCode {
    maint_core::tracing::init_tracing();
    let cli = Cli::parse();

    let config = if cli.roots.is_empty() {
        load_audit_config()
    } else {
        AuditConfig::default()
    };
    let roots = resolve_roots(cli.roots, &config);

    let report = Auditor::new().audit(&roots);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match cli.format {
        ReportFormat::Text => write_text(&report, &mut out),
        ReportFormat::Json => write_json(&report, &mut out),
    };
    if let Err(err) = written.and_then(|()| out.flush()) {
        tracing::error!(error = %err, "failed to write report");
    }

    if report.has_violations() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// The `[audit]` section from the working directory, or the compiled
/// defaults if it cannot be loaded.
fn load_audit_config() -> AuditConfig {
    let loaded = std::env::current_dir()
        .map_err(|e| e.to_string())
        .and_then(|cwd| MaintConfig::load_audit(&cwd).map_err(|e| e.to_string()));

    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring audit config, using default roots");
            AuditConfig::default()
        }
    }
}
