//! Contract of the `restore-upstream` binary.

use std::process::{Command, Output};

use upstream_restore::RESTORE_FILES;

fn restore_upstream(cwd: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_restore-upstream"))
        .current_dir(cwd)
        .args(args)
        .env_remove("MAINT_RESTORE_SOURCE_REF")
        .env_remove("MAINT_LOG")
        .output()
        .expect("run restore-upstream")
}

#[test]
fn test_dry_run_lists_commands() {
    let dir = tempfile::tempdir().unwrap();

    let output = restore_upstream(dir.path(), &["--dry-run", "--source", "fork/main"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(output.status.success());
    assert_eq!(lines.len(), RESTORE_FILES.len());
    assert_eq!(
        lines[0],
        format!("git restore --source=fork/main -- {}", RESTORE_FILES[0])
    );
}

#[test]
fn test_dry_run_uses_configured_ref() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("maint.toml"),
        "[restore]\nsource_ref = \"origin/develop\"\n",
    )
    .unwrap();

    let output = restore_upstream(dir.path(), &["--dry-run"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.lines().all(|l| l.starts_with("git restore --source=origin/develop -- ")));
}

#[test]
fn test_failures_keep_success_exit_code() {
    // Not a git repository: every restore fails, the process still exits 0.
    let dir = tempfile::tempdir().unwrap();

    let output = restore_upstream(dir.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert_eq!(
        stderr.lines().filter(|l| l.starts_with("[✘] Failed to restore ")).count(),
        RESTORE_FILES.len()
    );
}

#[test]
fn test_audit_settings_do_not_affect_restore() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("maint.toml"), "[audit]\ndefault_roots = [\"\"]\n").unwrap();

    let output = restore_upstream(dir.path(), &["--dry-run"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().lines().count(),
        RESTORE_FILES.len()
    );
}
