//! upstream-restore: force-restores a fixed list of files from an upstream ref.
//!
//! Each file is restored independently; a failure is reported and the rest
//! of the list still runs.

pub mod backend;
pub mod files;
pub mod runner;

pub use backend::{restore_args, GitRestore, RestoreBackend};
pub use files::RESTORE_FILES;
pub use runner::{run_restore, RestoreSummary};
