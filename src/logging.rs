//! Diagnostic logging
//!
//! Command-line runs log to stderr. The TUI owns the terminal, so while it
//! runs, logs go to a file instead. `RUST_LOG` overrides the default level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::BudgetResult;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "smartbudget=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Log to stderr
pub fn init_stderr() {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Log to `path`, appending
pub fn init_file(path: &Path) -> BudgetResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
    Ok(())
}
