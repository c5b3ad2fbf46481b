//! Path management for SmartBudget
//!
//! ## Path Resolution Order
//!
//! 1. `SMARTBUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `smartbudget`
//!    (`~/.local/share/smartbudget`, `~/Library/Application Support/smartbudget`,
//!    `%APPDATA%\smartbudget\data`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "SMARTBUDGET_DATA_DIR";

/// Manages all paths used by SmartBudget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all SmartBudget files
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory once at startup
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the budget data file (categories and expenses)
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("budget_data.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the diagnostic log written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("smartbudget.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    ProjectDirs::from("", "", "smartbudget")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine a home directory".into()))
}
