//! User settings for SmartBudget
//!
//! Manages user preferences: currency symbol, the optional categories a
//! fresh budget starts with, and how much history the overview shows.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{Category, Money};

/// A category created on first run and on reset when seeding is on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCategory {
    pub name: String,
    pub limit: Money,
}

impl DefaultCategory {
    fn new(name: &str, units: i64) -> Self {
        Self {
            name: name.to_string(),
            limit: Money::from_units(units),
        }
    }
}

/// User settings for SmartBudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether a fresh or reset budget starts with `default_categories`
    /// instead of empty. Off unless the user turns it on.
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,

    /// Categories a fresh budget starts with
    #[serde(default = "default_categories")]
    pub default_categories: Vec<DefaultCategory>,

    /// Number of expenses shown in overviews
    #[serde(default = "default_recent_expense_count")]
    pub recent_expense_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_seed_defaults() -> bool {
    false
}

fn default_categories() -> Vec<DefaultCategory> {
    vec![
        DefaultCategory::new("Food", 300),
        DefaultCategory::new("Transport", 150),
        DefaultCategory::new("Bills", 400),
        DefaultCategory::new("Entertainment", 100),
        DefaultCategory::new("Other", 100),
    ]
}

fn default_recent_expense_count() -> usize {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            seed_defaults: default_seed_defaults(),
            default_categories: default_categories(),
            recent_expense_count: default_recent_expense_count(),
        }
    }
}

impl Settings {
    /// Categories a fresh budget should start with
    pub fn starting_categories(&self) -> Vec<Category> {
        if !self.seed_defaults {
            return Vec::new();
        }

        self.default_categories
            .iter()
            .map(|d| Category::new(d.name.clone(), d.limit))
            .collect()
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, falling back to the defaults if the file is unusable
    ///
    /// A broken settings file must not keep the budget from opening.
    pub fn load_or_default(paths: &BudgetPaths) -> Self {
        Self::load_or_create(paths).unwrap_or_else(|err| {
            warn!(
                path = %paths.settings_file().display(),
                error = %err,
                "settings file unusable, using default settings"
            );
            Self::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
