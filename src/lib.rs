//! SmartBudget - personal budget tracking with live views
//!
//! This library keeps a set of spending categories (each with a limit) and
//! an append-only list of expenses. Every accepted change is written
//! straight to disk and then pushed to the views that subscribed to it, so
//! what is on screen, in memory and on disk never disagree.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, totals)
//! - `storage`: In-memory stores and the JSON data file
//! - `services`: The budget manager and its observer registry
//! - `audit`: Journal of accepted changes and how they moved the totals
//! - `logging`: Diagnostic logging setup
//! - `cli`, `display`: Command-line interface
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use smartbudget::config::{BudgetPaths, Settings};
//! use smartbudget::services::BudgetManager;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_default(&paths);
//! let mut manager = BudgetManager::from_paths(&paths, &settings);
//! manager.subscribe(|totals| println!("spent {}", totals.total_spent()));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
