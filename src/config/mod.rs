//! Configuration module for SmartBudget
//!
//! This module provides configuration management including:
//! - Platform data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{DefaultCategory, Settings};
