//! Business logic layer
//!
//! `BudgetManager` owns the budget state and is the only way to change it;
//! `ObserverRegistry` fans every change out to the views that subscribed.

pub mod manager;
pub mod observer;

pub use manager::{BudgetManager, LoadOrigin};
pub use observer::{ObserverRegistry, SubscriptionId};
