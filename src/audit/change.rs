//! Change records
//!
//! A record names the manager operation that ran and lists how each
//! affected category's spent and limit figures moved. The figures come
//! straight from the `Totals` snapshots taken before and after the change,
//! so a record shows the same numbers the views were shown.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Money, Totals};

/// The manager operation behind a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AddCategory,
    UpdateLimit,
    AddExpense,
    Reset,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AddCategory => "add_category",
            Operation::UpdateLimit => "update_limit",
            Operation::AddExpense => "add_expense",
            Operation::Reset => "reset",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One figure before and after; `None` means the category did not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub before: Option<Money>,
    pub after: Option<Money>,
}

impl Shift {
    fn between(before: Option<Money>, after: Option<Money>) -> Option<Self> {
        (before != after).then_some(Self { before, after })
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |value: Option<Money>| value.map_or_else(|| "none".to_string(), |m| m.to_string());
        write!(f, "{} -> {}", side(self.before), side(self.after))
    }
}

/// How one category's totals moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<Shift>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Shift>,
}

impl fmt::Display for CategoryDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        let mut sep = " ";
        if let Some(spent) = &self.spent {
            write!(f, "{}spent {}", sep, spent)?;
            sep = ", ";
        }
        if let Some(limit) = &self.limit {
            write!(f, "{}limit {}", sep, limit)?;
        }
        Ok(())
    }
}

/// Every category whose spent or limit figure differs between two snapshots,
/// in name order
pub fn diff_totals(before: &Totals, after: &Totals) -> Vec<CategoryDelta> {
    let names: BTreeSet<&String> = before
        .limit_by_category
        .keys()
        .chain(before.spending_by_category.keys())
        .chain(after.limit_by_category.keys())
        .chain(after.spending_by_category.keys())
        .collect();

    names
        .into_iter()
        .filter_map(|name| {
            let spent = Shift::between(
                before.spending_by_category.get(name).copied(),
                after.spending_by_category.get(name).copied(),
            );
            let limit = Shift::between(
                before.limit_by_category.get(name).copied(),
                after.limit_by_category.get(name).copied(),
            );
            (spent.is_some() || limit.is_some()).then(|| CategoryDelta {
                category: name.clone(),
                spent,
                limit,
            })
        })
        .collect()
}

/// One accepted mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub at: DateTime<Utc>,
    pub operation: Operation,
    /// Expense description or reset summary
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    pub deltas: Vec<CategoryDelta>,
}

impl ChangeRecord {
    /// Record `operation` as the difference between two snapshots
    pub fn between(operation: Operation, before: &Totals, after: &Totals) -> Self {
        Self {
            at: Utc::now(),
            operation,
            note: String::new(),
            deltas: diff_totals(before, after),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// The delta for one category, if the change touched it
    pub fn delta(&self, category: &str) -> Option<&CategoryDelta> {
        self.deltas.iter().find(|d| d.category == category)
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%Y-%m-%d %H:%M:%S"), self.operation)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        for delta in &self.deltas {
            write!(f, "\n  {}", delta)?;
        }
        Ok(())
    }
}
