//! Expense model
//!
//! An expense is a single spending event recorded against one category.
//! Expenses are immutable once recorded.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Name of the category this expense is charged to
    pub category: String,

    /// Free-form description ("Lunch", "Bus pass")
    #[serde(default, alias = "desc")]
    pub description: String,

    /// Amount spent, always greater than zero
    pub amount: Money,

    /// When the expense was recorded (absent in older data files)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_date"
    )]
    pub date: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(category: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
            date: Some(Utc::now()),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }

    /// Date formatted for display, or an empty string when unknown
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} ({})", self.amount, self.category)
        } else {
            write!(f, "{} {} ({})", self.amount, self.description, self.category)
        }
    }
}

/// Accept RFC 3339 timestamps and the zone-less ISO form older files used
fn deserialize_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(date.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| de::Error::custom(format!("invalid expense date '{}': {}", raw, e)))
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive ({})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
