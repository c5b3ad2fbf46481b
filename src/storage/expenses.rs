//! In-memory expense ledger
//!
//! Append-only sequence of expense records. The ledger does not know about
//! categories; checking that an expense names an existing category is the
//! budget manager's job.
//!
//! The ledger keeps its grand total alongside the records and refuses any
//! expense that would overflow it. Every per-category total is bounded by
//! the grand total, so summing can never overflow afterwards.

use std::collections::BTreeMap;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseValidationError, Money};

/// Append-only list of expenses in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    total: Money,
}

impl From<ExpenseValidationError> for BudgetError {
    fn from(err: ExpenseValidationError) -> Self {
        match err {
            ExpenseValidationError::NonPositiveAmount(amount) => Self::InvalidAmount(amount),
        }
    }
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense dated now
    pub fn add(&mut self, category: &str, description: &str, amount: Money) -> BudgetResult<&Expense> {
        self.push(Expense::new(category, description.trim(), amount))
    }

    /// Append an already-built expense (used when loading from disk)
    pub fn push(&mut self, expense: Expense) -> BudgetResult<&Expense> {
        expense.validate()?;
        self.total = self
            .total
            .checked_add(expense.amount)
            .ok_or(BudgetError::TotalOverflow(expense.amount))?;
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Sum of amounts per category, recomputed from every record
    pub fn totals_by_category(&self) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals
                .entry(expense.category.clone())
                .or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> Money {
        self.total
    }

    /// All expenses in insertion order
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &Expense> + '_ {
        self.expenses.iter()
    }

    /// Expenses charged to one category, in insertion order
    pub fn for_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Expense> + 'a {
        let category = category.to_owned();
        self.expenses.iter().filter(move |e| e.category == category)
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_totals() {
        let mut ledger = ExpenseLedger::new();
        ledger.add("Food", "Lunch", Money::from_units(15)).unwrap();
        ledger.add("Food", "Dinner", Money::from_cents(2250)).unwrap();
        ledger.add("Transport", "Bus", Money::from_units(3)).unwrap();

        let totals = ledger.totals_by_category();
        assert_eq!(totals["Food"], Money::from_cents(3750));
        assert_eq!(totals["Transport"], Money::from_units(3));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut ledger = ExpenseLedger::new();

        let err = ledger.add("Food", "", Money::zero()).unwrap_err();
        assert_eq!(err, BudgetError::InvalidAmount(Money::zero()));

        let err = ledger.add("Food", "", Money::from_cents(-100)).unwrap_err();
        assert_eq!(err, BudgetError::InvalidAmount(Money::from_cents(-100)));

        assert!(ledger.is_empty());
    }

    #[test]
    fn test_ledger_does_not_check_categories() {
        let mut ledger = ExpenseLedger::new();
        assert!(ledger.add("Anything", "", Money::from_units(1)).is_ok());
    }

    #[test]
    fn test_iteration_order() {
        let mut ledger = ExpenseLedger::new();
        ledger.add("Food", "first", Money::from_units(1)).unwrap();
        ledger.add("Bills", "second", Money::from_units(2)).unwrap();
        ledger.add("Food", "third", Money::from_units(3)).unwrap();

        let all: Vec<_> = ledger.all().map(|e| e.description.as_str()).collect();
        assert_eq!(all, vec!["first", "second", "third"]);

        let food: Vec<_> = ledger
            .for_category("Food")
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(food, vec!["first", "third"]);

        let newest = ledger.all().next_back().unwrap();
        assert_eq!(newest.description, "third");
    }

    #[test]
    fn test_for_category_outlives_the_name() {
        let mut ledger = ExpenseLedger::new();
        ledger.add("Food", "Lunch", Money::from_units(15)).unwrap();

        let found: Vec<&Expense> = {
            let name = String::from("Food");
            ledger.for_category(&name).collect()
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Lunch");
    }

    #[test]
    fn test_overflowing_expense_rejected() {
        let mut ledger = ExpenseLedger::new();
        let huge = Money::parse("90000000000000000").unwrap();
        ledger.add("Food", "a", huge).unwrap();

        let err = ledger.add("Food", "b", huge).unwrap_err();
        assert_eq!(err, BudgetError::TotalOverflow(huge));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), huge);
        assert_eq!(ledger.totals_by_category()["Food"], huge);

        // A different category still counts against the grand total
        assert!(ledger.add("Bills", "c", huge).is_err());
        assert!(ledger.add("Bills", "d", Money::from_units(1)).is_ok());
        assert_eq!(ledger.total(), huge + Money::from_units(1));
    }

    #[test]
    fn test_empty_ledger_has_no_totals() {
        assert!(ExpenseLedger::new().totals_by_category().is_empty());
    }
}
