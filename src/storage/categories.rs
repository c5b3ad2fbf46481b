//! In-memory category store
//!
//! Owns the category name -> limit mapping. Names are unique under
//! case-sensitive comparison and iteration follows insertion order. The sum
//! of all limits always fits in `Money`.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, CategoryValidationError, Money};

/// Ordered, name-unique collection of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl From<CategoryValidationError> for BudgetError {
    fn from(err: CategoryValidationError) -> Self {
        match err {
            CategoryValidationError::NegativeLimit(limit) => Self::InvalidLimit(limit),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl CategoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new category
    ///
    /// The name is trimmed before it is checked and stored.
    pub fn add(&mut self, name: &str, limit: Money) -> BudgetResult<&Category> {
        let category = Category::new(name.trim(), limit);
        category.validate()?;

        if self.contains(&category.name) {
            return Err(BudgetError::DuplicateCategory(category.name));
        }
        if !self.limit_fits(None, category.limit) {
            return Err(BudgetError::TotalOverflow(category.limit));
        }

        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Change the limit of an existing category, returning the previous limit
    pub fn update_limit(&mut self, name: &str, new_limit: Money) -> BudgetResult<Money> {
        if !self.contains(name) {
            return Err(BudgetError::category_not_found(name));
        }
        if new_limit.is_negative() {
            return Err(BudgetError::InvalidLimit(new_limit));
        }
        if !self.limit_fits(Some(name), new_limit) {
            return Err(BudgetError::TotalOverflow(new_limit));
        }

        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| BudgetError::category_not_found(name))?;
        Ok(std::mem::replace(&mut category.limit, new_limit))
    }

    /// Whether `limit` can join the other limits without overflowing their sum
    fn limit_fits(&self, replacing: Option<&str>, limit: Money) -> bool {
        self.categories
            .iter()
            .filter(|c| Some(c.name.as_str()) != replacing)
            .try_fold(limit, |acc, c| acc.checked_add(c.limit))
            .is_some()
    }

    /// Check whether a category with exactly this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Get a category by name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// `(name, limit)` pairs in insertion order
    pub fn limits(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.categories.iter().map(|c| (c.name.as_str(), c.limit))
    }

    /// All categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the store holds no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut store = CategoryStore::new();
        store.add("Food", Money::from_units(200)).unwrap();
        store.add("Transport", Money::from_units(150)).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.contains("Food"));
        assert!(!store.contains("food"));
        assert_eq!(store.get("Transport").unwrap().limit, Money::from_units(150));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut store = CategoryStore::new();
        store.add("Food", Money::from_units(200)).unwrap();

        let err = store.add("Food", Money::from_units(100)).unwrap_err();
        assert_eq!(err, BudgetError::DuplicateCategory("Food".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Food").unwrap().limit, Money::from_units(200));
    }

    #[test]
    fn test_names_are_case_sensitive_and_trimmed() {
        let mut store = CategoryStore::new();
        store.add("  Food ", Money::zero()).unwrap();
        assert!(store.contains("Food"));

        store.add("food", Money::zero()).unwrap();
        assert_eq!(store.len(), 2);

        let err = store.add("Food  ", Money::zero()).unwrap_err();
        assert!(matches!(err, BudgetError::DuplicateCategory(_)));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let mut store = CategoryStore::new();

        let err = store.add("Food", Money::from_cents(-1)).unwrap_err();
        assert_eq!(err, BudgetError::InvalidLimit(Money::from_cents(-1)));

        let err = store.add("   ", Money::zero()).unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));

        assert!(store.is_empty());
    }

    #[test]
    fn test_update_limit() {
        let mut store = CategoryStore::new();
        store.add("Food", Money::from_units(200)).unwrap();

        let previous = store.update_limit("Food", Money::from_units(150)).unwrap();
        assert_eq!(previous, Money::from_units(200));
        assert_eq!(store.get("Food").unwrap().limit, Money::from_units(150));

        let err = store.update_limit("Food", Money::from_cents(-5)).unwrap_err();
        assert_eq!(err, BudgetError::InvalidLimit(Money::from_cents(-5)));
        assert_eq!(store.get("Food").unwrap().limit, Money::from_units(150));

        let err = store.update_limit("Rent", Money::zero()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_limit_sum_cannot_overflow() {
        let mut store = CategoryStore::new();
        let huge = Money::parse("90000000000000000").unwrap();
        store.add("Food", huge).unwrap();
        store.add("Bills", Money::from_units(1)).unwrap();

        let err = store.add("Rent", huge).unwrap_err();
        assert_eq!(err, BudgetError::TotalOverflow(huge));
        assert!(!store.contains("Rent"));

        let err = store.update_limit("Bills", huge).unwrap_err();
        assert_eq!(err, BudgetError::TotalOverflow(huge));
        assert_eq!(store.get("Bills").unwrap().limit, Money::from_units(1));

        // Replacing a limit does not count the old value
        store.update_limit("Food", huge).unwrap();
    }

    #[test]
    fn test_limits_in_insertion_order_and_restartable() {
        let mut store = CategoryStore::new();
        store.add("Zoo", Money::from_units(1)).unwrap();
        store.add("Apples", Money::from_units(2)).unwrap();

        let first: Vec<_> = store.limits().collect();
        let second: Vec<_> = store.limits().collect();
        assert_eq!(
            first,
            vec![("Zoo", Money::from_units(1)), ("Apples", Money::from_units(2))]
        );
        assert_eq!(first, second);
    }
}
