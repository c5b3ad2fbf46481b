//! Derived spending summaries
//!
//! `Totals` is the read-only snapshot every view renders from. It is always
//! computed from the expense records, never stored.

use std::collections::BTreeMap;

use serde::Serialize;

use super::money::Money;

/// Per-category spending and limits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of expense amounts per category; every category is present,
    /// with zero when nothing has been spent
    pub spending_by_category: BTreeMap<String, Money>,

    /// Spending limit per category
    pub limit_by_category: BTreeMap<String, Money>,
}

impl Totals {
    /// Amount spent in a category (zero for unknown categories)
    pub fn spent(&self, category: &str) -> Money {
        self.spending_by_category
            .get(category)
            .copied()
            .unwrap_or_default()
    }

    /// Limit of a category, if it exists
    pub fn limit(&self, category: &str) -> Option<Money> {
        self.limit_by_category.get(category).copied()
    }

    /// Summary for a single category, if it exists
    pub fn summary(&self, category: &str) -> Option<CategorySummary> {
        self.limit(category)
            .map(|limit| CategorySummary::new(category, self.spent(category), limit))
    }

    /// Summaries for every category, ordered by name
    pub fn summaries(&self) -> impl Iterator<Item = CategorySummary> + '_ {
        self.limit_by_category
            .iter()
            .map(|(name, limit)| CategorySummary::new(name.as_str(), self.spent(name), *limit))
    }

    /// Total spent across all categories
    pub fn total_spent(&self) -> Money {
        self.spending_by_category.values().copied().sum()
    }

    /// Sum of all category limits
    pub fn total_limit(&self) -> Money {
        self.limit_by_category.values().copied().sum()
    }

    /// Number of categories
    pub fn category_count(&self) -> usize {
        self.limit_by_category.len()
    }

    /// Names of categories whose spending exceeds their limit
    pub fn over_limit(&self) -> Vec<&str> {
        self.limit_by_category
            .iter()
            .filter(|(name, limit)| self.spent(name) > **limit)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Spent, limit and remaining for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub spent: Money,
    pub limit: Money,
    /// `limit - spent`; negative when the category is overspent
    pub remaining: Money,
}

impl CategorySummary {
    pub fn new(name: impl Into<String>, spent: Money, limit: Money) -> Self {
        Self {
            name: name.into(),
            spent,
            limit,
            remaining: limit - spent,
        }
    }

    /// Whether spending has gone past the limit
    pub fn is_over_limit(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Share of the limit already spent, clamped to `0.0..=1.0`
    pub fn used_ratio(&self) -> f64 {
        self.spent.ratio_of(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Totals {
        let mut totals = Totals::default();
        totals
            .limit_by_category
            .insert("Food".into(), Money::from_units(200));
        totals
            .limit_by_category
            .insert("Fun".into(), Money::from_units(50));
        totals
            .spending_by_category
            .insert("Food".into(), Money::from_units(15));
        totals
            .spending_by_category
            .insert("Fun".into(), Money::from_units(60));
        totals
    }

    #[test]
    fn test_lookups() {
        let totals = sample();
        assert_eq!(totals.spent("Food"), Money::from_units(15));
        assert_eq!(totals.spent("Missing"), Money::zero());
        assert_eq!(totals.limit("Food"), Some(Money::from_units(200)));
        assert_eq!(totals.limit("Missing"), None);
        assert_eq!(totals.total_spent(), Money::from_units(75));
        assert_eq!(totals.total_limit(), Money::from_units(250));
        assert_eq!(totals.category_count(), 2);
    }

    #[test]
    fn test_summary_and_over_limit() {
        let totals = sample();
        let food = totals.summary("Food").unwrap();
        assert_eq!(food.remaining, Money::from_units(185));
        assert!(!food.is_over_limit());

        let fun = totals.summary("Fun").unwrap();
        assert_eq!(fun.remaining, Money::from_units(-10));
        assert!(fun.is_over_limit());
        assert_eq!(fun.used_ratio(), 1.0);

        assert_eq!(totals.over_limit(), vec!["Fun"]);
        assert!(totals.summary("Missing").is_none());
    }

    #[test]
    fn test_summaries_ordered_by_name() {
        let names: Vec<String> = sample().summaries().map(|s| s.name).collect();
        assert_eq!(names, vec!["Food", "Fun"]);
    }
}
