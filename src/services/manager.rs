//! Budget manager
//!
//! The single authority over the budget state. Every mutation follows the
//! same sequence:
//!
//! 1. validate and apply to the in-memory stores (rejections stop here and
//!    leave state, file and observers untouched)
//! 2. write the whole state to disk
//! 3. append a change record to the journal
//! 4. notify observers with a fresh `Totals` snapshot
//!
//! A failed write in step 2 is returned to the caller after steps 3 and 4
//! have run: memory is authoritative and views must match it, but the
//! caller needs to know the disk is behind.

use std::fmt;

use tracing::{debug, info, warn};

use crate::audit::{AuditJournal, ChangeRecord, Operation};
use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, CategorySummary, Expense, Money, Totals};
use crate::storage::{BudgetState, Persistence};

use super::observer::{ObserverRegistry, SubscriptionId};

/// How the state was obtained at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The data file existed and was valid
    Loaded,
    /// No data file existed; a new one was created from the defaults
    Created,
    /// The data file was unreadable or corrupt; started from an empty state
    Recovered,
}

/// Owns the budget state and keeps disk and views in step with it
pub struct BudgetManager {
    state: BudgetState,
    persistence: Persistence,
    observers: ObserverRegistry,
    journal: Option<AuditJournal>,
    defaults: Vec<Category>,
    origin: LoadOrigin,
}

impl BudgetManager {
    /// Load the budget from `persistence`, falling back instead of failing
    ///
    /// - missing file: start from `defaults` and create the file right away
    /// - corrupt or unreadable file: start empty; the file is left as it is
    ///   until the next successful save replaces it
    pub fn open(persistence: Persistence, defaults: Vec<Category>) -> Self {
        let (state, origin) = if persistence.exists() {
            match persistence.load() {
                Ok(state) => (state, LoadOrigin::Loaded),
                Err(err) => {
                    warn!(
                        path = %persistence.path().display(),
                        error = %err,
                        "budget data unusable, starting from an empty budget"
                    );
                    (BudgetState::new(), LoadOrigin::Recovered)
                }
            }
        } else {
            (state_from_defaults(&defaults), LoadOrigin::Created)
        };

        let manager = Self {
            state,
            persistence,
            observers: ObserverRegistry::new(),
            journal: None,
            defaults,
            origin,
        };

        if origin == LoadOrigin::Created {
            if let Err(err) = manager.persistence.save(&manager.state) {
                warn!(error = %err, "could not create budget data file");
            }
        }

        info!(
            origin = ?manager.origin,
            categories = manager.state.categories.len(),
            expenses = manager.state.expenses.len(),
            "budget ready"
        );

        manager
    }

    /// Open the budget stored under `paths`, configured by `settings`
    pub fn from_paths(paths: &BudgetPaths, settings: &Settings) -> Self {
        Self::open(
            Persistence::new(paths.data_file()),
            settings.starting_categories(),
        )
        .with_journal(AuditJournal::new(paths.audit_log()))
    }

    /// Record every accepted mutation in a change journal
    pub fn with_journal(mut self, journal: AuditJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    // === Mutations ===

    /// Add a new category with a spending limit
    pub fn add_category(&mut self, name: &str, limit: Money) -> BudgetResult<()> {
        let before = self.journal_snapshot();
        let category = self.state.categories.add(name, limit)?;
        debug!(category = %category.name, limit = %category.limit, "category added");

        self.commit(Operation::AddCategory, before, String::new())
    }

    /// Change the spending limit of an existing category
    pub fn update_limit(&mut self, name: &str, new_limit: Money) -> BudgetResult<()> {
        let before = self.journal_snapshot();
        let previous = self.state.categories.update_limit(name, new_limit)?;
        debug!(category = name, from = %previous, to = %new_limit, "limit updated");

        self.commit(Operation::UpdateLimit, before, String::new())
    }

    /// Record an expense against an existing category
    pub fn add_expense(&mut self, category: &str, description: &str, amount: Money) -> BudgetResult<()> {
        if !self.state.categories.contains(category) {
            return Err(BudgetError::category_not_found(category));
        }

        let before = self.journal_snapshot();
        let note = self
            .state
            .expenses
            .add(category, description, amount)?
            .description
            .clone();
        debug!(category, amount = %amount, "expense added");

        self.commit(Operation::AddExpense, before, note)
    }

    /// Discard everything and start over from the default categories, if any
    pub fn reset(&mut self) -> BudgetResult<()> {
        let before = self.journal_snapshot();
        let summary = format!(
            "discarded {} categories and {} expenses",
            self.state.categories.len(),
            self.state.expenses.len()
        );
        self.state = state_from_defaults(&self.defaults);
        info!("{}", summary);

        self.commit(Operation::Reset, before, summary)
    }

    /// Write the current state to disk
    ///
    /// Mutations already save on their own; this is for retrying after an
    /// I/O failure.
    pub fn save(&self) -> BudgetResult<()> {
        self.persistence.save(&self.state)
    }

    // === Queries ===

    /// Spending and limits for every category
    pub fn get_totals(&self) -> Totals {
        let mut spending_by_category = self.state.expenses.totals_by_category();
        let limit_by_category: std::collections::BTreeMap<String, Money> = self
            .state
            .categories
            .limits()
            .map(|(name, limit)| (name.to_string(), limit))
            .collect();

        for name in limit_by_category.keys() {
            spending_by_category
                .entry(name.clone())
                .or_insert_with(Money::zero);
        }

        Totals {
            spending_by_category,
            limit_by_category,
        }
    }

    /// Spent, limit and remaining for one category
    pub fn category_summary(&self, name: &str) -> BudgetResult<CategorySummary> {
        let category = self
            .state
            .categories
            .get(name)
            .ok_or_else(|| BudgetError::category_not_found(name))?;

        let spent = self.state.expenses.for_category(name).map(|e| e.amount).sum();
        Ok(CategorySummary::new(name, spent, category.limit))
    }

    /// Expenses charged to one category, oldest first
    pub fn expenses_for_category(&self, name: &str) -> BudgetResult<Vec<&Expense>> {
        if !self.state.categories.contains(name) {
            return Err(BudgetError::category_not_found(name));
        }
        Ok(self.state.expenses.for_category(name).collect())
    }

    /// The most recent `count` expenses, newest first
    pub fn recent_expenses(&self, count: usize) -> Vec<&Expense> {
        self.state.expenses.all().rev().take(count).collect()
    }

    /// Category names sorted alphabetically
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.state.categories.limits().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }

    /// Categories in the order they were created
    pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.state.categories.iter()
    }

    /// Whether a category exists
    pub fn has_category(&self, name: &str) -> bool {
        self.state.categories.contains(name)
    }

    /// Read-only view of the whole state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// How the state was obtained at startup
    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// Categories a fresh or reset budget starts with
    pub fn default_categories(&self) -> &[Category] {
        &self.defaults
    }

    /// Path of the budget data file
    pub fn data_path(&self) -> &std::path::Path {
        self.persistence.path()
    }

    // === Observers ===

    /// Register a view to be told about every change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Totals) + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Stop notifying a view
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of notification rounds sent to observers
    pub fn notification_count(&self) -> u64 {
        self.observers.notification_count()
    }

    /// Totals before a mutation, taken only when there is a journal to feed
    fn journal_snapshot(&self) -> Option<Totals> {
        self.journal.as_ref().map(|_| self.get_totals())
    }

    /// Persist, journal and notify after an accepted mutation
    fn commit(&mut self, operation: Operation, before: Option<Totals>, note: String) -> BudgetResult<()> {
        let saved = self.persistence.save(&self.state);
        if let Err(err) = &saved {
            warn!(error = %err, "budget changed in memory but could not be saved");
        }

        let totals = self.get_totals();

        if let (Some(journal), Some(before)) = (&self.journal, before) {
            let record = ChangeRecord::between(operation, &before, &totals).with_note(note);
            if let Err(err) = journal.append(&record) {
                warn!(operation = %operation, error = %err, "could not append change record");
            }
        }

        self.observers.notify(&totals);

        saved
    }
}

/// Build a state holding the given categories, skipping invalid ones
fn state_from_defaults(defaults: &[Category]) -> BudgetState {
    let mut state = BudgetState::new();
    for category in defaults {
        if let Err(err) = state.categories.add(&category.name, category.limit) {
            warn!(category = %category.name, error = %err, "skipping default category");
        }
    }
    state
}

impl fmt::Debug for BudgetManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BudgetManager")
            .field("path", &self.persistence.path())
            .field("origin", &self.origin)
            .field("categories", &self.state.categories.len())
            .field("expenses", &self.state.expenses.len())
            .field("observers", &self.observers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn create_test_manager() -> (TempDir, BudgetManager) {
        let temp_dir = TempDir::new().unwrap();
        let manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            Vec::new(),
        );
        (temp_dir, manager)
    }

    fn reopen(temp_dir: &TempDir) -> BudgetManager {
        BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            Vec::new(),
        )
    }

    fn counting_observer(manager: &mut BudgetManager) -> Rc<RefCell<Vec<Totals>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        manager.subscribe(move |totals| sink.borrow_mut().push(totals.clone()));
        seen
    }

    fn file_contents(manager: &BudgetManager) -> String {
        fs::read_to_string(manager.data_path()).unwrap()
    }

    #[test]
    fn test_fresh_start_creates_file() {
        let (_temp_dir, manager) = create_test_manager();
        assert_eq!(manager.origin(), LoadOrigin::Created);
        assert!(manager.data_path().exists());
        assert_eq!(manager.get_totals(), Totals::default());
    }

    #[test]
    fn test_default_settings_start_empty_and_run_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut manager = BudgetManager::from_paths(&paths, &Settings::default());

        assert_eq!(manager.origin(), LoadOrigin::Created);
        assert_eq!(manager.get_totals(), Totals::default());

        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(15)).unwrap();
        let totals = manager.get_totals();
        assert_eq!(totals.spending_by_category.len(), 1);
        assert_eq!(totals.spent("Food"), Money::from_units(15));
        assert_eq!(totals.limit("Food"), Some(Money::from_units(200)));
    }

    #[test]
    fn test_fresh_start_seeds_defaults_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            seed_defaults: true,
            ..Settings::default()
        };
        let manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            settings.starting_categories(),
        );

        assert_eq!(manager.get_totals().category_count(), 5);
        assert_eq!(manager.get_totals().limit("Bills"), Some(Money::from_units(400)));
        assert_eq!(reopen(&temp_dir).get_totals(), manager.get_totals());
    }

    #[test]
    fn test_scenario_food_budget() {
        let (_temp_dir, mut manager) = create_test_manager();

        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(15)).unwrap();

        let totals = manager.get_totals();
        assert_eq!(totals.spending_by_category.len(), 1);
        assert_eq!(totals.spending_by_category["Food"], Money::from_units(15));
        assert_eq!(totals.limit_by_category.len(), 1);
        assert_eq!(totals.limit_by_category["Food"], Money::from_units(200));

        manager.update_limit("Food", Money::from_units(150)).unwrap();
        let totals = manager.get_totals();
        assert_eq!(totals.limit_by_category["Food"], Money::from_units(150));
        assert_eq!(totals.spending_by_category["Food"], Money::from_units(15));
    }

    #[test]
    fn test_duplicate_category_leaves_state_unchanged() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(100)).unwrap();
        let seen = counting_observer(&mut manager);
        let before_file = file_contents(&manager);
        let before_state = manager.state().clone();

        let err = manager.add_category("Food", Money::from_units(100)).unwrap_err();
        assert_eq!(err, BudgetError::DuplicateCategory("Food".into()));

        assert_eq!(manager.state(), &before_state);
        assert_eq!(file_contents(&manager), before_file);
        assert!(seen.borrow().is_empty());
        assert_eq!(manager.category_names(), vec!["Food"]);
    }

    #[test]
    fn test_unknown_category_expense_rejected() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(100)).unwrap();
        let seen = counting_observer(&mut manager);
        let before_file = file_contents(&manager);

        let err = manager
            .add_expense("Unknown", "x", Money::from_units(10))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(manager.state().expenses.len(), 0);
        assert_eq!(file_contents(&manager), before_file);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_every_rejection_is_side_effect_free() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(100)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(5)).unwrap();
        let before_state = manager.state().clone();
        let before_file = file_contents(&manager);
        let before_count = manager.notification_count();

        let failures = [
            manager.add_category("Food", Money::from_units(1)),
            manager.add_category("Rent", Money::from_cents(-1)),
            manager.add_category("  ", Money::from_units(1)),
            manager.update_limit("Rent", Money::from_units(1)),
            manager.update_limit("Food", Money::from_cents(-100)),
            manager.add_expense("Rent", "", Money::from_units(1)),
            manager.add_expense("Food", "", Money::zero()),
            manager.add_expense("Food", "", Money::from_cents(-1)),
        ];

        for result in failures {
            assert!(result.unwrap_err().is_validation());
        }
        assert_eq!(manager.state(), &before_state);
        assert_eq!(file_contents(&manager), before_file);
        assert_eq!(manager.notification_count(), before_count);
    }

    #[test]
    fn test_totals_increase_by_exact_amount() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_category("Bills", Money::from_units(400)).unwrap();
        manager.add_expense("Bills", "Power", Money::from_cents(4999)).unwrap();

        let before = manager.get_totals();
        manager.add_expense("Food", "Snack", Money::from_cents(333)).unwrap();
        let after = manager.get_totals();

        assert_eq!(after.spent("Food"), before.spent("Food") + Money::from_cents(333));
        assert_eq!(after.spent("Bills"), before.spent("Bills"));
        assert_eq!(after.limit_by_category, before.limit_by_category);
    }

    #[test]
    fn test_totals_match_ledger() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_category("Fun", Money::from_units(50)).unwrap();
        manager.add_category("Idle", Money::from_units(10)).unwrap();
        for cents in [101, 250, 999, 1] {
            manager.add_expense("Food", "", Money::from_cents(cents)).unwrap();
        }
        manager.add_expense("Fun", "", Money::from_cents(7000)).unwrap();

        let totals = manager.get_totals();
        for name in manager.category_names() {
            let expected: Money = manager
                .state()
                .expenses
                .all()
                .filter(|e| e.category == name)
                .map(|e| e.amount)
                .sum();
            assert_eq!(totals.spent(name), expected);
        }
        assert_eq!(totals.spending_by_category["Idle"], Money::zero());
        assert_eq!(totals.over_limit(), vec!["Fun"]);
    }

    #[test]
    fn test_round_trip_through_disk() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_category("Transport", Money::from_cents(15050)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(15)).unwrap();
        manager.add_expense("Transport", "Bus", Money::from_cents(275)).unwrap();
        manager.update_limit("Food", Money::from_units(180)).unwrap();
        manager.save().unwrap();

        let reloaded = reopen(&temp_dir);
        assert_eq!(reloaded.origin(), LoadOrigin::Loaded);
        assert_eq!(reloaded.get_totals(), manager.get_totals());
        assert_eq!(reloaded.state(), manager.state());
    }

    #[test]
    fn test_every_mutation_is_written_through() {
        let (temp_dir, mut manager) = create_test_manager();
        manager.add_category("Food", Money::from_units(200)).unwrap();
        assert!(reopen(&temp_dir).has_category("Food"));

        manager.add_expense("Food", "Lunch", Money::from_units(15)).unwrap();
        assert_eq!(reopen(&temp_dir).get_totals().spent("Food"), Money::from_units(15));

        manager.update_limit("Food", Money::from_units(150)).unwrap();
        assert_eq!(
            reopen(&temp_dir).get_totals().limit("Food"),
            Some(Money::from_units(150))
        );
    }

    #[test]
    fn test_observers_notified_after_each_mutation() {
        let (_temp_dir, mut manager) = create_test_manager();
        let seen = counting_observer(&mut manager);

        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(15)).unwrap();
        manager.update_limit("Food", Money::from_units(150)).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].limit("Food"), Some(Money::from_units(200)));
        assert_eq!(seen[1].spent("Food"), Money::from_units(15));
        assert_eq!(seen[2], manager.get_totals());
        assert_eq!(manager.notification_count(), 3);
    }

    #[test]
    fn test_unsubscribed_observer_not_called() {
        let (_temp_dir, mut manager) = create_test_manager();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = manager.subscribe(move |_| *sink.borrow_mut() += 1);

        manager.add_category("Food", Money::from_units(1)).unwrap();
        assert!(manager.unsubscribe(id));
        manager.add_category("Bills", Money::from_units(1)).unwrap();

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_data.json");
        fs::write(
            &path,
            r#"{"categories": {"Food": 200}, "expenses": [{"category": "Ghost", "description": "", "amount": 5}]}"#,
        )
        .unwrap();

        let manager = BudgetManager::open(
            Persistence::new(&path),
            vec![Category::new("Food", Money::from_units(300))],
        );

        assert_eq!(manager.origin(), LoadOrigin::Recovered);
        assert_eq!(manager.get_totals(), Totals::default());
        // Left alone until the next save
        assert!(fs::read_to_string(&path).unwrap().contains("Ghost"));
    }

    #[test]
    fn test_recovered_manager_overwrites_on_next_mutation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget_data.json");
        fs::write(&path, "garbage").unwrap();

        let mut manager = BudgetManager::open(Persistence::new(&path), Vec::new());
        manager.add_category("Food", Money::from_units(10)).unwrap();

        let reloaded = reopen(&temp_dir);
        assert_eq!(reloaded.origin(), LoadOrigin::Loaded);
        assert!(reloaded.has_category("Food"));
    }

    #[test]
    fn test_save_failure_surfaces_after_applying() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut manager =
            BudgetManager::open(Persistence::new(blocker.join("budget_data.json")), Vec::new());
        let seen = counting_observer(&mut manager);

        let err = manager.add_category("Food", Money::from_units(10)).unwrap_err();
        assert!(err.is_io());
        assert!(manager.has_category("Food"));
        assert_eq!(seen.borrow().len(), 1);
        assert!(manager.save().unwrap_err().is_io());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            vec![Category::new("Food", Money::from_units(300))],
        );
        manager.add_category("Hobbies", Money::from_units(50)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(12)).unwrap();
        let seen = counting_observer(&mut manager);

        manager.reset().unwrap();

        assert_eq!(manager.category_names(), vec!["Food"]);
        assert!(manager.state().expenses.is_empty());
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(reopen(&temp_dir).state(), manager.state());
    }

    #[test]
    fn test_category_queries() {
        let (_temp_dir, mut manager) = create_test_manager();
        manager.add_category("Zoo", Money::from_units(20)).unwrap();
        manager.add_category("Food", Money::from_units(20)).unwrap();
        manager.add_expense("Food", "one", Money::from_units(5)).unwrap();
        manager.add_expense("Zoo", "two", Money::from_units(30)).unwrap();
        manager.add_expense("Food", "three", Money::from_units(6)).unwrap();

        assert_eq!(manager.category_names(), vec!["Food", "Zoo"]);
        let created: Vec<_> = manager.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(created, vec!["Zoo", "Food"]);

        let food = manager.category_summary("Food").unwrap();
        assert_eq!(food.spent, Money::from_units(11));
        assert_eq!(food.remaining, Money::from_units(9));

        let zoo = manager.category_summary("Zoo").unwrap();
        assert!(zoo.is_over_limit());
        assert!(manager.category_summary("Nope").unwrap_err().is_not_found());

        let food_expenses: Vec<_> = manager
            .expenses_for_category("Food")
            .unwrap()
            .into_iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(food_expenses, vec!["one", "three"]);

        let recent: Vec<_> = manager
            .recent_expenses(2)
            .into_iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(recent, vec!["three", "two"]);
    }

    #[test]
    fn test_overflowing_expense_is_rejected_before_saving() {
        let (temp_dir, mut manager) = create_test_manager();
        let huge = Money::parse("90000000000000000").unwrap();
        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_expense("Food", "a", huge).unwrap();
        let before_file = file_contents(&manager);
        let before_count = manager.notification_count();

        let err = manager.add_expense("Food", "b", huge).unwrap_err();
        assert_eq!(err, BudgetError::TotalOverflow(huge));
        assert!(err.is_validation());
        assert_eq!(file_contents(&manager), before_file);
        assert_eq!(manager.notification_count(), before_count);
        assert_eq!(manager.get_totals().spent("Food"), huge);

        let reloaded = reopen(&temp_dir);
        assert_eq!(reloaded.origin(), LoadOrigin::Loaded);
        assert_eq!(reloaded.get_totals().spent("Food"), huge);
    }

    #[test]
    fn test_journal_records_totals_movement() {
        let temp_dir = TempDir::new().unwrap();
        let journal = AuditJournal::new(temp_dir.path().join("audit.log"));
        let mut manager = BudgetManager::open(
            Persistence::new(temp_dir.path().join("budget_data.json")),
            Vec::new(),
        )
        .with_journal(journal.clone());

        manager.add_category("Food", Money::from_units(200)).unwrap();
        manager.add_expense("Food", "Lunch", Money::from_units(15)).unwrap();
        manager.update_limit("Food", Money::from_units(150)).unwrap();
        let _ = manager.add_category("Food", Money::from_units(1));
        manager.reset().unwrap();

        let records = journal.records().unwrap();
        let operations: Vec<_> = records.iter().map(|r| r.operation).collect();
        assert_eq!(
            operations,
            vec![
                Operation::AddCategory,
                Operation::AddExpense,
                Operation::UpdateLimit,
                Operation::Reset
            ]
        );

        let spent = records[1].delta("Food").unwrap().spent.unwrap();
        assert_eq!(spent.before, Some(Money::zero()));
        assert_eq!(spent.after, Some(Money::from_units(15)));
        assert_eq!(records[1].note, "Lunch");

        let limit = records[2].delta("Food").unwrap().limit.unwrap();
        assert_eq!(limit.before, Some(Money::from_units(200)));
        assert_eq!(limit.after, Some(Money::from_units(150)));

        let removed = records[3].delta("Food").unwrap();
        assert_eq!(removed.limit.unwrap().after, None);
        assert_eq!(records[3].note, "discarded 1 categories and 1 expenses");
    }
}
