//! Budget file persistence
//!
//! The whole budget state lives in one JSON document:
//!
//! ```json
//! {
//!   "categories": { "Food": 200.0, "Transport": 150.0 },
//!   "expenses": [
//!     { "category": "Food", "description": "Lunch", "amount": 15.0, "date": "..." }
//!   ]
//! }
//! ```
//!
//! Every save rewrites the document from the in-memory snapshot. Loading
//! rebuilds the state through the same stores the manager uses, so a file
//! that loads successfully always satisfies the in-memory invariants. Files
//! that list categories as `[{"name": .., "limit": ..}]` are also accepted.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Expense, Money};

use super::categories::CategoryStore;
use super::expenses::ExpenseLedger;
use super::file_io::{read_json, write_json_atomic};

/// The complete budget: categories plus the expense ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetState {
    pub categories: CategoryStore,
    pub expenses: ExpenseLedger,
}

impl BudgetState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }
}

/// On-disk form used for writing; borrows the live state
#[derive(Serialize)]
struct BudgetFileRef<'a> {
    #[serde(serialize_with = "serialize_categories")]
    categories: &'a CategoryStore,
    expenses: Vec<&'a Expense>,
}

/// On-disk form used for reading; both fields are required
#[derive(Deserialize)]
struct BudgetFile {
    #[serde(deserialize_with = "deserialize_categories")]
    categories: CategoryStore,
    expenses: Vec<Expense>,
}

impl BudgetFile {
    fn into_state(self) -> BudgetResult<BudgetState> {
        let mut ledger = ExpenseLedger::new();

        for (index, expense) in self.expenses.into_iter().enumerate() {
            if !self.categories.contains(&expense.category) {
                return Err(BudgetError::CorruptState(format!(
                    "expense #{} references unknown category '{}'",
                    index + 1,
                    expense.category
                )));
            }

            ledger.push(expense).map_err(|e| {
                BudgetError::CorruptState(format!("expense #{}: {}", index + 1, e))
            })?;
        }

        Ok(BudgetState {
            categories: self.categories,
            expenses: ledger,
        })
    }
}

fn serialize_categories<S: Serializer>(
    store: &&CategoryStore,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(store.len()))?;
    for (name, limit) in store.limits() {
        map.serialize_entry(name, &limit)?;
    }
    map.end()
}

fn deserialize_categories<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<CategoryStore, D::Error> {
    struct CategoriesVisitor;

    impl<'de> Visitor<'de> for CategoriesVisitor {
        type Value = CategoryStore;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of category name to limit, or a list of {name, limit} objects")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut store = CategoryStore::new();
            while let Some((name, limit)) = access.next_entry::<String, Money>()? {
                store.add(&name, limit).map_err(de::Error::custom)?;
            }
            Ok(store)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut store = CategoryStore::new();
            while let Some(category) = access.next_element::<Category>()? {
                store
                    .add(&category.name, category.limit)
                    .map_err(de::Error::custom)?;
            }
            Ok(store)
        }
    }

    deserializer.deserialize_any(CategoriesVisitor)
}

/// Reads and writes the budget file
#[derive(Debug, Clone)]
pub struct Persistence {
    path: PathBuf,
}

impl Persistence {
    /// Create a persistence layer backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the budget state
    ///
    /// A missing file yields an empty state. A file whose structure does not
    /// match the schema, or whose expenses reference unknown categories,
    /// yields `CorruptState`.
    pub fn load(&self) -> BudgetResult<BudgetState> {
        match read_json::<BudgetFile, _>(&self.path)? {
            Some(file) => {
                let state = file.into_state()?;
                debug!(
                    path = %self.path.display(),
                    categories = state.categories.len(),
                    expenses = state.expenses.len(),
                    "loaded budget file"
                );
                Ok(state)
            }
            None => Ok(BudgetState::new()),
        }
    }

    /// Overwrite the backing file with the full state
    pub fn save(&self, state: &BudgetState) -> BudgetResult<()> {
        let file = BudgetFileRef {
            categories: &state.categories,
            expenses: state.expenses.all().collect(),
        };

        write_json_atomic(&self.path, &file)?;
        debug!(path = %self.path.display(), "saved budget file");
        Ok(())
    }
}
