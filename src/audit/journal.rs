//! Append-only change journal
//!
//! One JSON document per line. Reading streams the documents back in the
//! order they were appended.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde_json::Deserializer;

use crate::error::{BudgetError, BudgetResult};

use super::change::ChangeRecord;

/// The journal file for one budget
#[derive(Debug, Clone)]
pub struct AuditJournal {
    path: PathBuf,
}

impl AuditJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single line
    pub fn append(&self, record: &ChangeRecord) -> BudgetResult<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;
        file.flush()?;
        Ok(())
    }

    /// Every record, oldest first; a missing journal is empty
    pub fn records(&self) -> BudgetResult<Vec<ChangeRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        Deserializer::from_reader(BufReader::new(file))
            .into_iter::<ChangeRecord>()
            .enumerate()
            .map(|(index, record)| {
                record.map_err(|e| {
                    BudgetError::Json(format!(
                        "{}: record #{}: {}",
                        self.path.display(),
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// The newest `count` records, oldest first, and how many exist in all
    pub fn tail(&self, count: usize) -> BudgetResult<(Vec<ChangeRecord>, usize)> {
        let mut records = self.records()?;
        let total = records.len();
        let recent = records.split_off(total.saturating_sub(count));
        Ok((recent, total))
    }
}
