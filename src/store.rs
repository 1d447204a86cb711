use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{EtrackerError, Result};
use crate::fmt::plain_amount;
use crate::models::{iso_millis, Expense, ExpensePatch};

pub const HEADER: [&str; 6] = ["id", "description", "amount", "category", "createdAt", "updatedAt"];

/// The whole expense collection for one invocation, backed by a CSV file.
///
/// Mutations only touch memory; callers follow each successful one with
/// [`ExpenseStore::persist`], which rewrites the file in full.
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let expenses = load(&path);
        let next_id = expenses.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        tracing::debug!(path = %path.display(), count = expenses.len(), next_id, "loaded expenses");
        Self {
            path,
            expenses,
            next_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    #[cfg(test)]
    pub fn find(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        category: &str,
        now: DateTime<Utc>,
    ) -> Result<&Expense> {
        if !(amount > 0.0) {
            return Err(EtrackerError::NonPositiveAmount);
        }
        let id = self.next_id();
        let following = id.checked_add(1).ok_or(EtrackerError::IdsExhausted(id))?;
        let expense = Expense {
            id,
            description: description.to_string(),
            amount,
            category: category.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.next_id = following;
        self.expenses.push(expense);
        let added = &self.expenses[self.expenses.len() - 1];
        tracing::info!(id = added.id, amount, "added expense");
        Ok(added)
    }

    pub fn update(&mut self, id: u64, patch: &ExpensePatch, now: DateTime<Utc>) -> Result<&Expense> {
        if let Some(amount) = patch.amount {
            if !(amount > 0.0) {
                return Err(EtrackerError::NonPositiveAmount);
            }
        }
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EtrackerError::NotFound(id))?;

        if let Some(description) = patch.description.as_deref().filter(|d| !d.is_empty()) {
            expense.description = description.to_string();
        }
        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = patch.category.as_deref().filter(|c| !c.is_empty()) {
            expense.category = category.to_string();
        }
        expense.updated_at = now.max(expense.updated_at);
        tracing::info!(id, "updated expense");
        Ok(&*expense)
    }

    pub fn delete(&mut self, id: u64) -> Result<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(EtrackerError::NotFound(id))?;
        tracing::info!(id, "deleted expense");
        Ok(self.expenses.remove(index))
    }

    /// Rewrite the backing file: header row, then every expense in collection order.
    pub fn persist(&self) -> Result<()> {
        let file = file_label(&self.path);
        let bytes = to_csv(&self.expenses).map_err(|e| EtrackerError::write(&file, e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| EtrackerError::write(&file, e))?;
        }
        std::fs::write(&self.path, bytes).map_err(|e| EtrackerError::write(&file, e))?;
        tracing::debug!(path = %self.path.display(), count = self.expenses.len(), "persisted expenses");
        Ok(())
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read every expense from `path`. A missing or unreadable file is an empty
/// collection. The first line is always the header and is skipped.
pub fn load(path: &Path) -> Vec<Expense> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable expense file, starting empty");
            return Vec::new();
        }
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut expenses = Vec::new();
    for result in rdr.records().skip(1) {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => {
                tracing::debug!(path = %path.display(), error = %e, "stopped reading expense file");
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable row");
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match parse_row(&record) {
            Ok(expense) => expenses.push(expense),
            Err(reason) => tracing::warn!(line, reason = %reason, "skipping malformed row"),
        }
    }
    expenses
}

fn parse_row(record: &csv::StringRecord) -> std::result::Result<Expense, String> {
    if record.len() != HEADER.len() {
        return Err(format!("expected {} fields, found {}", HEADER.len(), record.len()));
    }
    // Ids are positive and the next one must still fit.
    let id = record[0]
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0 && id.checked_add(1).is_some())
        .ok_or_else(|| format!("bad id '{}'", &record[0]))?;
    let amount = record[2]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or_else(|| format!("bad amount '{}'", &record[2]))?;
    let created_at =
        iso_millis::parse(&record[4]).ok_or_else(|| format!("bad createdAt '{}'", &record[4]))?;
    let updated_at =
        iso_millis::parse(&record[5]).ok_or_else(|| format!("bad updatedAt '{}'", &record[5]))?;
    Ok(Expense {
        id,
        description: record[1].to_string(),
        amount,
        category: record[3].to_string(),
        created_at,
        updated_at,
    })
}

fn to_csv(expenses: &[Expense]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for e in expenses {
        wtr.write_record([
            e.id.to_string(),
            e.description.clone(),
            plain_amount(e.amount),
            e.category.clone(),
            iso_millis::format(&e.created_at),
            iso_millis::format(&e.updated_at),
        ])?;
    }
    wtr.into_inner()
        .map_err(|e| EtrackerError::Io(e.into_error()))
}
