use std::path::Path;

use crate::error::{EtrackerError, Result};
use crate::models::Expense;
use crate::store::ExpenseStore;

pub fn run(store: &ExpenseStore, path: &Path) -> Result<()> {
    let name = write_json(store.expenses(), path)?;
    println!("Export to {name} was done successfully!");
    Ok(())
}

/// Write the collection as a pretty-printed JSON array, replacing any previous
/// export. Returns the file name for messages.
pub fn write_json(expenses: &[Expense], path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let json = serde_json::to_string_pretty(expenses).map_err(|e| EtrackerError::write(&name, e))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EtrackerError::write(&name, e))?;
    }
    std::fs::write(path, json).map_err(|e| EtrackerError::write(&name, e))?;
    tracing::info!(path = %path.display(), count = expenses.len(), "exported expenses");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn seeded(dir: &Path) -> ExpenseStore {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let mut store = ExpenseStore::open(dir.join("expenses.csv"));
        store.add("Tea", 20.0, "Drinks", t0).unwrap();
        store.add("Train, return", 12.75, "Travel", t0 + Duration::days(40)).unwrap();
        store.persist().unwrap();
        store
    }

    #[test]
    fn test_export_parses_back_to_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(dir.path());
        let path = dir.path().join("expenses.json");
        run(&store, &path).unwrap();
        let parsed: Vec<Expense> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, store.expenses());
    }

    #[test]
    fn test_export_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(dir.path());
        let path = dir.path().join("expenses.json");
        write_json(store.expenses(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"), "not pretty-printed: {content}");
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let first = &value[0];
        for key in ["id", "description", "amount", "category", "createdAt", "updatedAt"] {
            assert!(first.get(key).is_some(), "missing {key}");
        }
        assert_eq!(first["createdAt"], "2024-01-01T10:00:00.000Z");
    }

    #[test]
    fn test_export_leaves_csv_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(dir.path());
        let before = std::fs::read(store.path()).unwrap();
        run(&store, &dir.path().join("expenses.json")).unwrap();
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_export_overwrites_and_handles_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        std::fs::write(&path, "stale").unwrap();
        write_json(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_export_failure_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        std::fs::create_dir(&path).unwrap();
        let err = write_json(&[], &path).unwrap_err();
        assert!(err.to_string().starts_with("Error writing to expenses.json"), "got: {err}");
    }
}
