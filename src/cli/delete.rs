use crate::args::FlagArgs;
use crate::error::{EtrackerError, Result};
use crate::store::ExpenseStore;

pub const USAGE: &str = "delete --id 1";

pub fn run(store: &mut ExpenseStore, args: &FlagArgs) -> Result<()> {
    let id = args.id()?.ok_or(EtrackerError::InvalidFormat(USAGE))?;
    store.delete(id)?;
    store.persist()?;
    println!("Expense deleted successfully (ID: {id})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn seeded() -> (tempfile::TempDir, ExpenseStore) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ExpenseStore::open(dir.path().join("expenses.csv"));
        store.add("Tea", 20.0, "Drinks", Utc::now()).unwrap();
        store.add("Cake", 4.0, "Food", Utc::now()).unwrap();
        store.persist().unwrap();
        (dir, store)
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let (_dir, mut store) = seeded();
        run(&mut store, &FlagArgs::parse("--id 1")).unwrap();
        let reloaded = ExpenseStore::open(store.path());
        assert_eq!(reloaded.expenses().len(), 1);
        assert_eq!(reloaded.expenses()[0].description, "Cake");
    }

    #[test]
    fn test_delete_requires_id_flag() {
        let (_dir, mut store) = seeded();
        for payload in ["", "1", "--description Tea"] {
            let err = run(&mut store, &FlagArgs::parse(payload)).unwrap_err();
            assert!(matches!(err, EtrackerError::InvalidFormat(_)), "payload: {payload}");
        }
        assert_eq!(store.expenses().len(), 2);
    }

    #[test]
    fn test_delete_missing_id_leaves_file_unchanged() {
        let (_dir, mut store) = seeded();
        let before = std::fs::read(store.path()).unwrap();
        let err = run(&mut store, &FlagArgs::parse("--id 5")).unwrap_err();
        assert!(matches!(err, EtrackerError::NotFound(5)));
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }
}
