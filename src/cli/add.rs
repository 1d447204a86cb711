use chrono::Utc;

use crate::args::FlagArgs;
use crate::error::{EtrackerError, Result};
use crate::store::ExpenseStore;

pub const USAGE: &str = "add --description Tea --amount 20 --category Drinks";

pub fn run(store: &mut ExpenseStore, args: &FlagArgs) -> Result<()> {
    if args.is_blank() {
        return Err(EtrackerError::InvalidFormat(USAGE));
    }
    let amount = args.amount()?.ok_or(EtrackerError::MissingAmount)?;
    let description = args.description().unwrap_or("");
    let category = args.category().unwrap_or("");

    let id = store.add(description, amount, category, Utc::now())?.id;
    store.persist()?;
    println!("Expense added successfully (ID: {id})");
    Ok(())
}
