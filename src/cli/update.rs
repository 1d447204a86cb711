use chrono::Utc;

use crate::args::FlagArgs;
use crate::error::{EtrackerError, Result};
use crate::models::ExpensePatch;
use crate::store::ExpenseStore;

pub const USAGE: &str = "update --id 1 --description Pay a fee --amount 5 --category Administrative";

/// Overwrite the supplied fields of one expense. Needs `--id` and at least one
/// of `--description` or `--amount`; `--category` may ride along.
pub fn run(store: &mut ExpenseStore, args: &FlagArgs) -> Result<()> {
    if args.is_blank() {
        return Err(EtrackerError::InvalidFormat(USAGE));
    }
    let id = args.id()?;
    let patch = ExpensePatch {
        description: args.description().map(str::to_string),
        amount: args.amount()?,
        category: args.category().map(str::to_string),
    };
    let Some(id) = id.filter(|_| patch.description.is_some() || patch.amount.is_some()) else {
        return Err(EtrackerError::InvalidFormat(USAGE));
    };

    store.update(id, &patch, Utc::now())?;
    store.persist()?;
    println!("You updated the expense with ID {id}");
    Ok(())
}
