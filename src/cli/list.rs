use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::models::Expense;
use crate::store::ExpenseStore;

pub const EMPTY_MESSAGE: &str = "Your current expense list is empty. Try adding one using add command!";

pub fn run(store: &ExpenseStore, currency: &str) -> Result<()> {
    if store.expenses().is_empty() {
        println!("{EMPTY_MESSAGE}");
        return Ok(());
    }
    println!("{}", table(store.expenses(), currency));
    Ok(())
}

/// One row per expense, in the order they were recorded.
pub fn table(expenses: &[Expense], currency: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Description", "Amount", "Category"]);
    for e in expenses {
        table.add_row(vec![
            Cell::new(e.id),
            Cell::new(e.created_date()),
            Cell::new(&e.description),
            Cell::new(money(e.amount, currency)),
            Cell::new(&e.category),
        ]);
    }
    table
}
