use crate::args::FlagArgs;
use crate::error::{EtrackerError, Result};
use crate::fmt::money;
use crate::models::Expense;
use crate::reports;
use crate::store::ExpenseStore;

pub const USAGE: &str = "summary --month 7";

pub fn run(store: &ExpenseStore, args: &FlagArgs, currency: &str) -> Result<()> {
    println!("{}", render(store.expenses(), args, currency)?);
    Ok(())
}

/// The summary line for the payload: grand total with no flags, else by
/// `--month` (which wins when both are given) or by `--category`.
pub fn render(expenses: &[Expense], args: &FlagArgs, currency: &str) -> Result<String> {
    if args.is_blank() {
        let summary = reports::total(expenses);
        return Ok(format!("Total expenses: {}", money(summary.total, currency)));
    }

    if let Some(month) = args.month()? {
        let (name, summary) = reports::month_summary(expenses, month)?;
        if summary.is_empty() {
            return Ok(format!("No expenses found for {name}!"));
        }
        return Ok(format!("Total expenses for {name}: {}", money(summary.total, currency)));
    }

    if let Some(category) = args.category() {
        let summary = reports::category_summary(expenses, category);
        if summary.is_empty() {
            return Ok(format!("No expenses found for category {category}!"));
        }
        return Ok(format!(
            "Total expenses for category {category}: {}",
            money(summary.total, currency)
        ));
    }

    Err(EtrackerError::InvalidFormat(USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn expense(id: u64, amount: f64, category: &str, month: u32) -> Expense {
        let ts = Utc.with_ymd_and_hms(2024, month, 3, 8, 0, 0).unwrap();
        Expense {
            id,
            description: String::new(),
            amount,
            category: category.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn seed() -> Vec<Expense> {
        vec![
            expense(1, 20.0, "Drinks", 1),
            expense(2, 10.0, "Food", 1),
            expense(3, 2.5, "Drinks", 7),
        ]
    }

    fn render_str(payload: &str) -> Result<String> {
        render(&seed(), &FlagArgs::parse(payload), "$")
    }

    #[test]
    fn test_grand_total() {
        assert_eq!(render_str("").unwrap(), "Total expenses: $32.5");
        assert_eq!(
            render(&[], &FlagArgs::parse(""), "$").unwrap(),
            "Total expenses: $0"
        );
    }

    #[test]
    fn test_month_total() {
        assert_eq!(render_str("--month 1").unwrap(), "Total expenses for January: $30");
        assert_eq!(render_str("--month 07").unwrap(), "Total expenses for July: $2.5");
        assert_eq!(render_str("--month 3").unwrap(), "No expenses found for March!");
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        assert!(matches!(render_str("--month 13"), Err(EtrackerError::MonthOutOfRange(13))));
        assert!(matches!(render_str("--month 0"), Err(EtrackerError::MonthOutOfRange(0))));
    }

    #[test]
    fn test_category_total() {
        assert_eq!(
            render_str("--category Drinks").unwrap(),
            "Total expenses for category Drinks: $22.5"
        );
        assert_eq!(
            render_str("--category Travel").unwrap(),
            "No expenses found for category Travel!"
        );
    }

    #[test]
    fn test_month_wins_over_category() {
        assert_eq!(
            render_str("--category Food --month 7").unwrap(),
            "Total expenses for July: $2.5"
        );
    }

    #[test]
    fn test_unrecognised_payload() {
        assert!(matches!(render_str("--year 2024"), Err(EtrackerError::InvalidFormat(_))));
    }
}
