use crate::error::{EtrackerError, Result};
use crate::models::Expense;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
}

impl Summary {
    fn of<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Self {
        expenses.fold(Summary { total: 0.0, count: 0 }, |acc, e| Summary {
            total: acc.total + e.amount,
            count: acc.count + 1,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn total(expenses: &[Expense]) -> Summary {
    Summary::of(expenses.iter())
}

/// Totals for expenses created in `month` (1-12) of any year. The month field of
/// the `YYYY-MM-DD` creation date is compared as a zero-padded string.
pub fn month_summary(expenses: &[Expense], month: u32) -> Result<(&'static str, Summary)> {
    let name = month_name(month).ok_or(EtrackerError::MonthOutOfRange(month))?;
    let wanted = format!("{month:02}");
    let summary = Summary::of(expenses.iter().filter(|e| {
        e.created_date().split('-').nth(1) == Some(wanted.as_str())
    }));
    Ok((name, summary))
}

/// Totals for expenses whose category equals `category` exactly (case-sensitive).
pub fn category_summary(expenses: &[Expense], category: &str) -> Summary {
    Summary::of(expenses.iter().filter(|e| e.category == category))
}
