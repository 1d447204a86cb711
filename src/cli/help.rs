use crate::error::Result;

pub const HELP: &str = "\
Expense tracker CLI - Supported Commands

Usage:
    etracker <command> [options]

Commands:

    add                          Add a new expense
      --description <text>         Description of the expense
      --amount <number>            Expense amount (required, greater than zero)
      --category <text>            Expense category

      Example:
      etracker add --description Tea --amount 10 --category Drinks

    update --id <id>             Update an existing expense by ID
      --description <text>         (Optional) New description
      --amount <number>            (Optional) New amount
      --category <text>            (Optional) New category
      At least one of --description or --amount is required.

      Example:
      etracker update --id 1 --description Pay a fee --amount 5 --category Admin

    delete --id <id>             Delete an expense by ID

      Example:
      etracker delete --id 1

    list                         List all expenses

      Example:
      etracker list

    summary                      Show total of all expenses

      Example:
      etracker summary

    summary --month <1-12>       Show total expenses for a specific month

      Example:
      etracker summary --month 7

    summary --category <text>    Show total expenses for a category

      Example:
      etracker summary --category Food

    export                       Export all expenses to expenses.json

      Example:
      etracker export

    help                         Show this help message

      Example:
      etracker help

    - Dates are recorded automatically at the time of entry.
    - Expenses are kept in expenses.csv in the data directory
      (current directory unless ETRACKER_DATA_DIR or settings.json say otherwise).";

pub fn run() -> Result<()> {
    println!("{HELP}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_mentions_every_command_and_flag() {
        for word in ["add", "update", "delete", "list", "summary", "export", "help"] {
            assert!(HELP.contains(&format!("etracker {word}")), "no example for {word}");
        }
        for flag in ["--description", "--amount", "--category", "--id", "--month"] {
            assert!(HELP.contains(flag), "missing {flag}");
        }
    }
}
