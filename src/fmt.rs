/// Format an amount with a currency prefix in its shortest decimal form: $20, $12.5, -$5
pub fn money(val: f64, symbol: &str) -> String {
    if val < 0.0 {
        format!("-{symbol}{}", val.abs())
    } else {
        format!("{symbol}{val}")
    }
}

/// Amount as stored in the CSV: shortest decimal form, no currency.
pub fn plain_amount(val: f64) -> String {
    format!("{val}")
}
