/// Format an amount with an explicit sign and two decimals, e.g. `+1200.00 €`
#[must_use]
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{:+.2} {}", amount, currency_symbol)
}

/// Parse user input as an amount. Accepts a comma as decimal separator.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}
