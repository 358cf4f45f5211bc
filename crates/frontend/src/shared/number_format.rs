//! Money formatting for tables and receipts

/// Format a number with `,` thousands separators and two decimals
///
/// ```
/// use frontend::shared::number_format::format_amount;
/// assert_eq!(format_amount(1234567.891), "1,234,567.89");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    // "-0.00" is not a useful amount
    if grouped.chars().all(|c| c == '0') && decimal_part.chars().all(|c| c == '0') {
        return format!("{}.{}", grouped, decimal_part);
    }
    format!("{}{}.{}", sign, grouped, decimal_part)
}

/// Format a money value with the currency symbol, e.g. "₹ 1,250.00"
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    format!("{} {}", currency_symbol, format_amount(value))
}
