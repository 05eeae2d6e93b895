//! Display formatting for prices, volumes, and large dollar amounts.

/// `$1,234.56`, two decimals; negatives come out as `-$1,234.56`.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let total_cents = (value.abs() * 100.0).round() as u64;
    format!(
        "{sign}${}.{:02}",
        group_thousands(total_cents / 100),
        total_cents % 100
    )
}

/// Thousands-grouped integer, e.g. `1,000,000`.
pub fn number(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    // unsigned_abs: i64::MIN has no i64 absolute value
    format!("{sign}{}", group_thousands(value.unsigned_abs()))
}

/// Abbreviated dollar amount: `$X.XXT`, `B`, `M`, or `K` by magnitude, sign
/// first, falling back to [`currency`] below one thousand.
pub fn large_number(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1e12 {
        return format!("{sign}${:.2}T", abs / 1e12);
    }
    if abs >= 1e9 {
        return format!("{sign}${:.2}B", abs / 1e9);
    }
    if abs >= 1e6 {
        return format!("{sign}${:.2}M", abs / 1e6);
    }
    if abs >= 1e3 {
        return format!("{sign}${:.2}K", abs / 1e3);
    }
    currency(value)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
