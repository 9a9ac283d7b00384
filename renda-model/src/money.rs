//! Display formatting for Brazilian-real amounts and related figures.
//!
//! The viewer shows values the way the upstream product does: dot as
//! the thousands separator, comma as the decimal separator.

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_decimal(value, 2))
}

/// Format a return figure as a percentage, e.g. `104,69%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value, 2))
}

/// Format a day count, e.g. `1.460 dias`.
pub fn format_days(days: i64) -> String {
    let suffix = if days == 1 { "dia" } else { "dias" };
    format!("{} {}", group_thousands(&days.abs().to_string()), suffix)
}

/// Format a unix timestamp (seconds) as `dd/mm/yyyy`.
#[cfg(feature = "chrono")]
pub fn format_date(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "--/--/----".to_string(),
    }
}

fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) =
        formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let grouped = group_thousands(int_part);
    let sign = if value < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
