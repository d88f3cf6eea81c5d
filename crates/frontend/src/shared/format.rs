//! Number formatting for cards, tables and reports.
use contracts::shared::indicators::ValueFormat;

/// Inserts a comma every three digits of the integer part.
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Full amount with currency: `GHS 2,500,000`.
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_thousands(value.round() as i64))
}

/// Compact amount for cards: `GHS 2.5M`, `GHS 150K`.
pub fn format_money_compact(value: f64, currency: &str) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{} {:.1}M", currency, value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{} {:.0}K", currency, value / 1_000.0)
    } else {
        format!("{} {:.0}", currency, value)
    }
}

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format_money_compact(value, currency),
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", value, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(value.round() as i64),
    }
}

/// Local calendar date of the browser.
pub fn today() -> chrono::NaiveDate {
    let now = js_sys::Date::new_0();
    chrono::NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(2_500_000), "2,500,000");
        assert_eq!(format_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2_500_000.0, &ValueFormat::ghs()), "GHS 2.5M");
        assert_eq!(format_value(150_000.0, &ValueFormat::ghs()), "GHS 150K");
        assert_eq!(format_value(87.6, &ValueFormat::Percent { decimals: 0 }), "88%");
        assert_eq!(format_value(12.0, &ValueFormat::Integer), "12");
        assert_eq!(format_money(7_800_000.0, "GHS"), "GHS 7,800,000");
    }
}
