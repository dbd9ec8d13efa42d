//! Display formatting: money in `es-AR` style and dates in local time.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use super::config::DISPLAY_UTC_OFFSET_SECS;

/// Formats an amount as `$ 1.234,50`: dot thousands separator, comma
/// decimal separator, always two decimals. Non-finite values show as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}$ {},{:02}", sign, grouped, fraction)
}

/// Parses a user-typed amount; accepts a comma as decimal separator.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// `DD/MM/YYYY`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.with_timezone(&display_offset()).format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:MM`
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&display_offset())
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

pub fn format_date_opt(value: &Option<DateTime<Utc>>) -> String {
    value.as_ref().map(format_date).unwrap_or_else(|| "-".to_string())
}

pub fn format_datetime_opt(value: &Option<DateTime<Utc>>) -> String {
    value
        .as_ref()
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

/// Value for an `<input type="date">`.
pub fn date_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses an `<input type="date">` value; blank or malformed is `None`.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$ 1.234,50");
        assert_eq!(format_currency(0.0), "$ 0,00");
        assert_eq!(format_currency(999.999), "$ 1.000,00");
        assert_eq!(format_currency(1_000_000.0), "$ 1.000.000,00");
        assert_eq!(format_currency(12.3), "$ 12,30");
    }

    #[test]
    fn test_format_currency_negative_and_nan() {
        assert_eq!(format_currency(-50.0), "-$ 50,00");
        assert_eq!(format_currency(f64::NAN), "$ 0,00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500,50"), Some(1500.5));
        assert_eq!(parse_amount(" 20 "), Some(20.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_format_date_uses_local_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 15, 2, 30, 0).unwrap();
        // 02:30 UTC is still the 14th in Buenos Aires
        assert_eq!(format_date(&utc), "14/03/2024");
        assert_eq!(format_datetime(&utc), "14/03/2024 23:30");
        assert_eq!(format_date_opt(&None), "-");
    }

    #[test]
    fn test_date_input_roundtrip_values() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(date_input_value(d), "2024-01-05");
        assert_eq!(parse_date_input("2024-01-05"), d);
        assert_eq!(parse_date_input(""), None);
    }
}
