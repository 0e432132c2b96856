/// Utilities for date formatting
///
/// Provides consistent date formatting across the application
use chrono::NaiveDate;

/// Format a date as DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a timestamp field for display.
///
/// Uses the parsed date when there is one and shows the raw value otherwise.
pub fn format_timestamp(parsed: Option<NaiveDate>, raw: &str) -> String {
    match parsed {
        Some(date) => format_naive_date(date),
        None => raw.to_string(),
    }
}
