//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a whole-rupee amount with Indian digit grouping.
///
/// `245000` renders as `2,45,000`: the last three digits form one group,
/// every group above that has two digits. Non-numeric input is passed
/// through unchanged.
///
/// Usage in templates: `₹{{ donor.amount|inr }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn inr(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    let Ok(amount) = raw.parse::<i64>() else {
        return Ok(raw);
    };
    Ok(group_indian(amount))
}

/// Indian digit grouping for a whole-rupee amount.
fn group_indian(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    if digits.len() > 3 {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_chars: Vec<char> = head.chars().collect();
        for (i, c) in head_chars.iter().enumerate() {
            if i > 0 && (head_chars.len() - i) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(*c);
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(&digits);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian_small_amounts() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(7), "7");
        assert_eq!(group_indian(999), "999");
    }

    #[test]
    fn test_group_indian_thousands() {
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(51_000), "51,000");
        assert_eq!(group_indian(245_000), "2,45,000");
    }

    #[test]
    fn test_group_indian_lakhs_and_crores() {
        assert_eq!(group_indian(111_000), "1,11,000");
        assert_eq!(group_indian(1_234_567), "12,34,567");
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }

    #[test]
    fn test_group_indian_negative() {
        assert_eq!(group_indian(-245_000), "-2,45,000");
    }
}
