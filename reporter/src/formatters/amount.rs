use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Renders an amount with two fraction digits and Indian digit grouping
/// (`12,34,567.89`).
pub fn format_amount(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    format!("{}{}.{}", sign, group_indian(integer), fraction)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);

    // pairs are counted from the right, so an odd-length head leads with one digit
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);

    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fmt(value: &str) -> String {
        format_amount(&Decimal::from_str(value).unwrap())
    }

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(fmt("0"), "0.00");
        assert_eq!(fmt("7.5"), "7.50");
        assert_eq!(fmt("150.00"), "150.00");
        assert_eq!(fmt("999.99"), "999.99");
    }

    #[test]
    fn groups_follow_indian_convention() {
        assert_eq!(fmt("1000"), "1,000.00");
        assert_eq!(fmt("12345.6"), "12,345.60");
        assert_eq!(fmt("123456.78"), "1,23,456.78");
        assert_eq!(fmt("1234567.89"), "12,34,567.89");
        assert_eq!(fmt("123456789"), "12,34,56,789.00");
    }

    #[test]
    fn rounds_to_two_digits() {
        assert_eq!(fmt("10.005"), "10.01");
        assert_eq!(fmt("10.004"), "10.00");
        assert_eq!(fmt("999.995"), "1,000.00");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(fmt("-1234.5"), "-1,234.50");
        assert_eq!(fmt("-0.001"), "0.00");
    }
}
