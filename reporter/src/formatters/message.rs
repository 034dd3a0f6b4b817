use rust_decimal::Decimal;

use crate::formatters::amount::{format_amount, CURRENCY_SYMBOL};
use crate::models::{ReportWindow, TransactionAggregateRow};

pub const UNKNOWN_MERCHANT: &str = "Unknown";
pub const NO_TRANSACTIONS: &str = "No successful transactions in this window.";

pub fn grand_total(rows: &[TransactionAggregateRow]) -> Decimal {
    rows.iter().map(TransactionAggregateRow::amount_or_zero).sum()
}

pub fn merchant_label(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.replace('\n', " "),
        _ => UNKNOWN_MERCHANT.to_string(),
    }
}

pub fn build_message(window: &ReportWindow, rows: &[TransactionAggregateRow]) -> String {
    let mut message = format!(
        "✅ Transaction summary (last {} {}):\n\n",
        window.hours,
        window.unit()
    );

    if rows.is_empty() {
        message.push_str(NO_TRANSACTIONS);
        return message;
    }

    for row in rows {
        message.push_str(&format!(
            "{}: {}{}\n",
            merchant_label(row.merchant_name.as_deref()),
            CURRENCY_SYMBOL,
            format_amount(&row.amount_or_zero())
        ));
    }

    message.push_str(&format!(
        "\nTotal: {}{}",
        CURRENCY_SYMBOL,
        format_amount(&grand_total(rows))
    ));

    message
}
