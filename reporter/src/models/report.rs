use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// One grouped sum per first token of a merchant's name.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TransactionAggregateRow {
    #[sqlx(rename = "merchant_token")]
    pub merchant_name: Option<String>,
    pub total_amount: Option<Decimal>,
}

impl TransactionAggregateRow {
    pub fn new(merchant_name: Option<&str>, total_amount: Option<Decimal>) -> Self {
        Self {
            merchant_name: merchant_name.map(str::to_string),
            total_amount,
        }
    }

    pub fn amount_or_zero(&self) -> Decimal {
        self.total_amount.unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub hours: u32,
    pub since: DateTime<Utc>,
}

impl ReportWindow {
    pub const DEFAULT_HOURS: u32 = 1;

    /// Only a positive integer is accepted; anything else falls back to one hour.
    pub fn from_setting(raw: Option<&str>, now: DateTime<Utc>) -> Self {
        let hours = match raw.map(str::trim) {
            None => Self::DEFAULT_HOURS,
            Some(value) => match value.parse::<u32>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    warn!("invalid REPORT_WINDOW_HOURS `{}`, using {}", value, Self::DEFAULT_HOURS);
                    Self::DEFAULT_HOURS
                }
            },
        };

        Self {
            hours,
            since: now
                .checked_sub_signed(Duration::hours(i64::from(hours)))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }

    pub fn unit(&self) -> &'static str {
        if self.hours > 1 { "hours" } else { "hour" }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMessage {
    pub chat_id: String,
    pub text: String,
}

/// Raw JSON reply of the chat API.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatApiReply {
    pub body: Value,
}

impl ChatApiReply {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn is_ok(&self) -> bool {
        self.body.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn result(&self) -> Value {
        self.body.get("result").cloned().unwrap_or(Value::Null)
    }
}
