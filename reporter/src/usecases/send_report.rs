use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Settings;
use crate::errors::ReportError;
use crate::formatters::{build_message, grand_total};
use crate::models::{OutboundMessage, ReportWindow};
use crate::outbound::ChatNotifier;
use crate::store::TransactionSource;

/// Secret values presented by the caller.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub header: Option<String>,
    pub query: Option<String>,
}

#[derive(Clone)]
pub struct SendReport {
    store: Arc<dyn TransactionSource>,
    notifier: Arc<dyn ChatNotifier>,
    settings: Arc<Settings>,
}

impl SendReport {
    pub fn new(
        store: Arc<dyn TransactionSource>,
        notifier: Arc<dyn ChatNotifier>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            notifier,
            settings: Arc::new(settings),
        }
    }

    /// Without a configured secret the endpoint is open.
    pub fn authorize(&self, credentials: &Credentials) -> Result<(), ReportError> {
        let Some(secret) = self.settings.cron_secret() else {
            return Ok(());
        };

        let presented = [credentials.header.as_deref(), credentials.query.as_deref()];
        if presented.contains(&Some(secret)) {
            Ok(())
        } else {
            Err(ReportError::Unauthorized)
        }
    }

    /// Runs one report and returns the chat API's `result` payload.
    pub async fn execute(&self, credentials: Credentials) -> Result<Value, ReportError> {
        self.authorize(&credentials)?;

        let window = ReportWindow::from_setting(self.settings.report_window_hours.as_deref(), Utc::now());
        // `since` is informational: the totals query has no time predicate
        debug!("Report window {}h, since {}", window.hours, window.since.to_rfc3339());

        let rows = self.store.successful_totals_by_merchant().await?;
        let total = grand_total(&rows);
        let text = build_message(&window, &rows);

        let (Some(bot_token), Some(chat_id)) = (self.settings.bot_token(), self.settings.chat_id()) else {
            return Err(ReportError::MissingCredential);
        };

        let message = OutboundMessage {
            chat_id: chat_id.to_string(),
            text,
        };
        let reply = self.notifier.send_message(bot_token, &message).await?;

        if !reply.is_ok() {
            return Err(ReportError::UpstreamRejected(reply.body));
        }

        info!("Sent report for {} merchants, total {}", rows.len(), total);

        Ok(reply.result())
    }
}
