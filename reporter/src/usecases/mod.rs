mod send_report;

use std::sync::Arc;

pub use send_report::{Credentials, SendReport};
use crate::config::Settings;
use crate::outbound::ChatNotifier;
use crate::store::TransactionSource;

#[derive(Clone)]
pub struct UseCases {
    pub send_report: SendReport,
}

impl UseCases {
    pub fn new(
        store: Arc<dyn TransactionSource>,
        notifier: Arc<dyn ChatNotifier>,
        settings: Settings,
    ) -> Self {
        Self {
            send_report: SendReport::new(store, notifier, settings),
        }
    }
}
