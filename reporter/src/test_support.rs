//! In-memory collaborators for handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Settings;
use crate::models::{ChatApiReply, OutboundMessage, TransactionAggregateRow};
use crate::outbound::ChatNotifier;
use crate::store::TransactionSource;

pub struct FakeStore {
    pub rows: Vec<TransactionAggregateRow>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeStore {
    pub fn with_rows(rows: Vec<TransactionAggregateRow>) -> Arc<Self> {
        Arc::new(Self { rows, fail: false, calls: AtomicUsize::new(0) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { rows: vec![], fail: true, calls: AtomicUsize::new(0) })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionSource for FakeStore {
    async fn successful_totals_by_merchant(&self) -> Result<Vec<TransactionAggregateRow>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self.rows.clone())
    }
}

pub struct FakeNotifier {
    pub reply: Value,
    pub sent: Mutex<Vec<(String, OutboundMessage)>>,
}

impl FakeNotifier {
    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self { reply, sent: Mutex::new(vec![]) })
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatNotifier for FakeNotifier {
    async fn send_message(&self, bot_token: &str, message: &OutboundMessage) -> Result<ChatApiReply, reqwest::Error> {
        self.sent.lock().unwrap().push((bot_token.to_string(), message.clone()));
        Ok(ChatApiReply::new(self.reply.clone()))
    }
}

pub fn settings(pairs: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_env(Some(vars)).unwrap()
}

pub fn delivery_settings(extra: &[(&str, &str)]) -> Settings {
    let mut pairs = vec![("BOT_TOKEN", "123:abc"), ("CHAT_ID", "-100")];
    pairs.extend_from_slice(extra);
    settings(&pairs)
}

/// Collects formatted log lines so tests can count what was emitted.
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a subscriber for the current thread until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let capture = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || capture.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn count(&self, needle: &str) -> usize {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf).matches(needle).count()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
