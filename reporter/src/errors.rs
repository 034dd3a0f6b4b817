use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("BOT_TOKEN or CHAT_ID missing")]
    MissingCredential,

    /// The chat API answered with `ok: false`; holds its reply verbatim.
    #[error("Telegram API rejected the message: {0}")]
    UpstreamRejected(Value),

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("chat API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResponseError for ReportError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReportError::Unauthorized => StatusCode::UNAUTHORIZED,
            ReportError::UpstreamRejected(_) => StatusCode::BAD_GATEWAY,
            ReportError::MissingCredential
            | ReportError::Store(_)
            | ReportError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ReportError::UpstreamRejected(payload) => json!({ "ok": false, "telegram": payload }),
            other => json!({ "ok": false, "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
