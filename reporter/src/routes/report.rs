use actix_web::{route, web, HttpRequest, HttpResponse};
use serde_json::json;
use tracing::{error, warn};

use crate::errors::ReportError;
use crate::usecases::{Credentials, UseCases};

const SECRET_HEADERS: [&str; 2] = ["x-secret-token", "x-secret"];

const SECRET_PARAM: &str = "secret";

/// The first secret header carrying a value wins, even when it is not
/// valid text; later headers are only consulted when it is absent or empty.
fn header_secret(req: &HttpRequest) -> Option<String> {
    let value = SECRET_HEADERS.iter()
        .filter_map(|name| req.headers().get(*name))
        .find(|value| !value.is_empty())?;

    value.to_str().ok().map(str::to_string)
}

/// First `secret` value of the query string. Parsed by hand so that a query
/// the extractor would reject still gets a JSON answer.
fn query_secret(req: &HttpRequest) -> Option<String> {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .ok()?
        .into_inner()
        .into_iter()
        .find(|(key, _)| key == SECRET_PARAM)
        .map(|(_, value)| value)
}

#[route("/api/send-report", method = "GET", method = "POST")]
pub async fn send_report(
    usecases: web::Data<UseCases>,
    req: HttpRequest,
) -> Result<HttpResponse, ReportError> {
    let credentials = Credentials {
        header: header_secret(&req),
        query: query_secret(&req),
    };

    match usecases.send_report.execute(credentials).await {
        Ok(result) => Ok(HttpResponse::Ok().json(json!({ "ok": true, "sent": true, "telegram": result }))),
        Err(ReportError::Unauthorized) => {
            warn!("Rejected report request from {:?}", req.peer_addr());
            Err(ReportError::Unauthorized)
        },
        Err(e) => {
            error!("Report handler error: {}", e);
            Err(e)
        },
    }
}
