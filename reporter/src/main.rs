mod config;
mod errors;
mod formatters;
mod models;
mod outbound;
mod routes;
mod store;
mod usecases;

#[cfg(test)]
mod test_support;

use std::io::{Error, ErrorKind, Result};
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::outbound::TelegramClient;
use crate::store::TransactionStore;
use crate::usecases::UseCases;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    info!("Starting transaction report server");

    let settings = Settings::new().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        Error::new(ErrorKind::InvalidInput, e)
    })?;

    if settings.cron_secret().is_none() {
        warn!("CRON_SECRET is not set, /api/send-report is open to anyone");
    }

    let transaction_store = TransactionStore::new(&settings).map_err(|e| {
        error!("Invalid database configuration: {}", e);
        Error::new(ErrorKind::InvalidInput, e)
    })?;
    let telegram = TelegramClient::new(settings.telegram_api_url.clone());
    let usecases = UseCases::new(Arc::new(transaction_store), Arc::new(telegram), settings.clone());

    info!("Listening on {}:{}", settings.server_host, settings.server_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(usecases.clone()))
            .service(routes::send_report)
    })
        .bind((settings.server_host.clone(), settings.server_port))?
        .run()
        .await
}

fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_line_number(true)
        .init();
}
