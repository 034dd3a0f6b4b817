use std::str::FromStr;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{debug, info};

use crate::config::Settings;
use crate::models::TransactionAggregateRow;
use crate::store::TransactionSource;

// No time predicate and no ordering: totals cover every successful payment
// and groups come back in whatever order MySQL produces.
const SUCCESS_TOTALS_BY_MERCHANT: &str = "
    SELECT
        SUM(CAST(lp.transaction_amount AS DECIMAL(15,2))) AS total_amount,
        SUBSTRING_INDEX(TRIM(m.name), ' ', 1) AS merchant_token
    FROM live_payment lp
    JOIN merchant m
        ON lp.created_merchant = m.id
    WHERE lp.transaction_status = 'success'
    GROUP BY SUBSTRING_INDEX(TRIM(m.name), ' ', 1)";

#[derive(Clone, Debug)]
pub struct TransactionStore {
    db_pool: MySqlPool,
}

impl TransactionStore {
    /// Builds the pool without connecting; connections are opened on first query.
    pub fn new(settings: &Settings) -> Result<Self, sqlx::Error> {
        let connect_options = Self::connect_options(settings)?;

        let pool = MySqlPoolOptions::new()
            .max_connections(settings.mysql_pool_size)
            .connect_lazy_with(connect_options);

        Ok(Self { db_pool: pool })
    }

    fn connect_options(settings: &Settings) -> Result<MySqlConnectOptions, sqlx::Error> {
        if let Some(url) = settings.database_url.as_deref() {
            info!("Using DATABASE_URL for the transaction store");
            return MySqlConnectOptions::from_str(url);
        }

        let mut options = MySqlConnectOptions::new().port(settings.mysql_port);
        if let Some(host) = settings.mysql_host.as_deref() {
            options = options.host(host);
        }
        if let Some(user) = settings.mysql_user.as_deref() {
            options = options.username(user);
        }
        if let Some(password) = settings.mysql_password.as_deref() {
            options = options.password(password);
        }
        if let Some(database) = settings.mysql_database.as_deref() {
            options = options.database(database);
        }

        info!(
            "Using MySQL at {}:{} for the transaction store",
            settings.mysql_host.as_deref().unwrap_or("localhost"),
            settings.mysql_port
        );

        Ok(options)
    }
}

#[async_trait]
impl TransactionSource for TransactionStore {
    async fn successful_totals_by_merchant(&self) -> Result<Vec<TransactionAggregateRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TransactionAggregateRow>(SUCCESS_TOTALS_BY_MERCHANT)
            .fetch_all(&self.db_pool)
            .await?;

        debug!("Fetched {} merchant totals", rows.len());

        Ok(rows)
    }
}
