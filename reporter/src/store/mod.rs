use async_trait::async_trait;

use crate::models::TransactionAggregateRow;

mod transaction;

pub use transaction::TransactionStore;

#[async_trait]
pub trait TransactionSource: Send + Sync + 'static {
    /// Sums successful transactions per first word of the merchant name.
    async fn successful_totals_by_merchant(&self) -> Result<Vec<TransactionAggregateRow>, sqlx::Error>;
}
