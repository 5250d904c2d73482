use futures_util::future::BoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction.
///
/// Commits when the closure returns `Ok` and rolls back when it returns `Err`.
/// A transaction dropped mid-flight (cancelled request, panic) is rolled back
/// by the driver.
///
/// The closure receives the transaction by reference, so anything it captures
/// must be owned:
///
/// ```ignore
/// let text = draft.text.clone();
/// with_txn(&state, move |txn| Box::pin(async move { insert(txn, text).await })).await?;
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "rollback failed");
            }
            Err(err)
        }
    }
}
