use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::test_state::in_memory_db;

/// Counts statements executed on a connection.
#[derive(Debug, Clone, Default)]
pub struct QueryCounter(Arc<AtomicUsize>);

impl QueryCounter {
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fresh in-memory database whose statements are counted.
pub async fn counting_db() -> (DatabaseConnection, QueryCounter) {
    let mut db = in_memory_db().await;
    let counter = QueryCounter::default();
    let inner = counter.0.clone();
    db.set_metric_callback(move |_info| {
        inner.fetch_add(1, Ordering::SeqCst);
    });
    (db, counter)
}
