use migration::{count_applied_migrations, get_latest_migration_version};

use crate::support::test_state::in_memory_db;

#[tokio::test]
async fn bootstrap_applies_every_migration() {
    let db = in_memory_db().await;

    assert_eq!(count_applied_migrations(&db).await.unwrap(), 2);
    assert_eq!(
        get_latest_migration_version(&db).await.unwrap().as_deref(),
        Some("m20250520_000002_question_num_unique")
    );
}
