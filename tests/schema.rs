use dogs::model::database::{self, InitStatus};
use sqlx::Connection;
use std::path::Path;

async fn column_names(path: &Path) -> Vec<(String, String, i64)> {
    let mut conn = database::open(path).await.unwrap();
    let columns = sqlx::query_as::<_, (String, String, i64)>(
        "SELECT name, type, pk FROM pragma_table_info('Dogs') ORDER BY cid",
    )
    .fetch_all(&mut conn)
    .await
    .unwrap();
    conn.close().await.unwrap();
    columns
}

async fn dogs_tables(path: &Path) -> i64 {
    let mut conn = database::open(path).await.unwrap();
    let (count,) = sqlx::query_as::<_, (i64,)>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'Dogs'",
    )
    .fetch_one(&mut conn)
    .await
    .unwrap();
    conn.close().await.unwrap();
    count
}

#[tokio::test]
async fn initialize_creates_dogs_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dogs.db");

    assert_eq!(database::initialize(&path).await, InitStatus::Ready);
    assert!(path.exists());
    assert_eq!(
        column_names(&path).await,
        vec![
            ("ID".to_string(), "INTEGER".to_string(), 1),
            ("Name".to_string(), "TEXT".to_string(), 0),
            ("Breed".to_string(), "TEXT".to_string(), 0),
        ]
    );
}

#[tokio::test]
async fn initialize_twice_keeps_table_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dogs.db");

    assert_eq!(database::initialize(&path).await, InitStatus::Ready);
    let id = database::insert_dog(&path, "Rex", "boxer").await.unwrap();
    let before = column_names(&path).await;

    assert_eq!(database::initialize(&path).await, InitStatus::Ready);
    database::ensure_schema(&path).await.unwrap();

    assert_eq!(dogs_tables(&path).await, 1);
    assert_eq!(column_names(&path).await, before);

    let dogs = database::select_dogs(&path).await.unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].id, id);
    assert!(dogs[0].is("Rex", "boxer"));
}

#[tokio::test]
async fn initialize_reports_failure_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dogs.db");

    assert_eq!(database::initialize(&path).await, InitStatus::Failed);
    assert!(!path.exists());
}

#[tokio::test]
async fn ensure_schema_propagates_open_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dogs.db");

    let err = database::ensure_schema(&path).await.unwrap_err();
    assert!(matches!(err, dogs::Error::Sqlx(_)));
}
