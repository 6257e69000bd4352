//! Integration tests for the SQLite law store.

use std::time::Duration;

use lawbook_core::{validate_submission, Category, LawStore, PersistenceError};
use lawbook_store::{SqliteLawStore, StoreConfig, StoreError};

struct TestContext {
    store: SqliteLawStore,
    _dir: tempfile::TempDir,
}

impl TestContext {
    async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("laws.db").display());
        let config = StoreConfig::new(url).with_acquire_timeout(Duration::from_secs(5));
        let store = SqliteLawStore::open(&config).await.unwrap();
        Self { store, _dir: dir }
    }
}

#[tokio::test]
async fn test_insert_stores_fields_and_timestamp() {
    let ctx = TestContext::new().await;
    let law = validate_submission("Theft is prohibited.", "Iraq").unwrap();

    ctx.store.insert_law(&law).await.unwrap();

    let laws = ctx.store.list_laws().await.unwrap();
    assert_eq!(laws.len(), 1);
    assert_eq!(laws[0].law_text, "Theft is prohibited.");
    assert_eq!(laws[0].category, Category::Iraq);

    let age = chrono::Utc::now().naive_utc() - laws[0].creation_date;
    assert!(age < chrono::Duration::minutes(5), "timestamp too old: {age}");
}

#[tokio::test]
async fn test_duplicate_inserts_create_distinct_rows() {
    let ctx = TestContext::new().await;
    let law = validate_submission("Theft is prohibited.", "Kurdistan").unwrap();

    ctx.store.insert_law(&law).await.unwrap();
    ctx.store.insert_law(&law).await.unwrap();

    let laws = ctx.store.list_laws().await.unwrap();
    assert_eq!(laws.len(), 2);
    assert_ne!(laws[0].id, laws[1].id);
    assert_eq!(laws[0].law_text, laws[1].law_text);
    assert!(laws[0].creation_date <= laws[1].creation_date);
}

#[tokio::test]
async fn test_text_is_bound_not_interpolated() {
    let ctx = TestContext::new().await;
    let text = "'); DROP TABLE laws; --";
    let law = validate_submission(text, "Iraq").unwrap();

    ctx.store.insert_law(&law).await.unwrap();

    let laws = ctx.store.list_laws().await.unwrap();
    assert_eq!(laws.len(), 1);
    assert_eq!(laws[0].law_text, text);
}

#[tokio::test]
async fn test_count_laws() {
    let ctx = TestContext::new().await;
    assert_eq!(ctx.store.count_laws().await.unwrap(), 0);

    for category in ["Iraq", "Kurdistan", "Iraq"] {
        let law = validate_submission("Article 1.", category).unwrap();
        ctx.store.insert_law(&law).await.unwrap();
    }

    assert_eq!(ctx.store.count_laws().await.unwrap(), 3);
}

#[tokio::test]
async fn test_init_schema_is_repeatable() {
    let ctx = TestContext::new().await;
    let law = validate_submission("Article 1.", "Iraq").unwrap();
    ctx.store.insert_law(&law).await.unwrap();

    ctx.store.init_schema().await.unwrap();

    assert_eq!(ctx.store.count_laws().await.unwrap(), 1);
}

#[tokio::test]
async fn test_closed_store_is_unavailable() {
    let ctx = TestContext::new().await;
    ctx.store.close().await;

    let law = validate_submission("Theft is prohibited.", "Iraq").unwrap();
    let err = ctx.store.insert_law(&law).await.unwrap_err();
    assert!(matches!(err, PersistenceError::Unavailable(_)), "{err:?}");
    assert!(!err.to_string().is_empty());

    assert!(matches!(
        ctx.store.ping().await,
        Err(PersistenceError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_missing_table_is_a_statement_error() {
    let ctx = TestContext::new().await;
    sqlx::query("DROP TABLE laws")
        .execute(ctx.store.pool())
        .await
        .unwrap();

    let law = validate_submission("Theft is prohibited.", "Iraq").unwrap();
    let err = ctx.store.insert_law(&law).await.unwrap_err();

    match err {
        PersistenceError::Statement(detail) => {
            assert!(detail.contains("no such table"), "{detail}")
        }
        other => panic!("expected statement error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ping_open_store() {
    let ctx = TestContext::new().await;
    ctx.store.ping().await.unwrap();
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let config = StoreConfig::new("sqlite://laws.db?mode=sideways");
    let err = SqliteLawStore::connect(&config).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidUrl(_)), "{err:?}");
}

#[tokio::test]
async fn test_missing_file_without_create_fails() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("absent.db").display());
    let config = StoreConfig::new(url).with_create_if_missing(false);

    let err = SqliteLawStore::connect(&config).await.unwrap_err();
    assert!(matches!(err, StoreError::Connect(_)), "{err:?}");
}
