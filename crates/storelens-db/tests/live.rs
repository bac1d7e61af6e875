//! Live integration tests for storelens-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/storelens-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use storelens_core::{Faq, StoreRecord};
use storelens_db::{
    count_stores, get_store_by_url, health_check, upsert_store, upsert_stores,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_record(url: &str, brand_name: &str) -> StoreRecord {
    let mut record = StoreRecord::empty(url);
    record.brand_name = brand_name.to_string();
    record.product_catalog = vec!["Widget".to_string(), "Gadget".to_string()];
    record.faqs.push(Faq {
        question: "Do you ship?".to_string(),
        answer: "Yes, worldwide.".to_string(),
    });
    record
        .social_handles
        .insert("instagram".to_string(), "https://instagram.com/acme".to_string());
    record
        .contact_details
        .emails
        .insert("hello@acme.example.com".to_string());
    record
        .contact_details
        .phones
        .insert("+1 555 123 4567".to_string());
    record.policies.return_policy = "Returns within 30 days.".to_string();
    record.brand_about = "Founded in a garage.".to_string();
    record
}

// ---------------------------------------------------------------------------
// Section 1: Pool
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn health_check_succeeds_on_live_pool(pool: sqlx::PgPool) {
    health_check(&pool).await.expect("health_check failed");
}

// ---------------------------------------------------------------------------
// Section 2: Upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_store_round_trips_every_field(pool: sqlx::PgPool) {
    let record = make_record("https://acme.example.com", "Acme Co");
    upsert_store(&pool, &record).await.expect("upsert failed");

    let row = get_store_by_url(&pool, "https://acme.example.com")
        .await
        .expect("get_store_by_url failed")
        .expect("row should exist");
    assert_eq!(row.into_record(), record);
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_same_url_twice_keeps_one_row_with_latest_values(pool: sqlx::PgPool) {
    let first = make_record("https://acme.example.com", "Acme Co");
    let first_id = upsert_store(&pool, &first).await.expect("first upsert");

    let mut second = make_record("https://acme.example.com", "Acme Company");
    second.product_catalog = vec!["Sprocket".to_string()];
    second.faqs.clear();
    let second_id = upsert_store(&pool, &second).await.expect("second upsert");

    assert_eq!(first_id, second_id, "upsert must reuse the existing row");
    assert_eq!(count_stores(&pool).await.expect("count"), 1);

    let stored = get_store_by_url(&pool, "https://acme.example.com")
        .await
        .expect("query")
        .expect("row should exist");
    assert!(stored.updated_at >= stored.created_at);
    let stored = stored.into_record();
    assert_eq!(stored.brand_name, "Acme Company");
    assert_eq!(stored.product_catalog, vec!["Sprocket".to_string()]);
    assert!(stored.faqs.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_store_by_url_returns_none_for_unknown_url(pool: sqlx::PgPool) {
    let row = get_store_by_url(&pool, "https://missing.example.com")
        .await
        .expect("query");
    assert!(row.is_none());
}

// ---------------------------------------------------------------------------
// Section 3: Batch transaction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_stores_persists_batch_in_order(pool: sqlx::PgPool) {
    let records = vec![
        make_record("https://acme.example.com", "Acme Co"),
        make_record("https://rival.example.com", "Rival"),
    ];
    let ids = upsert_stores(&pool, &records).await.expect("batch upsert");

    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(count_stores(&pool).await.expect("count"), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn upsert_stores_rolls_back_when_any_record_fails(pool: sqlx::PgPool) {
    // The url column is VARCHAR(2048); an oversized URL fails mid-batch.
    let oversized_url = format!("https://{}.example.com", "a".repeat(3000));
    let records = vec![
        make_record("https://acme.example.com", "Acme Co"),
        make_record(&oversized_url, "Too Long"),
    ];

    let result = upsert_stores(&pool, &records).await;
    assert!(result.is_err(), "oversized url must fail the batch");
    assert_eq!(
        count_stores(&pool).await.expect("count"),
        0,
        "no record from a failed batch may be persisted"
    );
}
