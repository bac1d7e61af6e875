//! Offline tests for storelens-db pool configuration and row types.
//! These tests do not require a live database connection.

use chrono::Utc;
use sqlx::types::Json;
use storelens_core::{AppConfig, Environment, ImportantLinks, Policies, StoreRecord};
use storelens_db::{connect_pool_from_config, DbError, PoolConfig, StoreRow};

fn app_config(database_url: Option<&str>) -> AppConfig {
    AppConfig {
        database_url: database_url.map(str::to_string),
        env: Environment::Test,
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        scraper_request_timeout_secs: 30,
        scraper_user_agent: "ua".to_string(),
        competitor_listing_url: "https://lists.example.com".to_string(),
        gemini_api_key: None,
        gemini_model: "gemini-1.5-flash".to_string(),
        gemini_api_base: "https://generativelanguage.googleapis.com".to_string(),
    }
}

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let config = app_config(Some("postgres://example"));

    let pool_config = PoolConfig::from_app_config(&config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[tokio::test]
async fn connect_pool_from_config_requires_database_url() {
    let result = connect_pool_from_config(&app_config(None)).await;
    assert!(
        matches!(result, Err(DbError::MissingDatabaseUrl)),
        "expected MissingDatabaseUrl, got: {result:?}"
    );
}

#[test]
fn store_row_converts_into_record() {
    let now = Utc::now();
    let row = StoreRow {
        id: 1,
        url: "https://acme.example.com".to_string(),
        brand_name: "Acme Co".to_string(),
        product_catalog: Json(vec!["Widget".to_string()]),
        hero_products: Json(Vec::new()),
        policies: Json(Policies {
            privacy_policy: "We keep little.".to_string(),
            return_policy: String::new(),
        }),
        faqs: Json(Vec::new()),
        social_handles: Json(Default::default()),
        contact_details: Json(Default::default()),
        brand_about: "Founded in a garage.".to_string(),
        important_links: Json(ImportantLinks::for_origin("https://acme.example.com")),
        created_at: now,
        updated_at: now,
    };

    let record = row.into_record();
    let mut expected = StoreRecord::empty("https://acme.example.com");
    expected.brand_name = "Acme Co".to_string();
    expected.product_catalog = vec!["Widget".to_string()];
    expected.policies.privacy_policy = "We keep little.".to_string();
    expected.brand_about = "Founded in a garage.".to_string();
    assert_eq!(record, expected);
}
