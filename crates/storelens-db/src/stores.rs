//! Database operations for `stores`.
//!
//! One row per storefront URL. Structured record fields live in JSONB
//! columns and are written and read through [`sqlx::types::Json`].

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};
use storelens_core::{ContactDetails, Faq, ImportantLinks, Policies, SocialHandles, StoreRecord};

use crate::DbError;

/// A row from the `stores` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub id: i64,
    pub url: String,
    pub brand_name: String,
    pub product_catalog: Json<Vec<String>>,
    pub hero_products: Json<Vec<String>>,
    pub policies: Json<Policies>,
    pub faqs: Json<Vec<Faq>>,
    pub social_handles: Json<SocialHandles>,
    pub contact_details: Json<ContactDetails>,
    pub brand_about: String,
    pub important_links: Json<ImportantLinks>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreRow {
    /// Converts the row back into the record it was written from.
    #[must_use]
    pub fn into_record(self) -> StoreRecord {
        StoreRecord {
            url: self.url,
            brand_name: self.brand_name,
            product_catalog: self.product_catalog.0,
            hero_products: self.hero_products.0,
            policies: self.policies.0,
            faqs: self.faqs.0,
            social_handles: self.social_handles.0,
            contact_details: self.contact_details.0,
            brand_about: self.brand_about,
            important_links: self.important_links.0,
        }
    }
}

/// Upserts one store record.
///
/// Conflicts on `url` overwrite every column and bump `updated_at`, so the
/// last writer wins. Accepts a pool, a connection, or an open transaction.
///
/// Returns the internal `id` of the upserted row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_store<'e, E>(executor: E, record: &StoreRecord) -> Result<i64, DbError>
where
    E: PgExecutor<'e>,
{
    let id: i64 = sqlx::query_scalar::<_, i64>(
        "INSERT INTO stores \
             (url, brand_name, product_catalog, hero_products, policies, faqs, \
              social_handles, contact_details, brand_about, important_links) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         ON CONFLICT (url) DO UPDATE SET \
             brand_name      = EXCLUDED.brand_name, \
             product_catalog = EXCLUDED.product_catalog, \
             hero_products   = EXCLUDED.hero_products, \
             policies        = EXCLUDED.policies, \
             faqs            = EXCLUDED.faqs, \
             social_handles  = EXCLUDED.social_handles, \
             contact_details = EXCLUDED.contact_details, \
             brand_about     = EXCLUDED.brand_about, \
             important_links = EXCLUDED.important_links, \
             updated_at      = NOW() \
         RETURNING id",
    )
    .bind(&record.url)
    .bind(&record.brand_name)
    .bind(Json(&record.product_catalog))
    .bind(Json(&record.hero_products))
    .bind(Json(&record.policies))
    .bind(Json(&record.faqs))
    .bind(Json(&record.social_handles))
    .bind(Json(&record.contact_details))
    .bind(&record.brand_about)
    .bind(Json(&record.important_links))
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// Upserts every record inside a single transaction.
///
/// If any upsert fails the transaction is dropped without committing, so no
/// record from the batch is persisted. Returns row ids in input order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn upsert_stores(pool: &PgPool, records: &[StoreRecord]) -> Result<Vec<i64>, DbError> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(records.len());

    for record in records {
        ids.push(upsert_store(&mut *tx, record).await?);
    }

    tx.commit().await?;
    tracing::debug!(count = ids.len(), "store records persisted");
    Ok(ids)
}

/// Fetches the row for `url`, if one has been persisted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_store_by_url(pool: &PgPool, url: &str) -> Result<Option<StoreRow>, DbError> {
    let row = sqlx::query_as::<_, StoreRow>(
        "SELECT id, url, brand_name, product_catalog, hero_products, policies, faqs, \
                social_handles, contact_details, brand_about, important_links, \
                created_at, updated_at \
         FROM stores \
         WHERE url = $1",
    )
    .bind(url)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Total number of persisted stores.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_stores(pool: &PgPool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stores")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
