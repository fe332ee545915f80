//! Hosted relational store — university dataset reads and profile writes.
//!
//! Handlers only see the `UniversityStore` / `ProfileStore` traits; `AppState`
//! carries `Arc<dyn ...>` so tests substitute in-memory fakes.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{NewProfile, UniversityRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UniversityStore: Send + Sync {
    /// The full dataset in stable dataset order, fetched fresh on every call.
    async fn list_universities(&self) -> Result<Vec<UniversityRecord>, StoreError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn insert_profile(&self, profile: &NewProfile) -> Result<(), StoreError>;
}

/// Postgres-backed store. Numeric columns are cast to float8 so NUMERIC and
/// REAL schemas decode alike.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniversityStore for PgStore {
    async fn list_universities(&self) -> Result<Vec<UniversityRecord>, StoreError> {
        let rows = sqlx::query_as::<_, UniversityRecord>(
            r#"
            SELECT university_name,
                   country,
                   course,
                   min_cgpa::float8    AS min_cgpa,
                   min_ielts::float8   AS min_ielts,
                   tuition_fee::float8 AS tuition_fee,
                   avg_salary::float8  AS avg_salary
            FROM universities
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(retain_well_formed(rows))
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn insert_profile(&self, profile: &NewProfile) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO profiles (id, full_name, email, phone, role) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.role)
        .execute(&self.pool)
        .await?;

        info!("Profile row written for user {}", profile.id);
        Ok(())
    }
}

/// Drops records whose fee or salary would make ROI undefined.
pub fn retain_well_formed(records: Vec<UniversityRecord>) -> Vec<UniversityRecord> {
    records
        .into_iter()
        .filter(|r| {
            let ok = r.is_well_formed();
            if !ok {
                warn!(
                    "Skipping university '{}': non-positive or non-finite fee/salary/thresholds",
                    r.university_name
                );
            }
            ok
        })
        .collect()
}
