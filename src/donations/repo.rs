use std::collections::HashSet;

use sqlx::PgPool;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::donations::dto::DonationRequest;
use crate::donations::repo_types::Donation;

impl Donation {
    /// Persist an eligibility-checked submission, linked to the submitting
    /// user. Timestamps are assigned by the store.
    pub async fn create(
        db: &PgPool,
        req: &DonationRequest,
        donated_by: Uuid,
    ) -> Result<Donation, sqlx::Error> {
        sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations (name, age, gender, blood_group, weight, phone, donated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, age, gender, blood_group, weight, phone,
                      donated_by, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.age)
        .bind(&req.gender)
        .bind(&req.blood_group)
        .bind(req.weight)
        .bind(&req.phone)
        .bind(donated_by)
        .fetch_one(db)
        .await
    }

    /// Total number of stored donations.
    pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM donations")
            .fetch_one(db)
            .await
    }

    /// Distinct donor names from the trailing window, newest first, at most
    /// `limit` rows fetched before deduplication.
    pub async fn recent_names(
        db: &PgPool,
        window_days: i64,
        limit: i64,
    ) -> Result<Vec<String>, sqlx::Error> {
        let cutoff = OffsetDateTime::now_utc() - Duration::days(window_days);
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM donations
            WHERE created_at >= $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(cutoff)
        .bind(limit)
        .fetch_all(db)
        .await?;
        Ok(dedup_preserving_order(names))
    }
}

/// Keep the first occurrence of each name; input is newest-first, so the
/// most recent donation wins.
fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
