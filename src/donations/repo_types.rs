use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Donation record in the database. Wire form is camelCase to match the
/// client contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub blood_group: String,
    pub weight: f64,
    pub phone: String,
    pub donated_by: Uuid, // user who submitted the form
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
