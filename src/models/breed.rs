use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Shared across users; no ownership dimension.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Breed {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewBreed {
    pub name: String,
}

#[derive(Debug, Default)]
pub struct BreedChanges {
    pub name: Option<String>,
}
