use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// An owned resource. `owner_email` is set from the creating principal and
/// never changes afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cat {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub breed_id: Option<Uuid>,
    pub owner_email: String,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NewCat {
    pub name: String,
    pub age: i32,
    pub breed_id: Option<Uuid>,
    pub owner_email: String,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Default)]
pub struct CatChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed_id: Option<Uuid>,
}
