//! sqlx-backed store implementations.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Breed, BreedChanges, Cat, CatChanges, NewBreed, NewCat, NewUser, User};
use crate::store::{BreedStore, CatStore, UserStore};

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as("SELECT * FROM users WHERE email = $1 AND deleted_at IS NULL")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            // The partial unique index on active emails is the authoritative
            // duplicate guard; the service-level lookup only narrows the race.
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateCredential,
            _ => AppError::from(err),
        })?;

        Ok(user)
    }
}

pub struct PgCatStore {
    pool: PgPool,
}

impl PgCatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatStore for PgCatStore {
    async fn create(&self, new_cat: NewCat) -> Result<Cat> {
        let cat = sqlx::query_as(
            r#"
            INSERT INTO cats (name, age, breed_id, owner_email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new_cat.name)
        .bind(new_cat.age)
        .bind(new_cat.breed_id)
        .bind(&new_cat.owner_email)
        .fetch_one(&self.pool)
        .await?;

        Ok(cat)
    }

    async fn list(&self) -> Result<Vec<Cat>> {
        let cats =
            sqlx::query_as("SELECT * FROM cats WHERE deleted_at IS NULL ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?;

        Ok(cats)
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Cat>> {
        let cats = sqlx::query_as(
            r#"
            SELECT * FROM cats
            WHERE owner_email = $1 AND deleted_at IS NULL
            ORDER BY created_at
            "#,
        )
        .bind(owner_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(cats)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Cat>> {
        let cat = sqlx::query_as("SELECT * FROM cats WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cat)
    }

    async fn update(&self, id: Uuid, changes: CatChanges) -> Result<Option<Cat>> {
        let cat = sqlx::query_as(
            r#"
            UPDATE cats
            SET name = COALESCE($2, name),
                age = COALESCE($3, age),
                breed_id = COALESCE($4, breed_id),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.age)
        .bind(changes.breed_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cat)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let result =
            sqlx::query("UPDATE cats SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

pub struct PgBreedStore {
    pool: PgPool,
}

impl PgBreedStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BreedStore for PgBreedStore {
    async fn create(&self, new_breed: NewBreed) -> Result<Breed> {
        let breed = sqlx::query_as("INSERT INTO breeds (name) VALUES ($1) RETURNING *")
            .bind(&new_breed.name)
            .fetch_one(&self.pool)
            .await?;

        Ok(breed)
    }

    async fn list(&self) -> Result<Vec<Breed>> {
        let breeds = sqlx::query_as("SELECT * FROM breeds ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(breeds)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Breed>> {
        let breed = sqlx::query_as("SELECT * FROM breeds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(breed)
    }

    async fn update(&self, id: Uuid, changes: BreedChanges) -> Result<Option<Breed>> {
        let breed = sqlx::query_as(
            r#"
            UPDATE breeds
            SET name = COALESCE($2, name), updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(breed)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM breeds WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
