//! Persistence interfaces consumed by the services.
//!
//! Durable invariants (credential uniqueness, ownership) live behind these
//! traits; non-deleted filtering happens here so callers never see
//! soft-deleted rows.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Breed, BreedChanges, Cat, CatChanges, NewBreed, NewCat, NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Persist a new credential record. The store's uniqueness constraint is
    /// the authoritative duplicate-email guarantee; a violation surfaces as
    /// `DuplicateCredential`.
    async fn create(&self, new_user: NewUser) -> Result<User>;
}

#[async_trait]
pub trait CatStore: Send + Sync {
    async fn create(&self, new_cat: NewCat) -> Result<Cat>;
    async fn list(&self) -> Result<Vec<Cat>>;
    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Cat>>;
    async fn find(&self, id: Uuid) -> Result<Option<Cat>>;
    async fn update(&self, id: Uuid, changes: CatChanges) -> Result<Option<Cat>>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait BreedStore: Send + Sync {
    async fn create(&self, new_breed: NewBreed) -> Result<Breed>;
    async fn list(&self) -> Result<Vec<Breed>>;
    async fn find(&self, id: Uuid) -> Result<Option<Breed>>;
    async fn update(&self, id: Uuid, changes: BreedChanges) -> Result<Option<Breed>>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
