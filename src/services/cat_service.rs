use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{Cat, CatChanges, NewCat, Role};
use crate::services::ensure_owner;
use crate::store::{BreedStore, CatStore};

pub struct CatService {
    cats: Arc<dyn CatStore>,
    breeds: Arc<dyn BreedStore>,
}

impl CatService {
    pub fn new(cats: Arc<dyn CatStore>, breeds: Arc<dyn BreedStore>) -> Self {
        Self { cats, breeds }
    }

    /// Create a cat owned by the calling principal.
    pub async fn create(
        &self,
        user: &CurrentUser,
        name: String,
        age: i32,
        breed_id: Option<Uuid>,
    ) -> Result<Cat> {
        if let Some(breed_id) = breed_id {
            self.ensure_breed_exists(breed_id).await?;
        }

        self.cats
            .create(NewCat {
                name,
                age,
                breed_id,
                owner_email: user.email.clone(),
            })
            .await
    }

    /// List cats visible to the principal.
    ///
    /// Admins see everything; everyone else sees only their own cats, and an
    /// empty result is "you have none", not a denial.
    pub async fn list(&self, user: &CurrentUser) -> Result<Vec<Cat>> {
        if user.role == Role::Admin {
            return self.cats.list().await;
        }

        let cats = self.cats.list_by_owner(&user.email).await?;

        if cats.is_empty() {
            return Err(AppError::NotFound(format!(
                "No cats found for {}",
                user.email
            )));
        }

        Ok(cats)
    }

    pub async fn get(&self, user: &CurrentUser, id: Uuid) -> Result<Cat> {
        let cat = self.load(id).await?;
        ensure_owner(user, &cat.owner_email)?;
        Ok(cat)
    }

    pub async fn update(&self, user: &CurrentUser, id: Uuid, changes: CatChanges) -> Result<Cat> {
        let cat = self.load(id).await?;
        ensure_owner(user, &cat.owner_email)?;

        if let Some(breed_id) = changes.breed_id {
            self.ensure_breed_exists(breed_id).await?;
        }

        self.cats
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cat with id {} not found", id)))
    }

    pub async fn delete(&self, user: &CurrentUser, id: Uuid) -> Result<()> {
        let cat = self.load(id).await?;
        ensure_owner(user, &cat.owner_email)?;

        self.cats.soft_delete(id).await?;
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Cat> {
        self.cats
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cat with id {} not found", id)))
    }

    async fn ensure_breed_exists(&self, breed_id: Uuid) -> Result<()> {
        self.breeds
            .find(breed_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Breed with id {} not found", breed_id)))?;
        Ok(())
    }
}
