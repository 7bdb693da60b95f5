//! In-memory store implementations for tests and local runs.
//!
//! Same observable contract as the Postgres stores, including the
//! duplicate-email backstop inside `create`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Breed, BreedChanges, Cat, CatChanges, NewBreed, NewCat, NewUser, User};
use crate::store::{BreedStore, CatStore, UserStore};

#[derive(Default, Clone)]
pub struct MemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email && u.deleted_at.is_none())
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|u| u.email == new_user.email && u.deleted_at.is_none())
        {
            return Err(AppError::DuplicateCredential);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role.as_str().to_string(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());

        Ok(user)
    }
}

#[derive(Default, Clone)]
pub struct MemoryCatStore {
    cats: Arc<Mutex<Vec<Cat>>>,
}

impl MemoryCatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatStore for MemoryCatStore {
    async fn create(&self, new_cat: NewCat) -> Result<Cat> {
        let mut cats = self.cats.lock().unwrap();

        let now = Utc::now();
        let cat = Cat {
            id: Uuid::new_v4(),
            name: new_cat.name,
            age: new_cat.age,
            breed_id: new_cat.breed_id,
            owner_email: new_cat.owner_email,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        cats.push(cat.clone());

        Ok(cat)
    }

    async fn list(&self) -> Result<Vec<Cat>> {
        let cats = self.cats.lock().unwrap();
        Ok(cats
            .iter()
            .filter(|c| c.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Cat>> {
        let cats = self.cats.lock().unwrap();
        Ok(cats
            .iter()
            .filter(|c| c.owner_email == owner_email && c.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Cat>> {
        let cats = self.cats.lock().unwrap();
        Ok(cats
            .iter()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .cloned())
    }

    async fn update(&self, id: Uuid, changes: CatChanges) -> Result<Option<Cat>> {
        let mut cats = self.cats.lock().unwrap();

        let Some(cat) = cats
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            cat.name = name;
        }
        if let Some(age) = changes.age {
            cat.age = age;
        }
        if let Some(breed_id) = changes.breed_id {
            cat.breed_id = Some(breed_id);
        }
        cat.updated_at = Utc::now();

        Ok(Some(cat.clone()))
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let mut cats = self.cats.lock().unwrap();

        let Some(cat) = cats
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        else {
            return Ok(false);
        };

        cat.deleted_at = Some(Utc::now());
        Ok(true)
    }
}

#[derive(Default, Clone)]
pub struct MemoryBreedStore {
    breeds: Arc<Mutex<Vec<Breed>>>,
}

impl MemoryBreedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BreedStore for MemoryBreedStore {
    async fn create(&self, new_breed: NewBreed) -> Result<Breed> {
        let mut breeds = self.breeds.lock().unwrap();

        let now = Utc::now();
        let breed = Breed {
            id: Uuid::new_v4(),
            name: new_breed.name,
            created_at: now,
            updated_at: now,
        };
        breeds.push(breed.clone());

        Ok(breed)
    }

    async fn list(&self) -> Result<Vec<Breed>> {
        let breeds = self.breeds.lock().unwrap();
        Ok(breeds.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Breed>> {
        let breeds = self.breeds.lock().unwrap();
        Ok(breeds.iter().find(|b| b.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: BreedChanges) -> Result<Option<Breed>> {
        let mut breeds = self.breeds.lock().unwrap();

        let Some(breed) = breeds.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            breed.name = name;
        }
        breed.updated_at = Utc::now();

        Ok(Some(breed.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut breeds = self.breeds.lock().unwrap();
        let before = breeds.len();
        breeds.retain(|b| b.id != id);
        Ok(breeds.len() < before)
    }
}
