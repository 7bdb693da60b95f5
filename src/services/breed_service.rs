use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Breed, BreedChanges, NewBreed};
use crate::store::BreedStore;

/// Breeds are role-gated at the route level only; there is no ownership
/// dimension here.
pub struct BreedService {
    breeds: Arc<dyn BreedStore>,
}

impl BreedService {
    pub fn new(breeds: Arc<dyn BreedStore>) -> Self {
        Self { breeds }
    }

    pub async fn create(&self, name: String) -> Result<Breed> {
        self.breeds.create(NewBreed { name }).await
    }

    pub async fn list(&self) -> Result<Vec<Breed>> {
        self.breeds.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Breed> {
        self.breeds
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Breed with id {} not found", id)))
    }

    pub async fn update(&self, id: Uuid, changes: BreedChanges) -> Result<Breed> {
        self.breeds
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Breed with id {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.breeds.delete(id).await? {
            return Err(AppError::NotFound(format!("Breed with id {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBreedStore;

    fn service() -> BreedService {
        BreedService::new(Arc::new(MemoryBreedStore::new()))
    }

    #[tokio::test]
    async fn create_and_get_roundtrip() {
        let service = service();

        let breed = service.create("Siamese".to_string()).await.unwrap();
        let found = service.get(breed.id).await.unwrap();

        assert_eq!(found.name, "Siamese");
    }

    #[tokio::test]
    async fn unknown_id_not_found() {
        let service = service();
        let id = Uuid::new_v4();

        let result = service.get(id).await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.contains(&id.to_string())));

        assert!(matches!(
            service.update(id, BreedChanges::default()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_renames_breed() {
        let service = service();
        let breed = service.create("Siamese".to_string()).await.unwrap();

        let updated = service
            .update(
                breed.id,
                BreedChanges {
                    name: Some("Persian".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Persian");
    }

    #[tokio::test]
    async fn delete_removes_breed() {
        let service = service();
        let breed = service.create("Siamese".to_string()).await.unwrap();

        service.delete(breed.id).await.unwrap();

        assert!(service.list().await.unwrap().is_empty());
    }
}
