use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Breed, BreedChanges};
use crate::services::BreedService;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_breed).get(list_breeds))
        .route(
            "/:id",
            get(get_breed).patch(update_breed).delete(delete_breed),
        )
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBreedRequest {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBreedRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreedResponse {
    pub id: String,
    pub name: String,
}

impl From<Breed> for BreedResponse {
    fn from(breed: Breed) -> Self {
        Self {
            id: breed.id.to_string(),
            name: breed.name,
        }
    }
}

async fn create_breed(
    State(state): State<AppState>,
    Json(payload): Json<CreateBreedRequest>,
) -> Result<(StatusCode, Json<BreedResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let breed_service = BreedService::new(state.breeds.clone());
    let breed = breed_service.create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(breed.into())))
}

async fn list_breeds(State(state): State<AppState>) -> Result<Json<Vec<BreedResponse>>> {
    let breed_service = BreedService::new(state.breeds.clone());
    let breeds = breed_service.list().await?;

    Ok(Json(breeds.into_iter().map(BreedResponse::from).collect()))
}

async fn get_breed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BreedResponse>> {
    let id = parse_id(&id)?;

    let breed_service = BreedService::new(state.breeds.clone());
    let breed = breed_service.get(id).await?;

    Ok(Json(breed.into()))
}

async fn update_breed(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBreedRequest>,
) -> Result<Json<BreedResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let id = parse_id(&id)?;

    let breed_service = BreedService::new(state.breeds.clone());
    let breed = breed_service
        .update(id, BreedChanges { name: payload.name })
        .await?;

    Ok(Json(breed.into()))
}

async fn delete_breed(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    let breed_service = BreedService::new(state.breeds.clone());
    breed_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest("Invalid breed ID".to_string()))
}
