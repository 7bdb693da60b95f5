use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{Cat, CatChanges};
use crate::services::CatService;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cat).get(list_cats))
        .route("/:id", get(get_cat).patch(update_cat).delete(delete_cat))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCatRequest {
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(range(min = 1))]
    pub age: i32,
    pub breed_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCatRequest {
    #[validate(length(min = 3))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub age: Option<i32>,
    pub breed_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CatResponse {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub breed_id: Option<String>,
    pub owner_email: String,
}

impl From<Cat> for CatResponse {
    fn from(cat: Cat) -> Self {
        Self {
            id: cat.id.to_string(),
            name: cat.name,
            age: cat.age,
            breed_id: cat.breed_id.map(|id| id.to_string()),
            owner_email: cat.owner_email,
        }
    }
}

async fn create_cat(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<CreateCatRequest>,
) -> Result<(StatusCode, Json<CatResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let cat_service = CatService::new(state.cats.clone(), state.breeds.clone());
    let cat = cat_service
        .create(&current_user, payload.name, payload.age, payload.breed_id)
        .await?;

    Ok((StatusCode::CREATED, Json(cat.into())))
}

async fn list_cats(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<Vec<CatResponse>>> {
    let cat_service = CatService::new(state.cats.clone(), state.breeds.clone());
    let cats = cat_service.list(&current_user).await?;

    Ok(Json(cats.into_iter().map(CatResponse::from).collect()))
}

async fn get_cat(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<CatResponse>> {
    let id = parse_id(&id)?;

    let cat_service = CatService::new(state.cats.clone(), state.breeds.clone());
    let cat = cat_service.get(&current_user, id).await?;

    Ok(Json(cat.into()))
}

async fn update_cat(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCatRequest>,
) -> Result<Json<CatResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let id = parse_id(&id)?;

    let cat_service = CatService::new(state.cats.clone(), state.breeds.clone());
    let cat = cat_service
        .update(
            &current_user,
            id,
            CatChanges {
                name: payload.name,
                age: payload.age,
                breed_id: payload.breed_id,
            },
        )
        .await?;

    Ok(Json(cat.into()))
}

async fn delete_cat(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    let cat_service = CatService::new(state.cats.clone(), state.breeds.clone());
    cat_service.delete(&current_user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::BadRequest("Invalid cat ID".to_string()))
}
