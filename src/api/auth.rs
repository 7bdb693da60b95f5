use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{Role, User};
use crate::services::AuthService;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/profile", get(profile))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub role: Option<Role>,
}

/// Created identity; the password never appears in any response shape.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let auth_service = AuthService::new(state.users.clone(), state.config.jwt.clone());
    let user = auth_service
        .signup(payload.name, payload.email, payload.password, payload.role)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// No shape constraint on the password here: a short guess must fail exactly
// like a wrong one, through `InvalidCredentials`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let auth_service = AuthService::new(state.users.clone(), state.config.jwt.clone());
    let (_user, access_token) = auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse { access_token }))
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// Echo the authenticated principal from request context; identity is never
/// re-derived here.
async fn profile(Extension(current_user): Extension<CurrentUser>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        id: current_user.id.to_string(),
        email: current_user.email,
        role: current_user.role.as_str().to_string(),
    })
}
