use std::sync::Arc;

use crate::config::JwtConfig;
use crate::error::{AppError, Result};
use crate::models::{NewUser, Role, User};
use crate::security::{password, token};
use crate::store::UserStore;

pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    /// Create a credential record, role defaulted to `user`.
    ///
    /// The lookup here is best-effort early rejection; the store's unique
    /// constraint closes the read-then-insert race.
    pub async fn signup(
        &self,
        name: String,
        email: String,
        password: String,
        role: Option<Role>,
    ) -> Result<User> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateCredential);
        }

        let password_hash = password::hash_password(&password)?;

        let user = self
            .users
            .create(NewUser {
                name,
                email,
                password_hash,
                role: role.unwrap_or(Role::User),
            })
            .await?;

        tracing::info!(user = %user.email, "credential created");

        Ok(user)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password produce the same error; a caller
    /// must not be able to tell which one happened.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let access_token = token::issue_token(&self.jwt, &user)?;

        Ok((user, access_token))
    }
}
