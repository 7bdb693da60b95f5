use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::{AppError, Result};
use crate::models::{Role, User};

/// Claims carried by a bearer token.
///
/// The verified token is the only identity channel: everything the gates and
/// ownership checks know about the caller comes from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// Signature mismatch, malformed structure, and expiry all collapse here;
/// callers must not learn which one it was.
#[derive(Debug, thiserror::Error)]
#[error("Invalid token")]
pub struct InvalidToken;

/// Sign a token for the given user with the process-wide secret.
pub fn issue_token(config: &JwtConfig, user: &User) -> Result<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(config.expiry_hours as i64);

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role(),
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
}

/// Verify signature and expiry, returning the claims.
///
/// Expiry is checked with zero leeway: a token is invalid from the instant
/// `now >= exp`.
pub fn verify_token(config: &JwtConfig, token: &str) -> std::result::Result<Claims, InvalidToken> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 24,
        }
    }

    fn user(email: &str, role: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: email.to_string(),
            password_hash: String::new(),
            role: role.to_string(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let config = jwt_config();
        let user = user("a@x.com", "user");

        let token = issue_token(&config, &user).expect("should issue token");
        let claims = verify_token(&config, &token).expect("should verify token");

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, Role::User);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn admin_role_survives_roundtrip() {
        let config = jwt_config();
        let token = issue_token(&config, &user("root@x.com", "admin")).expect("should issue");
        let claims = verify_token(&config, &token).expect("should verify");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn expired_token_rejected() {
        let config = jwt_config();
        let user = user("a@x.com", "user");

        let past = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: Role::User,
            iat: (past - Duration::hours(1)).timestamp() as usize,
            exp: past.timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("should encode");

        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let config = jwt_config();
        let other = JwtConfig {
            secret: "other-secret".to_string(),
            expiry_hours: 24,
        };

        let token = issue_token(&other, &user("a@x.com", "user")).expect("should issue");
        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn malformed_token_rejected() {
        let config = jwt_config();
        assert!(verify_token(&config, "not-a-token").is_err());
        assert!(verify_token(&config, "").is_err());
    }
}
