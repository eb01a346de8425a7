use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use easypark_domain::Role;

use crate::{error::AppError, state::AppState};

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

// ============================================================================
// User Directory
// ============================================================================

pub struct User {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{PasswordHash, PasswordVerifier},
            Argon2,
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// In-memory user directory with argon2-hashed credentials
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Demo users: `user`/`12345` and `admin`/`12345`
    pub fn seed() -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            users: vec![
                User {
                    username: "user".to_string(),
                    password_hash: User::hash_password("12345")?,
                    role: Role::User,
                    name: "User".to_string(),
                },
                User {
                    username: "admin".to_string(),
                    password_hash: User::hash_password("12345")?,
                    role: Role::Admin,
                    name: "Admin".to_string(),
                },
            ],
        })
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Unified failure path: unknown user and wrong password are
    /// indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        let user = self.get(username)?;
        match user.verify_password(password) {
            Ok(true) => Some(user),
            _ => None,
        }
    }
}

// ============================================================================
// Login Route
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserInfo,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = match state.users.authenticate(&req.username, &req.password) {
        Some(user) => user,
        None => {
            tracing::warn!(username = %req.username, "Login failed - invalid credentials");
            return Err(AppError::AuthenticationError(
                "Invalid username or password".to_string(),
            ));
        }
    };

    let claims = Claims {
        sub: user.username.clone(),
        role: user.role,
        exp: (Utc::now() + Duration::minutes(state.auth.token_expiry_minutes as i64)).timestamp()
            as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    tracing::info!(username = %user.username, "Login successful");

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserInfo {
            username: user.username.clone(),
            role: user.role,
            name: user.name.clone(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let hash = User::hash_password("12345").unwrap();
        let user = User {
            username: "user".to_string(),
            password_hash: hash,
            role: Role::User,
            name: "User".to_string(),
        };

        assert!(user.verify_password("12345").unwrap());
        assert!(!user.verify_password("54321").unwrap());
    }

    #[test]
    fn test_directory_authentication() {
        let directory = UserDirectory::seed().unwrap();

        assert!(directory.authenticate("user", "12345").is_some());
        assert!(directory.authenticate("user", "wrong").is_none());
        assert!(directory.authenticate("ghost", "12345").is_none());

        let admin = directory.authenticate("admin", "12345").unwrap();
        assert_eq!(admin.role, Role::Admin);
    }
}
