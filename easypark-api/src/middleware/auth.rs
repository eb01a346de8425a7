use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use easypark_domain::Role;

use crate::{auth::Claims, error::AppError, state::AppState};

/// Authenticated subject injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

/// Bearer-token authentication middleware.
///
/// Resolves the token into `AuthUser` for downstream handlers; any failure
/// (missing header, bad signature, expired, subject no longer in the
/// directory) is a 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 1. Extract token from Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))?;

    // 2. Decode and validate JWT
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthenticationError("Invalid or expired token".to_string()))?;

    let claims = token_data.claims;

    // 3. The subject must still exist in the directory
    if state.users.get(&claims.sub).is_none() {
        return Err(AppError::AuthenticationError(
            "Invalid or expired token".to_string(),
        ));
    }

    // 4. Inject the authenticated user into request extensions
    req.extensions_mut().insert(AuthUser {
        username: claims.sub,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Admin gate for handlers behind `auth_middleware`
pub fn require_admin(user: &AuthUser) -> Result<(), AppError> {
    if user.role != Role::Admin {
        return Err(AppError::AuthorizationError(
            "Admin access required".to_string(),
        ));
    }
    Ok(())
}
