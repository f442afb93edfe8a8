use crate::handlers::ErrorResponse;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use helix_models::{Identity, IdentityClaims};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;

/// Validates session tokens issued by the platform's auth layer. This
/// service never authenticates users itself; it only verifies and
/// normalizes the claims into an `Identity`.
pub struct IdentityVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl IdentityVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
        let data = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(
    headers: &HeaderMap,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    "missing_auth_header",
                    "Authorization header is required",
                )),
            )
        })?
        .to_str()
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    "invalid_auth_header",
                    "Invalid Authorization header format",
                )),
            )
        })?;

    if !auth_header.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                "invalid_auth_scheme",
                "Authorization header must use Bearer scheme",
            )),
        ));
    }

    Ok(auth_header[7..].to_string())
}

fn resolve_identity(
    state: &crate::AppState,
    headers: &HeaderMap,
) -> Result<Identity, (StatusCode, Json<ErrorResponse>)> {
    let token = extract_bearer_token(headers)?;

    let claims = state.verifier.verify(&token).map_err(|e| {
        tracing::debug!("Token validation failed: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("invalid_token", &e.to_string())),
        )
    })?;

    Identity::from_claims(&claims).map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                "invalid_user_id",
                "Invalid user ID in token",
            )),
        )
    })
}

/// Middleware to require a resolved identity
pub async fn require_identity(
    State(state): State<Arc<crate::AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let identity = resolve_identity(&state, &headers)?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Middleware to require a platform admin
pub async fn require_platform_admin(
    State(state): State<Arc<crate::AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let identity = resolve_identity(&state, &headers)?;

    if !identity.is_admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(
                "insufficient_permissions",
                "This action requires platform admin access",
            )),
        ));
    }

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
