// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT authentication middleware.
//!
//! Token verification is the identity collaborator's job; this layer only
//! turns a verified token into an `Identity` extension. The watch endpoint
//! uses the optional variant: no token (or a bad one) means guest, which the
//! entitlement resolver accepts explicitly.

use crate::error::AppError;
use crate::models::{Identity, Role, UserStatus};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session cookie name set by the identity frontend.
const SESSION_COOKIE: &str = "clipstream_token";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role at token-issue time
    pub role: Role,
    /// Account standing at token-issue time
    #[serde(default)]
    pub status: Option<UserStatus>,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Pull the bearer token out of a request, cookie first, then header.
fn extract_token(jar: &CookieJar, request: &Request) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;
    auth_header.strip_prefix("Bearer ").map(str::to_string)
}

/// Verify a token and build the identity it carries.
fn verify_token(state: &AppState, token: &str) -> Option<Identity> {
    let key = DecodingKey::from_secret(&state.config.jwt_signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let claims = decode::<Claims>(token, &key, &validation).ok()?.claims;

    // Tokens minted before a suspension/deletion are still signed; reject them
    if matches!(
        claims.status,
        Some(UserStatus::Suspended) | Some(UserStatus::Deleted)
    ) {
        return None;
    }

    Some(Identity {
        user_id: claims.sub,
        role: claims.role,
    })
}

/// Middleware that requires valid JWT authentication.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&jar, &request).ok_or(AppError::Unauthorized)?;
    let identity = verify_token(&state, &token).ok_or(AppError::InvalidToken)?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Middleware that attaches an identity when one is present and valid, and
/// lets the request through as a guest otherwise.
pub async fn optional_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(identity) =
        extract_token(&jar, &request).and_then(|token| verify_token(&state, &token))
    {
        request.extensions_mut().insert(identity);
    }
    next.run(request).await
}

/// Create a JWT for a user session.
pub fn create_jwt(user_id: &str, role: Role, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        status: Some(UserStatus::Active),
        iat: now,
        exp: now + 30 * 24 * 60 * 60, // 30 days
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}
