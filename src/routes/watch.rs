// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Playback entitlement route.
//!
//! Public: guests are a first-class caller here. The optional-auth
//! middleware attaches an `Identity` extension when a valid token is
//! present; its absence means guest, never an error.

use crate::error::{AppError, Result};
use crate::models::{Decision, Identity};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Watch routes (optional authentication; applied in routes/mod.rs).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/episodes/{episode_id}/watch", get(can_watch))
}

/// Decide whether the caller may watch an episode.
///
/// Always 200 with an allow/deny decision; the reason drives the client's
/// call-to-action ("subscribe" vs "renew"). Unknown episodes are 404.
async fn can_watch(
    State(state): State<Arc<AppState>>,
    Path(episode_id): Path<String>,
    identity: Option<Extension<Identity>>,
) -> Result<Json<Decision>> {
    let episode = state
        .catalog
        .get(&episode_id)
        .ok_or_else(|| AppError::NotFound(format!("Episode {} not found", episode_id)))?;

    let identity = identity.map(|Extension(id)| id);
    let decision =
        state
            .entitlements
            .can_watch(identity.as_ref(), &episode, chrono::Utc::now())?;

    tracing::debug!(
        episode_id = %episode_id,
        user_id = identity.as_ref().map(|i| i.user_id.as_str()),
        allowed = decision.allowed,
        reason = ?decision.reason,
        "Watch decision"
    );

    Ok(Json(decision))
}
