// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin routes: revenue dashboard and episode catalog seeding.

use crate::error::{AppError, Result};
use crate::models::{EpisodeRef, Identity};
use crate::services::{ReportPeriod, RevenueReport};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Admin routes (require authentication via JWT; role is checked per
/// handler so non-admins get 403 rather than 401).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/admin/revenue", get(revenue_report))
        .route("/api/admin/episodes/{episode_id}", put(upsert_episode))
}

fn require_admin(identity: &Identity) -> Result<()> {
    if !identity.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

#[derive(Deserialize)]
struct RevenueQuery {
    /// "week" or "month"
    #[serde(default = "default_period")]
    period: String,
}

fn default_period() -> String {
    "month".to_string()
}

/// Revenue report for the admin dashboard.
async fn revenue_report(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueReport>> {
    require_admin(&identity)?;

    let period = ReportPeriod::parse(&query.period)?;
    let report = state.revenue.revenue_report(period, chrono::Utc::now())?;
    Ok(Json(report))
}

#[derive(Deserialize)]
struct UpsertEpisodeRequest {
    /// 1-based position within its series
    order: u32,
    /// "draft", "published", or "archived"
    status: crate::models::EpisodeStatus,
}

#[derive(Serialize)]
struct UpsertEpisodeResponse {
    episode_id: String,
    order: u32,
}

/// Seed or update an episode's entitlement-relevant metadata.
///
/// The content service is the source of truth for full episode documents;
/// this endpoint only mirrors the `(order, status)` pair the resolver reads.
async fn upsert_episode(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(episode_id): Path<String>,
    Json(body): Json<UpsertEpisodeRequest>,
) -> Result<Json<UpsertEpisodeResponse>> {
    require_admin(&identity)?;

    if body.order == 0 {
        return Err(AppError::BadRequest(
            "episode order is 1-based".to_string(),
        ));
    }

    state.catalog.upsert(
        &episode_id,
        EpisodeRef {
            order: body.order,
            status: body.status,
        },
    );

    tracing::info!(episode_id = %episode_id, order = body.order, "Episode metadata upserted");

    Ok(Json(UpsertEpisodeResponse {
        episode_id,
        order: body.order,
    }))
}
