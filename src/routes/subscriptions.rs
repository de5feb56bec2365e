// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Subscription lifecycle routes for authenticated viewers.

use crate::error::Result;
use crate::models::{Identity, Subscription};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::State,
    routing::post,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Subscription routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/subscription",
        post(subscribe).delete(cancel).get(get_current),
    )
}

#[derive(Deserialize)]
struct SubscribeRequest {
    /// "weekly" or "monthly"; anything else is `invalid_plan`
    plan: String,
}

/// Subscription row as returned to clients.
#[derive(Serialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub plan: String,
    pub status: String,
    pub start_date: String,
    pub renews_at: String,
    /// Minor currency units
    pub amount: u32,
    pub auto_renew: bool,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(sub: Subscription) -> Self {
        Self {
            id: sub.id,
            plan: sub.plan.as_str().to_string(),
            status: sub.status.as_str().to_string(),
            start_date: format_utc_rfc3339(sub.start_date),
            renews_at: format_utc_rfc3339(sub.renews_at),
            amount: sub.amount,
            auto_renew: sub.auto_renew,
        }
    }
}

/// Purchase a new subscription term for the authenticated viewer.
async fn subscribe(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<SubscribeRequest>,
) -> Result<Json<SubscriptionResponse>> {
    let sub = state
        .subscriptions
        .subscribe(&identity.user_id, &body.plan, chrono::Utc::now())?;
    Ok(Json(sub.into()))
}

/// Cancel the authenticated viewer's current subscription, effective
/// immediately.
async fn cancel(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<SubscriptionResponse>> {
    let sub = state
        .subscriptions
        .cancel(&identity.user_id, chrono::Utc::now())?;
    Ok(Json(sub.into()))
}

#[derive(Serialize)]
struct CurrentSubscriptionResponse {
    subscription: Option<SubscriptionResponse>,
}

/// Current subscription (if any), after lazy reconciliation.
async fn get_current(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<CurrentSubscriptionResponse>> {
    let sub = state
        .subscriptions
        .current_subscription(&identity.user_id, chrono::Utc::now())?;
    Ok(Json(CurrentSubscriptionResponse {
        subscription: sub.map(Into::into),
    }))
}
