// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use clipstream::config::Config;
use clipstream::db::{EpisodeCatalog, MemoryStore, SubscriptionStore};
use clipstream::models::{EpisodeRef, EpisodeStatus, Role};
use clipstream::routes::create_router;
use clipstream::services::{EntitlementResolver, RevenueService, SubscriptionService};
use clipstream::AppState;
use std::sync::Arc;

/// Create a test app over a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();

    let store: Arc<dyn SubscriptionStore> = Arc::new(MemoryStore::new());
    let catalog = EpisodeCatalog::new();
    let subscriptions = SubscriptionService::new(store.clone(), config.pricing);
    let entitlements = EntitlementResolver::new(subscriptions.clone());
    let revenue = RevenueService::new(store, subscriptions.clone());

    let state = Arc::new(AppState {
        config,
        catalog,
        subscriptions,
        entitlements,
        revenue,
    });

    (create_router(state.clone()), state)
}

/// Seed one episode into the catalog.
#[allow(dead_code)]
pub fn seed_episode(state: &AppState, episode_id: &str, order: u32, status: EpisodeStatus) {
    state
        .catalog
        .upsert(episode_id, EpisodeRef { order, status });
}

/// Mint a session token for `user_id` against the test signing key.
#[allow(dead_code)]
pub fn session_token(state: &AppState, user_id: &str, role: Role) -> String {
    clipstream::middleware::auth::create_jwt(user_id, role, &state.config.jwt_signing_key)
        .expect("Failed to mint test JWT")
}
