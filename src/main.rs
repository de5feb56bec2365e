// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clipstream API Server
//!
//! Serves the entitlement and subscription engine: subscription lifecycle,
//! per-episode watch decisions, and the admin revenue dashboard.

use clipstream::{
    config::Config,
    db::{EpisodeCatalog, MemoryStore, SubscriptionStore},
    services::{EntitlementResolver, RevenueService, SubscriptionService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Clipstream API");

    // Initialize the subscription store and episode catalog
    let store: Arc<dyn SubscriptionStore> = Arc::new(MemoryStore::new());
    let catalog = EpisodeCatalog::new();

    // Wire up services around the shared store
    let subscriptions = SubscriptionService::new(store.clone(), config.pricing);
    let entitlements = EntitlementResolver::new(subscriptions.clone());
    let revenue = RevenueService::new(store, subscriptions.clone());
    tracing::info!(
        weekly = config.pricing.weekly,
        monthly = config.pricing.monthly,
        "Plan price table loaded"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        subscriptions,
        entitlements,
        revenue,
    });

    // Build router
    let app = clipstream::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clipstream=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
