// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clipstream: entitlement and subscription engine for a short-form video
//! streaming platform.
//!
//! This crate tracks paid-subscription lifecycles (subscribe, cancel, lazy
//! expiry), decides per-request whether a viewer may watch an episode, and
//! aggregates subscription revenue for the admin dashboard.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::EpisodeCatalog;
use services::{EntitlementResolver, RevenueService, SubscriptionService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: EpisodeCatalog,
    pub subscriptions: SubscriptionService,
    pub entitlements: EntitlementResolver,
    pub revenue: RevenueService,
}
