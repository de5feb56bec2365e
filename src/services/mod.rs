// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod entitlement;
pub mod lifecycle;
pub mod revenue;

pub use entitlement::{EntitlementResolver, FREE_PREVIEW_LIMIT};
pub use lifecycle::{Entitlement, SubscriptionService};
pub use revenue::{ReportPeriod, RevenueBucket, RevenueReport, RevenueService};
