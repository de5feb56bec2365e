// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Domain models for the entitlement and subscription engine.

pub mod decision;
pub mod episode;
pub mod subscription;
pub mod user;

pub use decision::{AccessReason, Decision};
pub use episode::{EpisodeRef, EpisodeStatus};
pub use subscription::{Plan, Subscription, SubscriptionStatus};
pub use user::{Identity, Role, UserStatus};
