// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entitlement decisions returned to the playback endpoints.

use serde::{Deserialize, Serialize};

/// Why a watch request was allowed or denied.
///
/// Deny reasons are client-facing: `expired` drives a "renew" call-to-action
/// while `no-subscription` drives "subscribe", so the resolver must keep them
/// distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessReason {
    /// Draft or archived episode; denies everyone, admins included
    Unpublished,
    /// Within the free-preview window, no identity needed
    GuestPreview,
    /// Active paid subscription
    Subscriber,
    /// Admin moderation/preview access
    AdminOverride,
    /// Signed-in viewer on the free tier hitting paid content
    FreeTierBlocked,
    /// A subscription existed but has lapsed or been canceled
    Expired,
    /// No subscription on record (guests included)
    NoSubscription,
}

/// Outcome of a single `can_watch` evaluation. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub reason: AccessReason,
}

impl Decision {
    pub fn allow(reason: AccessReason) -> Self {
        Self {
            allowed: true,
            reason,
        }
    }

    pub fn deny(reason: AccessReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}
