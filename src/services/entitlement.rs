// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entitlement resolver.
//!
//! Decides whether a viewer may watch an episode. Pure given its inputs,
//! except that consulting the lifecycle service can persist a lazy-expiry
//! write; callers must treat it as possibly mutating store state.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{AccessReason, Decision, EpisodeRef, Identity, Role};
use crate::services::lifecycle::{Entitlement, SubscriptionService};

/// Episodes at or below this ordinal are watchable by anyone, identity or
/// not, as long as they are published.
pub const FREE_PREVIEW_LIMIT: u32 = 2;

/// Decision function for watch requests.
#[derive(Clone)]
pub struct EntitlementResolver {
    subscriptions: SubscriptionService,
}

impl EntitlementResolver {
    pub fn new(subscriptions: SubscriptionService) -> Self {
        Self { subscriptions }
    }

    /// Resolve a watch request.
    ///
    /// Rules, in order:
    /// 1. unpublished content denies everyone, admins included;
    /// 2. the free-preview window admits everyone;
    /// 3. guests never reach paid-tier episodes;
    /// 4. admins bypass the subscription check for moderation/preview;
    /// 5. otherwise entitlement decides, with `expired` and
    ///    `no-subscription` kept distinct for client messaging.
    pub fn can_watch(
        &self,
        identity: Option<&Identity>,
        episode: &EpisodeRef,
        now: DateTime<Utc>,
    ) -> Result<Decision> {
        if !episode.published() {
            return Ok(Decision::deny(AccessReason::Unpublished));
        }

        if episode.order <= FREE_PREVIEW_LIMIT {
            return Ok(Decision::allow(AccessReason::GuestPreview));
        }

        let Some(identity) = identity else {
            return Ok(Decision::deny(AccessReason::NoSubscription));
        };

        if identity.role == Role::Admin {
            return Ok(Decision::allow(AccessReason::AdminOverride));
        }

        Ok(
            match self.subscriptions.entitlement(&identity.user_id, now)? {
                Entitlement::Active => Decision::allow(AccessReason::Subscriber),
                Entitlement::Lapsed => Decision::deny(AccessReason::Expired),
                Entitlement::None => Decision::deny(AccessReason::NoSubscription),
            },
        )
    }
}
