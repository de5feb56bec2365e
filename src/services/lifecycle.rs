// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Subscription lifecycle service.
//!
//! Sole writer of the subscription store. Handles the full lifecycle:
//! subscribe creates a fresh row, cancel revokes immediately, and expiry is
//! reconciled lazily the next time a row is read. There is no background
//! sweep; a lapsed row stays `active` in storage until someone reads it
//! through this service.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::PlanPricing;
use crate::db::{StatusWrite, SubscriptionStore};
use crate::error::{AppError, Result};
use crate::models::{Plan, Subscription, SubscriptionStatus};

/// Three-valued entitlement standing, so callers can tell a lapsed
/// subscriber ("renew") from a user who never subscribed ("subscribe").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entitlement {
    /// Current subscription is active
    Active,
    /// A subscription exists but is canceled or expired
    Lapsed,
    /// No subscription on record at all
    None,
}

/// Lifecycle manager over the subscription store.
#[derive(Clone)]
pub struct SubscriptionService {
    store: Arc<dyn SubscriptionStore>,
    pricing: PlanPricing,
}

impl SubscriptionService {
    pub fn new(store: Arc<dyn SubscriptionStore>, pricing: PlanPricing) -> Self {
        Self { store, pricing }
    }

    pub fn store(&self) -> &Arc<dyn SubscriptionStore> {
        &self.store
    }

    /// Purchase a new term.
    ///
    /// Always appends a fresh row; subscribing while already subscribed
    /// supersedes the prior row as "current" (later `start_date` wins) and
    /// keeps it for revenue history. The price is snapped from the injected
    /// table and never recomputed.
    pub fn subscribe(&self, user_id: &str, plan: &str, now: DateTime<Utc>) -> Result<Subscription> {
        let plan = Plan::parse(plan).ok_or_else(|| AppError::InvalidPlan(plan.to_string()))?;

        let sub = Subscription::new(user_id, plan, &self.pricing, now)
            .ok_or_else(|| anyhow::anyhow!("renewal date overflow for start {}", now))?;
        self.store.insert(&sub)?;

        tracing::info!(
            user_id,
            subscription_id = %sub.id,
            plan = plan.as_str(),
            amount = sub.amount,
            "Subscription created"
        );
        Ok(sub)
    }

    /// Cancel the user's current subscription, revoking entitlement now
    /// rather than at the renewal deadline.
    ///
    /// Fails with `NoActiveSubscription` when there is nothing active to
    /// cancel — including when the current row just lazily expired.
    pub fn cancel(&self, user_id: &str, now: DateTime<Utc>) -> Result<Subscription> {
        let current = self
            .current_subscription(user_id, now)?
            .ok_or(AppError::NoActiveSubscription)?;

        if current.status != SubscriptionStatus::Active {
            return Err(AppError::NoActiveSubscription);
        }

        let outcome = self
            .store
            .compare_and_set_status(
                &current.id,
                SubscriptionStatus::Active,
                SubscriptionStatus::Canceled,
            )?
            .ok_or(AppError::NoActiveSubscription)?;

        match outcome {
            StatusWrite::Applied(row) => {
                tracing::info!(user_id, subscription_id = %row.id, "Subscription canceled");
                Ok(row)
            }
            // Lost the race to another cancel or to lazy expiry
            StatusWrite::NoOp(_) | StatusWrite::Refused(_) => Err(AppError::NoActiveSubscription),
        }
    }

    /// Authoritative subscription row for a user: the one with the latest
    /// `start_date` (ties broken by row id for determinism).
    ///
    /// Applies lazy expiry before returning: an active row whose renewal
    /// deadline has passed is moved to `expired` and persisted. The CAS in
    /// the store keeps this write from clobbering a concurrent cancel.
    pub fn current_subscription(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Subscription>> {
        let rows = self.store.list_for_user(user_id)?;

        let Some(current) = rows
            .into_iter()
            .max_by(|a, b| (a.start_date, &a.id).cmp(&(b.start_date, &b.id)))
        else {
            return Ok(None);
        };

        if !current.is_lapsed(now) {
            return Ok(Some(current));
        }

        let reconciled = match self.store.compare_and_set_status(
            &current.id,
            SubscriptionStatus::Active,
            SubscriptionStatus::Expired,
        )? {
            Some(StatusWrite::Applied(row)) => {
                tracing::info!(
                    user_id,
                    subscription_id = %row.id,
                    renews_at = %row.renews_at,
                    "Subscription lazily expired"
                );
                row
            }
            // Another reader expired it, or a concurrent cancel won; the
            // stored status stands either way.
            Some(write) => write.into_row(),
            None => current,
        };

        Ok(Some(reconciled))
    }

    /// Whether the user currently holds an active subscription, after lazy
    /// reconciliation.
    pub fn is_entitled(&self, user_id: &str, now: DateTime<Utc>) -> Result<bool> {
        Ok(self.entitlement(user_id, now)? == Entitlement::Active)
    }

    /// Entitlement standing after lazy reconciliation.
    pub fn entitlement(&self, user_id: &str, now: DateTime<Utc>) -> Result<Entitlement> {
        Ok(match self.current_subscription(user_id, now)? {
            None => Entitlement::None,
            Some(sub) if sub.status == SubscriptionStatus::Active => Entitlement::Active,
            Some(_) => Entitlement::Lapsed,
        })
    }
}
