// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Subscription model: plans, statuses, and the stored row.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PlanPricing;

/// Paid plan choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Weekly,
    Monthly,
}

impl Plan {
    /// Parse a caller-supplied plan string.
    ///
    /// Returns `None` for anything other than the two recognized plans;
    /// the caller maps that to `AppError::InvalidPlan`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weekly" => Some(Plan::Weekly),
            "monthly" => Some(Plan::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Weekly => "weekly",
            Plan::Monthly => "monthly",
        }
    }

    /// Price in minor currency units, snapped from the injected price table.
    pub fn amount(&self, pricing: &PlanPricing) -> u32 {
        match self {
            Plan::Weekly => pricing.weekly,
            Plan::Monthly => pricing.monthly,
        }
    }

    /// Renewal deadline for a term starting at `start`.
    ///
    /// Weekly terms run exactly 7 days; monthly terms run one calendar month
    /// (Jan 31 renews on Feb 28/29). `None` only on date overflow.
    pub fn renews_at(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Plan::Weekly => start.checked_add_signed(Duration::days(7)),
            Plan::Monthly => start.checked_add_months(Months::new(1)),
        }
    }
}

/// Lifecycle status of a single subscription row.
///
/// `Active → Canceled` and `Active → Expired` are the only transitions, and
/// both are terminal. A resubscribe creates a new row; it never revives an
/// old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Trial,
    Expired,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Expired => "expired",
        }
    }
}

/// One purchased subscription term.
///
/// Rows are append-only: renewals and resubscribes create new rows, and the
/// revenue aggregator relies on old rows being retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Row ID (UUID v4, also the store document ID)
    pub id: String,
    /// Owning user
    pub user_id: String,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    /// Purchase time
    pub start_date: DateTime<Utc>,
    /// Renewal deadline; always after `start_date`
    pub renews_at: DateTime<Utc>,
    /// Price snapshot at purchase time (minor units), never recomputed
    pub amount: u32,
    /// Derived from status at creation
    pub auto_renew: bool,
}

impl Subscription {
    /// Build a fresh active row for `user_id` starting at `now`.
    ///
    /// Returns `None` only if the renewal date overflows the calendar.
    pub fn new(user_id: &str, plan: Plan, pricing: &PlanPricing, now: DateTime<Utc>) -> Option<Self> {
        let status = SubscriptionStatus::Active;
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            plan,
            status,
            start_date: now,
            renews_at: plan.renews_at(now)?,
            amount: plan.amount(pricing),
            auto_renew: matches!(
                status,
                SubscriptionStatus::Active | SubscriptionStatus::Trial
            ),
        })
    }

    /// Whether `now` is past the renewal deadline for an active row.
    pub fn is_lapsed(&self, now: DateTime<Utc>) -> bool {
        self.status == SubscriptionStatus::Active && now > self.renews_at
    }
}
