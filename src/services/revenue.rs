// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Revenue aggregation for the admin dashboard.
//!
//! Read-only pass over the subscription store. Every row counts toward
//! revenue regardless of status: a canceled subscription still contributed
//! its amount once collected. Rows are bucketed by `start_date` only, never
//! by `renews_at` — a term crossing a month boundary is attributed entirely
//! to its purchase month (known approximation, see DESIGN.md).

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::db::SubscriptionStore;
use crate::error::{AppError, Result};
use crate::services::lifecycle::SubscriptionService;
use crate::time_utils::{month_label, month_start, week_label, week_start};

/// Reporting granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Calendar weeks, Monday-start
    Week,
    /// Calendar months
    Month,
}

impl ReportPeriod {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "week" => Ok(ReportPeriod::Week),
            "month" => Ok(ReportPeriod::Month),
            other => Err(AppError::BadRequest(format!(
                "period must be 'week' or 'month', got '{}'",
                other
            ))),
        }
    }
}

/// One dashboard bucket, e.g. "March 2025" or "March - Week 2".
#[derive(Debug, Clone, Serialize)]
pub struct RevenueBucket {
    pub label: String,
    /// Summed amounts, minor units
    pub amount: u64,
}

/// Full dashboard report.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub bucketed: Vec<RevenueBucket>,
    /// Lifetime gross over all rows, all time
    pub total_revenue: u64,
    /// Distinct users whose current subscription is active right now
    pub active_subscribers: u64,
}

/// Aggregates subscription rows into dashboard figures.
#[derive(Clone)]
pub struct RevenueService {
    store: Arc<dyn SubscriptionStore>,
    subscriptions: SubscriptionService,
}

impl RevenueService {
    pub fn new(store: Arc<dyn SubscriptionStore>, subscriptions: SubscriptionService) -> Self {
        Self {
            store,
            subscriptions,
        }
    }

    /// Build the revenue report as of `now`.
    ///
    /// Counting active subscribers goes through the lifecycle service so
    /// lapsed-but-unread rows get reconciled rather than counted.
    pub fn revenue_report(&self, period: ReportPeriod, now: DateTime<Utc>) -> Result<RevenueReport> {
        let rows = self.store.list_all()?;

        let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        let mut total_revenue: u64 = 0;
        let mut users: BTreeSet<String> = BTreeSet::new();

        for row in &rows {
            let start = row.start_date.date_naive();
            let key = match period {
                ReportPeriod::Week => week_start(start),
                ReportPeriod::Month => month_start(start),
            };
            *buckets.entry(key).or_insert(0) += u64::from(row.amount);
            total_revenue += u64::from(row.amount);
            users.insert(row.user_id.clone());
        }

        let mut active_subscribers: u64 = 0;
        for user_id in &users {
            if self.subscriptions.is_entitled(user_id, now)? {
                active_subscribers += 1;
            }
        }

        let bucketed = buckets
            .into_iter()
            .map(|(key, amount)| RevenueBucket {
                label: match period {
                    ReportPeriod::Week => week_label(key),
                    ReportPeriod::Month => month_label(key),
                },
                amount,
            })
            .collect();

        Ok(RevenueReport {
            bucketed,
            total_revenue,
            active_subscribers,
        })
    }
}
