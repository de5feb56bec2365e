// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Subscription store contract.
//!
//! Rows are append-only: `insert` is the only way a row comes into being,
//! and the single mutation is a compare-and-set on `status`. The CAS is what
//! keeps lazy expiry from resurrecting a row that a concurrent cancel already
//! moved to a terminal status.

use crate::error::Result;
use crate::models::{Subscription, SubscriptionStatus};

/// Outcome of a compare-and-set status write.
#[derive(Debug, Clone)]
pub enum StatusWrite {
    /// The row held `from` and now holds `to`.
    Applied(Subscription),
    /// The row already held `to`; nothing was written.
    NoOp(Subscription),
    /// The row held some third status; nothing was written. Carries the row
    /// as currently stored so the caller can act on the real status.
    Refused(Subscription),
}

impl StatusWrite {
    /// The row as stored after the write attempt, whatever the outcome.
    pub fn into_row(self) -> Subscription {
        match self {
            StatusWrite::Applied(row) | StatusWrite::NoOp(row) | StatusWrite::Refused(row) => row,
        }
    }
}

/// Durable record of subscription rows, shared by every service replica.
///
/// Implementations must serialize conflicting writes per row; transient
/// backend failures surface as `AppError::StorageUnavailable`.
pub trait SubscriptionStore: Send + Sync {
    /// Append a new row. Row ids are caller-assigned and must be fresh.
    fn insert(&self, sub: &Subscription) -> Result<()>;

    /// Fetch one row by id.
    fn get(&self, id: &str) -> Result<Option<Subscription>>;

    /// All rows for a user, historical rows included, in no particular order.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Subscription>>;

    /// Full scan over every row, for the revenue aggregator.
    fn list_all(&self) -> Result<Vec<Subscription>>;

    /// Atomically move a row from `from` to `to`.
    ///
    /// Returns `Ok(None)` for an unknown row id.
    fn compare_and_set_status(
        &self,
        id: &str,
        from: SubscriptionStatus,
        to: SubscriptionStatus,
    ) -> Result<Option<StatusWrite>>;
}
