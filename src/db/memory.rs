// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process subscription store backed by a concurrent map.
//!
//! The dashmap shard lock held by `get_mut` makes the status
//! compare-and-set atomic per row. An offline mode mirrors production
//! backend loss: every operation fails with `StorageUnavailable`.

use dashmap::DashMap;
use std::sync::Arc;

use crate::db::store::{StatusWrite, SubscriptionStore};
use crate::error::{AppError, Result};
use crate::models::{Subscription, SubscriptionStatus};

/// Concurrent in-memory subscription store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<DashMap<String, Subscription>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising the
    /// `StorageUnavailable` path in tests.
    pub fn offline() -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            offline: true,
        }
    }

    fn check_online(&self) -> Result<()> {
        if self.offline {
            return Err(AppError::StorageUnavailable(
                "store not connected (offline mode)".to_string(),
            ));
        }
        Ok(())
    }
}

impl SubscriptionStore for MemoryStore {
    fn insert(&self, sub: &Subscription) -> Result<()> {
        self.check_online()?;
        if self.rows.contains_key(&sub.id) {
            return Err(AppError::StorageUnavailable(format!(
                "duplicate subscription id {}",
                sub.id
            )));
        }
        self.rows.insert(sub.id.clone(), sub.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Subscription>> {
        self.check_online()?;
        Ok(self.rows.get(id).map(|entry| entry.value().clone()))
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Subscription>> {
        self.check_online()?;
        Ok(self
            .rows
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Subscription>> {
        self.check_online()?;
        Ok(self.rows.iter().map(|entry| entry.value().clone()).collect())
    }

    fn compare_and_set_status(
        &self,
        id: &str,
        from: SubscriptionStatus,
        to: SubscriptionStatus,
    ) -> Result<Option<StatusWrite>> {
        self.check_online()?;

        let Some(mut entry) = self.rows.get_mut(id) else {
            return Ok(None);
        };

        let row = entry.value_mut();
        let outcome = if row.status == to {
            StatusWrite::NoOp(row.clone())
        } else if row.status == from {
            row.status = to;
            row.auto_renew = matches!(
                row.status,
                SubscriptionStatus::Active | SubscriptionStatus::Trial
            );
            StatusWrite::Applied(row.clone())
        } else {
            StatusWrite::Refused(row.clone())
        };

        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanPricing;
    use crate::models::Plan;
    use chrono::{TimeZone, Utc};

    fn new_row(user: &str) -> Subscription {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        Subscription::new(user, Plan::Weekly, &PlanPricing::default(), now).unwrap()
    }

    #[test]
    fn test_insert_and_list() {
        let store = MemoryStore::new();
        let a = new_row("u1");
        let b = new_row("u1");
        let c = new_row("u2");
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();
        store.insert(&c).unwrap();

        assert_eq!(store.list_for_user("u1").unwrap().len(), 2);
        assert_eq!(store.list_for_user("u2").unwrap().len(), 1);
        assert_eq!(store.list_all().unwrap().len(), 3);
        assert!(store.get(&a.id).unwrap().is_some());
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_cas_applies_transition() {
        let store = MemoryStore::new();
        let row = new_row("u1");
        store.insert(&row).unwrap();

        let outcome = store
            .compare_and_set_status(&row.id, SubscriptionStatus::Active, SubscriptionStatus::Expired)
            .unwrap()
            .unwrap();

        match outcome {
            StatusWrite::Applied(updated) => {
                assert_eq!(updated.status, SubscriptionStatus::Expired);
                assert!(!updated.auto_renew);
            }
            other => panic!("expected Applied, got {:?}", other),
        }
    }

    #[test]
    fn test_cas_is_idempotent_on_target_status() {
        let store = MemoryStore::new();
        let row = new_row("u1");
        store.insert(&row).unwrap();

        store
            .compare_and_set_status(&row.id, SubscriptionStatus::Active, SubscriptionStatus::Expired)
            .unwrap();
        // Re-writing expired over expired is a no-op
        let outcome = store
            .compare_and_set_status(&row.id, SubscriptionStatus::Active, SubscriptionStatus::Expired)
            .unwrap()
            .unwrap();

        assert!(matches!(outcome, StatusWrite::NoOp(_)));
    }

    #[test]
    fn test_cas_refuses_conflicting_write() {
        let store = MemoryStore::new();
        let row = new_row("u1");
        store.insert(&row).unwrap();

        // A concurrent cancel landed first
        store
            .compare_and_set_status(&row.id, SubscriptionStatus::Active, SubscriptionStatus::Canceled)
            .unwrap();

        // Lazy expiry must not resurrect or overwrite the canceled row
        let outcome = store
            .compare_and_set_status(&row.id, SubscriptionStatus::Active, SubscriptionStatus::Expired)
            .unwrap()
            .unwrap();

        match outcome {
            StatusWrite::Refused(current) => {
                assert_eq!(current.status, SubscriptionStatus::Canceled)
            }
            other => panic!("expected Refused, got {:?}", other),
        }
    }

    #[test]
    fn test_cas_unknown_row() {
        let store = MemoryStore::new();
        let outcome = store
            .compare_and_set_status("missing", SubscriptionStatus::Active, SubscriptionStatus::Expired)
            .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_offline_store_reports_unavailable() {
        let store = MemoryStore::offline();
        let row = new_row("u1");

        assert!(matches!(
            store.insert(&row),
            Err(AppError::StorageUnavailable(_))
        ));
        assert!(matches!(
            store.list_all(),
            Err(AppError::StorageUnavailable(_))
        ));
    }
}
