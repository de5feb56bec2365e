// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: the subscription store contract and its in-process
//! implementation, plus the episode catalog collaborator.

pub mod catalog;
pub mod memory;
pub mod store;

pub use catalog::EpisodeCatalog;
pub use memory::MemoryStore;
pub use store::{StatusWrite, SubscriptionStore};
