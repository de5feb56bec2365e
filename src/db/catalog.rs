//! Episode catalog collaborator.
//!
//! The content service owns episode documents; the engine only needs the
//! `(order, status)` pair per episode id. This in-process catalog stands in
//! for that lookup and is populated through the admin seeding endpoint.

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::EpisodeRef;

/// Episode metadata lookup keyed by episode id.
#[derive(Clone, Default)]
pub struct EpisodeCatalog {
    episodes: Arc<DashMap<String, EpisodeRef>>,
}

impl EpisodeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, episode_id: &str) -> Option<EpisodeRef> {
        self.episodes.get(episode_id).map(|entry| *entry.value())
    }

    pub fn upsert(&self, episode_id: &str, episode: EpisodeRef) {
        self.episodes.insert(episode_id.to_string(), episode);
    }
}
