//! Episode metadata as seen by the entitlement engine.
//!
//! The content service owns the full episode documents (titles, playback
//! assets, series membership); the engine only ever reads the ordinal
//! position and the publication status.

use serde::{Deserialize, Serialize};

/// Publication state of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeStatus {
    Draft,
    Published,
    Archived,
}

/// The slice of episode metadata the entitlement resolver consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpisodeRef {
    /// 1-based position within its series; unique per series
    pub order: u32,
    pub status: EpisodeStatus,
}

impl EpisodeRef {
    pub fn published(&self) -> bool {
        self.status == EpisodeStatus::Published
    }
}
