//! Metadata source abstraction for testability.
//!
//! The description pipeline only talks to the remote service through the
//! `MetadataProvider` trait, so it can be driven by an in-memory
//! implementation in tests.

use crate::beatmap::User;
use crate::error::Result;

/// One difficulty as listed in a beatmap-set response: the ids needed for
/// the follow-up lookups.
#[derive(Debug, Clone, Copy)]
pub struct BeatmapRef {
    pub beatmap_id: u64,
    pub mapper_id: u32,
}

/// Per-difficulty metadata from the beatmap lookup.
#[derive(Debug, Clone)]
pub struct BeatmapDetails {
    /// Difficulty name ("version").
    pub name: String,
    pub stars: f64,
}

/// Source of beatmap and user metadata.
#[allow(async_fn_in_trait)]
pub trait MetadataProvider {
    /// List the difficulties of a beatmap set, in service order.
    async fn beatmapset(&self, set_id: u64) -> Result<Vec<BeatmapRef>>;

    /// Fetch the name and star rating of one difficulty.
    async fn beatmap(&self, beatmap_id: u64) -> Result<BeatmapDetails>;

    /// Resolve a user by numeric id.
    async fn user_by_id(&self, user_id: u32) -> Result<User>;

    /// Resolve a user by username.
    async fn user_by_name(&self, username: &str) -> Result<User>;
}
