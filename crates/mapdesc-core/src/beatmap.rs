//! Beatmap domain types and URL handling.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static BEATMAPSET_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/beatmapsets/(\d+)").expect("hard-coded pattern"));

/// Extract the beatmap-set id from a beatmap URL.
///
/// The URL must contain a `/beatmapsets/<digits>` segment; anything else is
/// rejected before any network call is made.
pub fn parse_beatmapset_url(url: &str) -> Result<u64> {
    BEATMAPSET_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))
}

/// One difficulty of a beatmap set, as fetched from the metadata service.
#[derive(Debug, Clone)]
pub struct DiffRecord {
    pub beatmap_id: u64,
    /// Original difficulty name ("version"), reproduced verbatim in output.
    pub name: String,
    pub stars: f64,
    pub mapper_id: u32,
}

/// A difficulty with its mapper identity resolved.
#[derive(Debug, Clone)]
pub struct ResolvedDiff {
    pub record: DiffRecord,
    pub mapper_name: String,
}

/// A resolved user identity.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub username: String,
}
