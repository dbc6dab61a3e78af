mod client;
mod osu;
mod provider;

pub use client::HttpClient;
pub use osu::{OSU_API_BASE, OsuApi};
pub use provider::{BeatmapDetails, BeatmapRef, MetadataProvider};
