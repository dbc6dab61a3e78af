pub mod beatmap;
pub mod config;
pub mod description;
pub mod error;
pub mod network;
pub mod render;
pub mod tier;

pub use beatmap::{DiffRecord, ResolvedDiff, User, parse_beatmapset_url};
pub use config::{CREDENTIALS_FILE, Credentials};
pub use description::render_description;
pub use error::{Error, Result};
pub use network::{BeatmapDetails, BeatmapRef, HttpClient, MetadataProvider, OsuApi};
pub use tier::{TIER_STYLES, Tier, TierStyle};
