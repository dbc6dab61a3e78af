//! Description pipeline: fetch, classify, sort, render.

use std::collections::HashMap;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::beatmap::{DiffRecord, ResolvedDiff, parse_beatmapset_url};
use crate::error::Result;
use crate::network::{BeatmapRef, MetadataProvider};
use crate::render;
use crate::tier::Tier;

/// Upper bound on in-flight per-difficulty lookups.
const MAX_CONCURRENT_LOOKUPS: usize = 4;

/// Render the BBCode description block for one beatmap set.
///
/// Resolves the set listing, the hitsounder, per-difficulty metadata, and
/// mapper identities through `provider`, classifies each difficulty by star
/// rating, and returns the assembled block with entries sorted by ascending
/// stars (ties keep service order). Any lookup failure aborts the whole
/// operation; nothing is retried and no partial output is produced.
pub async fn render_description(
    provider: &impl MetadataProvider,
    beatmap_url: &str,
    hitsounder: &str,
) -> Result<String> {
    let set_id = parse_beatmapset_url(beatmap_url)?;

    let refs = provider.beatmapset(set_id).await?;
    info!("Beatmap set {} has {} difficulties", set_id, refs.len());

    let hitsounder = provider.user_by_name(hitsounder).await?;
    debug!(
        "Resolved hitsounder {} (id {})",
        hitsounder.username, hitsounder.id
    );

    let records: Vec<DiffRecord> =
        stream::iter(refs.into_iter().map(|r| fetch_record(provider, r)))
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .try_collect()
            .await?;

    let mut diffs = resolve_mappers(provider, records).await?;
    diffs.sort_by(|a, b| a.record.stars.total_cmp(&b.record.stars));

    let mut entries = Vec::with_capacity(diffs.len());
    for diff in &diffs {
        let tier = Tier::from_stars(diff.record.stars);
        entries.push(render::format_entry(
            &diff.record.name,
            tier,
            &diff.mapper_name,
            diff.record.mapper_id,
        )?);
    }

    Ok(render::assemble_block(entries, &hitsounder))
}

async fn fetch_record(provider: &impl MetadataProvider, r: BeatmapRef) -> Result<DiffRecord> {
    let details = provider.beatmap(r.beatmap_id).await?;
    Ok(DiffRecord {
        beatmap_id: r.beatmap_id,
        name: details.name,
        stars: details.stars,
        mapper_id: r.mapper_id,
    })
}

/// Resolve mapper usernames, fetching each distinct mapper once.
async fn resolve_mappers(
    provider: &impl MetadataProvider,
    records: Vec<DiffRecord>,
) -> Result<Vec<ResolvedDiff>> {
    let mut names: HashMap<u32, String> = HashMap::new();
    let mut resolved = Vec::with_capacity(records.len());

    for record in records {
        let mapper_name = match names.get(&record.mapper_id) {
            Some(name) => name.clone(),
            None => {
                let user = provider.user_by_id(record.mapper_id).await?;
                names.insert(record.mapper_id, user.username.clone());
                user.username
            }
        };
        resolved.push(ResolvedDiff {
            record,
            mapper_name,
        });
    }

    Ok(resolved)
}
