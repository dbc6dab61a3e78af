//! Generate command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mapdesc_core::{Credentials, OsuApi, render_description};
use tracing::info;

pub async fn run(
    credentials_file: &Path,
    url: &str,
    hitsounder: &str,
    output: Option<&Path>,
) -> Result<()> {
    let credentials = Credentials::load(credentials_file).with_context(|| {
        format!(
            "No usable credentials in {} (run `mapdesc credentials` first)",
            credentials_file.display()
        )
    })?;

    let api = OsuApi::connect(&credentials).await?;
    let description = render_description(&api, url, hitsounder).await?;

    if let Some(path) = output {
        fs::write(path, &description)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote description to {}", path.display());
    }

    println!("{}", description);
    Ok(())
}
