//! CLI argument definitions for mapdesc.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mapdesc")]
#[command(about = "Beatmap description generator", version)]
pub struct Args {
    /// Path to the credentials file
    #[arg(
        short,
        long,
        default_value = mapdesc_core::CREDENTIALS_FILE,
        value_name = "FILE"
    )]
    pub credentials: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the BBCode description for a beatmap set
    Generate {
        /// Beatmap set URL (must contain /beatmapsets/<id>)
        url: String,
        /// Hitsounder username or numeric id to credit
        hitsounder: String,
        /// Write the description to a file in addition to stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Enter and save API client credentials
    Credentials,
}
