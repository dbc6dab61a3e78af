mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mapdesc_cli=info,mapdesc_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    match args.command {
        Command::Generate {
            url,
            hitsounder,
            output,
        } => commands::generate::run(&args.credentials, &url, &hitsounder, output.as_deref()).await,
        Command::Credentials => commands::credentials::run(&args.credentials),
    }
}
