//! Credentials command implementation.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use mapdesc_core::Credentials;

pub fn run(credentials_file: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let client_id = prompt(&mut input, "Client ID: ")?;
    let client_secret = prompt(&mut input, "Client secret: ")?;

    if client_id.is_empty() || client_secret.is_empty() {
        bail!("Both client ID and client secret are required");
    }

    let credentials = Credentials {
        client_id,
        client_secret,
    };
    credentials
        .save(credentials_file)
        .with_context(|| format!("Failed to write {}", credentials_file.display()))?;

    println!("Saved credentials to {}", credentials_file.display());
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
