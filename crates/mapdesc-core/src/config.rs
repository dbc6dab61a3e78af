//! API client credentials.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default credentials file name.
pub const CREDENTIALS_FILE: &str = "credentials.txt";

/// Client credentials for the metadata service.
///
/// Stored as a two-line plaintext file: client id on the first line, client
/// secret on the second. No encoding, no encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Load credentials from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingCredentials(format!(
                "{} not found",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse credentials from file content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let client_id = lines.next().unwrap_or("").trim().to_string();
        let client_secret = lines.next().unwrap_or("").trim().to_string();

        if client_id.is_empty() || client_secret.is_empty() {
            return Err(Error::MissingCredentials(
                "client id and client secret are both required".to_string(),
            ));
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Save credentials to file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, format!("{}\n{}\n", self.client_id, self.client_secret))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credentials() {
        let creds = Credentials::parse("12345\ns3cr3t\n").unwrap();
        assert_eq!(creds.client_id, "12345");
        assert_eq!(creds.client_secret, "s3cr3t");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let creds = Credentials::parse("  12345  \n  s3cr3t\n").unwrap();
        assert_eq!(creds.client_id, "12345");
        assert_eq!(creds.client_secret, "s3cr3t");
    }

    #[test]
    fn test_parse_missing_secret() {
        let result = Credentials::parse("12345\n");
        assert!(matches!(result, Err(Error::MissingCredentials(_))));
    }

    #[test]
    fn test_parse_empty() {
        let result = Credentials::parse("");
        assert!(matches!(result, Err(Error::MissingCredentials(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Credentials::load(dir.path().join("credentials.txt"));
        assert!(matches!(result, Err(Error::MissingCredentials(_))));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.txt");

        let creds = Credentials {
            client_id: "12345".to_string(),
            client_secret: "s3cr3t".to_string(),
        };
        creds.save(&path).unwrap();

        let loaded = Credentials::load(&path).unwrap();
        assert_eq!(loaded, creds);
    }
}
