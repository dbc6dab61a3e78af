use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, Result};

/// Thin wrapper over reqwest with the request defaults shared by all API
/// calls. Non-2xx responses surface as errors carrying the status code.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        Ok(text)
    }

    pub async fn get_with_token(&self, url: &str, token: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        Ok(text)
    }
}
