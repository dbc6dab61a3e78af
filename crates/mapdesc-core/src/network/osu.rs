use serde::Deserialize;
use tracing::debug;

use crate::beatmap::User;
use crate::config::Credentials;
use crate::error::Result;
use crate::network::client::HttpClient;
use crate::network::provider::{BeatmapDetails, BeatmapRef, MetadataProvider};

pub const OSU_API_BASE: &str = "https://osu.ppy.sh/api/v2";
const OSU_TOKEN_URL: &str = "https://osu.ppy.sh/oauth/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct BeatmapsetResponse {
    beatmaps: Vec<BeatmapsetEntry>,
}

#[derive(Debug, Deserialize)]
struct BeatmapsetEntry {
    id: u64,
    user_id: u32,
}

#[derive(Debug, Deserialize)]
struct BeatmapResponse {
    version: String,
    difficulty_rating: f64,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: u32,
    username: String,
}

/// Authenticated client for the osu! v2 API.
pub struct OsuApi {
    client: HttpClient,
    token: String,
}

impl OsuApi {
    /// Exchange client credentials for an access token.
    pub async fn connect(credentials: &Credentials) -> Result<Self> {
        let client = HttpClient::new()?;

        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", "public"),
        ];
        let body = client.post_form(OSU_TOKEN_URL, &form).await?;
        let token: TokenResponse = serde_json::from_str(&body)?;

        debug!("Obtained API access token");

        Ok(Self {
            client,
            token: token.access_token,
        })
    }

    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        self.client.get_with_token(url, &self.token).await
    }
}

impl MetadataProvider for OsuApi {
    async fn beatmapset(&self, set_id: u64) -> Result<Vec<BeatmapRef>> {
        let url = format!("{}/beatmapsets/{}", OSU_API_BASE, set_id);
        let body = self.get(&url).await?;
        let set: BeatmapsetResponse = serde_json::from_str(&body)?;

        Ok(set
            .beatmaps
            .into_iter()
            .map(|b| BeatmapRef {
                beatmap_id: b.id,
                mapper_id: b.user_id,
            })
            .collect())
    }

    async fn beatmap(&self, beatmap_id: u64) -> Result<BeatmapDetails> {
        let url = format!("{}/beatmaps/{}", OSU_API_BASE, beatmap_id);
        let body = self.get(&url).await?;
        let beatmap: BeatmapResponse = serde_json::from_str(&body)?;

        Ok(BeatmapDetails {
            name: beatmap.version,
            stars: beatmap.difficulty_rating,
        })
    }

    async fn user_by_id(&self, user_id: u32) -> Result<User> {
        let url = format!("{}/users/{}", OSU_API_BASE, user_id);
        let body = self.get(&url).await?;
        let user: UserResponse = serde_json::from_str(&body)?;

        Ok(User {
            id: user.id,
            username: user.username,
        })
    }

    async fn user_by_name(&self, username: &str) -> Result<User> {
        let url = format!("{}/users/{}/osu", OSU_API_BASE, username);
        let body = self.get(&url).await?;
        let user: UserResponse = serde_json::from_str(&body)?;

        Ok(User {
            id: user.id,
            username: user.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let body = r#"{"token_type":"Bearer","expires_in":86400,"access_token":"abc123"}"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "abc123");
    }

    #[test]
    fn test_parse_beatmapset_response() {
        let body = r#"{
            "id": 123456,
            "title": "Some Song",
            "beatmaps": [
                {"id": 11, "user_id": 501, "version": "Easy", "difficulty_rating": 1.5},
                {"id": 12, "user_id": 502, "version": "Extra", "difficulty_rating": 6.8}
            ]
        }"#;
        let set: BeatmapsetResponse = serde_json::from_str(body).unwrap();
        assert_eq!(set.beatmaps.len(), 2);
        assert_eq!(set.beatmaps[0].id, 11);
        assert_eq!(set.beatmaps[0].user_id, 501);
        assert_eq!(set.beatmaps[1].id, 12);
    }

    #[test]
    fn test_parse_beatmap_response() {
        let body = r#"{"id": 11, "version": "Insane", "difficulty_rating": 4.21, "mode": "osu"}"#;
        let beatmap: BeatmapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(beatmap.version, "Insane");
        assert_eq!(beatmap.difficulty_rating, 4.21);
    }

    #[test]
    fn test_parse_user_response() {
        let body = r#"{"id": 501, "username": "peppy", "country_code": "AU"}"#;
        let user: UserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 501);
        assert_eq!(user.username, "peppy");
    }
}
