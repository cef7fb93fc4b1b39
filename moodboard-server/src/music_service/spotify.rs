//! Spotify Web API client
//!
//! Authorization-code OAuth flow plus the "currently playing" endpoint.

use async_trait::async_trait;
use moodboard_common::config::SpotifyConfig;
use moodboard_common::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

use super::{MusicService, PlaybackStatus, TrackInfo};

const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";
const SCOPES: &str = "user-read-currently-playing user-read-playback-state";
const USER_AGENT: &str = concat!("moodboard/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// `GET /me/player/currently-playing` response
#[derive(Debug, Deserialize)]
struct CurrentlyPlayingResponse {
    #[serde(default)]
    is_playing: bool,
    item: Option<SpotifyItem>,
}

#[derive(Debug, Deserialize)]
struct SpotifyItem {
    /// Null for local files
    id: Option<String>,
    name: String,
    #[serde(default)]
    artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    name: String,
}

impl From<CurrentlyPlayingResponse> for PlaybackStatus {
    fn from(response: CurrentlyPlayingResponse) -> Self {
        let track = response.item.map(|item| TrackInfo {
            artist: item
                .artists
                .into_iter()
                .map(|a| a.name)
                .find(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "Unknown Artist".to_string()),
            id: item.id.unwrap_or_else(|| "local".to_string()),
            name: item.name,
        });
        PlaybackStatus {
            is_playing: response.is_playing,
            track,
        }
    }
}

/// Spotify API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Internal(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait]
impl MusicService for SpotifyClient {
    fn authorize_url(&self) -> Result<String> {
        let url = reqwest::Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("response_type", "code"),
                ("client_id", self.config.client_id.as_str()),
                ("scope", SCOPES),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ],
        )
        .map_err(|e| Error::Internal(format!("Invalid authorize URL: {}", e)))?;

        Ok(url.to_string())
    }

    async fn exchange_code(&self, code: &str) -> Result<String> {
        tracing::debug!("Exchanging authorization code for access token");

        let response = self
            .http_client
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "Token endpoint returned {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Token response parse error: {}", e)))?;

        if token.access_token.is_empty() {
            return Err(Error::Upstream("Token endpoint returned an empty token".to_string()));
        }

        tracing::info!(
            token_len = token.access_token.len(),
            expires_in = ?token.expires_in,
            "Received music service access token"
        );

        Ok(token.access_token)
    }

    async fn currently_playing(&self, access_token: &str) -> Result<Option<PlaybackStatus>> {
        let url = format!("{}/me/player/currently-playing", API_BASE_URL);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Currently-playing request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "Currently-playing returned {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Upstream(format!("Currently-playing read failed: {}", e)))?;

        parse_currently_playing(&body)
    }
}

fn parse_currently_playing(body: &str) -> Result<Option<PlaybackStatus>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let parsed: CurrentlyPlayingResponse = serde_json::from_str(body)
        .map_err(|e| Error::Upstream(format!("Currently-playing parse error: {}", e)))?;
    Ok(Some(parsed.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SpotifyConfig {
        SpotifyConfig {
            client_id: "client123".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:5000/auth/callback".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(SpotifyClient::new(config()).is_ok());
    }

    #[test]
    fn test_authorize_url_carries_params() {
        let client = SpotifyClient::new(config()).unwrap();
        let url = reqwest::Url::parse(&client.authorize_url().unwrap()).unwrap();

        assert_eq!(url.host_str(), Some("accounts.spotify.com"));
        assert_eq!(url.path(), "/authorize");
        let params: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client123");
        assert_eq!(params["scope"], SCOPES);
        assert_eq!(params["redirect_uri"], "http://localhost:5000/auth/callback");
    }

    #[test]
    fn test_parse_playing_item() {
        let body = r#"{
            "is_playing": true,
            "item": {
                "id": "abc",
                "name": "Good 4 U",
                "artists": [{"name": "Olivia Rodrigo"}, {"name": "Someone Else"}]
            }
        }"#;
        let status = parse_currently_playing(body).unwrap().unwrap();
        assert!(status.is_playing);
        assert_eq!(
            status.track,
            Some(TrackInfo {
                name: "Good 4 U".to_string(),
                artist: "Olivia Rodrigo".to_string(),
                id: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_no_item() {
        let status = parse_currently_playing(r#"{"is_playing": false, "item": null}"#)
            .unwrap()
            .unwrap();
        assert!(!status.is_playing);
        assert!(status.track.is_none());
    }

    #[test]
    fn test_parse_local_file_without_artists() {
        let body = r#"{"is_playing": true, "item": {"id": null, "name": "demo.mp3"}}"#;
        let track = parse_currently_playing(body).unwrap().unwrap().track.unwrap();
        assert_eq!(track.id, "local");
        assert_eq!(track.artist, "Unknown Artist");
    }

    #[test]
    fn test_parse_empty_body_is_nothing_playing() {
        assert_eq!(parse_currently_playing("  ").unwrap(), None);
    }

    #[test]
    fn test_parse_garbage_is_upstream_error() {
        assert!(matches!(
            parse_currently_playing("<html>"),
            Err(Error::Upstream(_))
        ));
    }
}
