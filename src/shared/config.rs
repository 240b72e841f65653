// src/shared/config.rs

use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_REVALIDATE_SECONDS: u64 = 60;

/// Runtime configuration, read once at startup.
///
/// `CONTENT_QUERY_URL` points at the store's query endpoint for the site's
/// dataset; `CONTENT_CDN_URL` at the image CDN prefix for the same dataset.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub content_query_url: String,
    pub content_cdn_url: String,
    pub content_api_token: Option<String>,
    pub studio_url: String,
    pub revalidate_window: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").context("HOST is not set")?;
        let port = std::env::var("PORT")
            .context("PORT is not set")?
            .parse::<u16>()
            .context("PORT is not a valid port number")?;
        let content_query_url =
            std::env::var("CONTENT_QUERY_URL").context("CONTENT_QUERY_URL is not set")?;
        let content_cdn_url =
            std::env::var("CONTENT_CDN_URL").context("CONTENT_CDN_URL is not set")?;
        let content_api_token = std::env::var("CONTENT_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        let studio_url = std::env::var("STUDIO_URL").context("STUDIO_URL is not set")?;
        let revalidate_window = revalidate_window(std::env::var("REVALIDATE_SECONDS").ok());

        Ok(Self {
            host,
            port,
            content_query_url,
            content_cdn_url,
            content_api_token,
            studio_url,
            revalidate_window,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Missing or unparsable values fall back to the default window.
pub fn revalidate_window(raw: Option<String>) -> Duration {
    let seconds = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_REVALIDATE_SECONDS);
    Duration::from_secs(seconds)
}
