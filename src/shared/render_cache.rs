// src/shared/render_cache.rs

use std::collections::HashMap;
use std::time::{Duration, Instant};

use actix_web::HttpResponse;
use tokio::sync::RwLock;

use crate::shared::pages::PageResponse;

/// A materialized response eligible to be replayed within the
/// revalidation window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedPage {
    Html(String),
    Redirect(String),
}

impl CachedPage {
    pub fn into_response(self) -> HttpResponse {
        match self {
            CachedPage::Html(body) => PageResponse::html(body),
            CachedPage::Redirect(location) => PageResponse::redirect(&location),
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    page: CachedPage,
}

/// Fixed-window page cache keyed by request path.
///
/// Entries older than the window count as absent; the next render simply
/// overwrites them. Only successful renders and detail-route redirects are
/// stored, so expiry is the only invalidation this cache needs.
pub struct RenderCache {
    window: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl RenderCache {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, path: &str) -> Option<CachedPage> {
        let entries = self.entries.read().await;
        let entry = entries.get(path)?;
        if entry.stored_at.elapsed() >= self.window {
            return None;
        }
        Some(entry.page.clone())
    }

    pub async fn put(&self, path: &str, page: CachedPage) {
        let mut entries = self.entries.write().await;
        entries.insert(
            path.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                page,
            },
        );
    }
}
