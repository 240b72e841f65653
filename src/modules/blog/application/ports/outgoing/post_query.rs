// src/modules/blog/application/ports/outgoing/post_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Document snapshot
// ──────────────────────────────────────────────────────────
//
// The homepage projection carries only title/slug/date; the blog listing
// also dereferences the author and category titles. Both decode into the
// same shape with the extras absent.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
    pub categories: Option<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Content store error: {0}")]
    Upstream(String),

    #[error("Malformed post document: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Latest posts for the homepage; the window is applied server-side.
    async fn latest(&self, limit: usize) -> Result<Vec<PostItem>, PostQueryError>;

    /// Every post with a defined slug, newest first.
    async fn list_published(&self) -> Result<Vec<PostItem>, PostQueryError>;
}
