// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::content_store::ImageRef;

//
// ──────────────────────────────────────────────────────────
// Document snapshots
// ──────────────────────────────────────────────────────────
//
// Wire shapes of the store's projections. Lists stay `Option<Vec<_>>`
// because the store sends an explicit null for unset fields.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectCard {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub main_image: Option<ImageRef>,
    pub tech_stack: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetailDoc {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub main_image: Option<ImageRef>,
    pub content: Option<Vec<Value>>,
    pub tech_stack: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// URL fields count as set only when non-blank; editors sometimes clear a
/// field by emptying it instead of removing it.
pub fn non_blank(url: Option<String>) -> Option<String> {
    url.filter(|value| !value.trim().is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Content store error: {0}")]
    Upstream(String),

    #[error("Malformed project document: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Featured homepage cards, newest first; the window is applied
    /// server-side.
    async fn featured(&self, limit: usize) -> Result<Vec<ProjectCard>, ProjectQueryError>;

    /// Every project with a defined slug, newest first.
    async fn list_published(&self) -> Result<Vec<ProjectCard>, ProjectQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectDetailDoc, ProjectQueryError>;
}
