// src/modules/blog/application/ports/incoming/list_posts.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::blog::application::ports::outgoing::post_query::{PostItem, PostQueryError};

//
// ──────────────────────────────────────────────────────────
// Presentation views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostItemView {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub href: String,
    pub published_label: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
}

impl From<PostItem> for PostItemView {
    fn from(item: PostItem) -> Self {
        let slug = item.slug.unwrap_or_default();
        Self {
            id: item.id,
            title: item.title.unwrap_or_default(),
            href: format!("/blog/{slug}"),
            slug,
            published_label: item
                .published_at
                .map(|at| at.format("%Y-%m-%d").to_string()),
            author: item.author_name,
            categories: item.categories.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogListView {
    pub posts: Vec<PostItemView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPostsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<PostQueryError> for ListPostsError {
    fn from(err: PostQueryError) -> Self {
        match err {
            PostQueryError::Upstream(msg) => ListPostsError::QueryFailed(msg),
            PostQueryError::Decode(msg) => ListPostsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<BlogListView, ListPostsError>;
}
