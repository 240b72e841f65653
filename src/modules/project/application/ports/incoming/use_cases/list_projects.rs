// src/modules/project/application/ports/incoming/use_cases/list_projects.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::project::application::ports::outgoing::project_query::{
    non_blank, ProjectCard, ProjectQueryError,
};
use crate::shared::content_store::{Fit, ImageUrlBuilder};

//
// ──────────────────────────────────────────────────────────
// Presentation views
// ──────────────────────────────────────────────────────────
//

/// Card shape shared by the project list and the homepage grid. Covers in
/// list contexts are requested at 1200×700, crop-fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCardView {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub cover_url: Option<String>,
    /// Always set when `cover_url` is; falls back to the title.
    pub cover_alt: Option<String>,
    pub tech_stack: Vec<String>,
    pub featured: bool,
    pub href: String,
    pub external: bool,
}

pub const CARD_COVER_WIDTH: u32 = 1200;
pub const CARD_COVER_HEIGHT: u32 = 700;

impl ProjectCardView {
    /// Card linking to the local detail route.
    pub fn internal(card: ProjectCard, images: &ImageUrlBuilder) -> Self {
        let slug = card.slug.clone().unwrap_or_default();
        let href = format!("/projects/{slug}");
        Self::build(card, images, href, false)
    }

    /// Homepage card that goes straight to the published site (or its
    /// repository) when one exists.
    pub fn direct(card: ProjectCard, images: &ImageUrlBuilder) -> Self {
        let external_href =
            non_blank(card.live_url.clone()).or_else(|| non_blank(card.github_url.clone()));
        match external_href {
            Some(href) => Self::build(card, images, href, true),
            None => Self::internal(card, images),
        }
    }

    fn build(card: ProjectCard, images: &ImageUrlBuilder, href: String, external: bool) -> Self {
        let title = card.title.unwrap_or_default();
        let cover_url = card
            .main_image
            .as_ref()
            .and_then(|image| images.image_url(image, CARD_COVER_WIDTH, CARD_COVER_HEIGHT, Fit::Crop));
        let cover_alt = cover_url.is_some().then(|| {
            card.main_image
                .as_ref()
                .and_then(|image| image.alt.clone())
                .unwrap_or_else(|| title.clone())
        });

        Self {
            id: card.id,
            title,
            slug: card.slug.unwrap_or_default(),
            summary: card.summary,
            cover_url,
            cover_alt,
            tech_stack: card.tech_stack.unwrap_or_default(),
            featured: card.featured.unwrap_or(false),
            href,
            external,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectListView {
    pub projects: Vec<ProjectCardView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for ListProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            // For a listing, NotFound is not meaningful (an empty list is
            // valid), but we still map defensively.
            ProjectQueryError::NotFound => ListProjectsError::QueryFailed("Not found".to_string()),
            ProjectQueryError::Upstream(msg) => ListProjectsError::QueryFailed(msg),
            ProjectQueryError::Decode(msg) => ListProjectsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProjectListView, ListProjectsError>;
}
