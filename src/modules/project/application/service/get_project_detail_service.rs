// src/modules/project/application/service/get_project_detail_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase, ProjectDetailOutcome, ProjectDetailView,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    non_blank, ProjectQuery,
};
use crate::shared::content_store::{portable_text, Fit, ImageUrlBuilder};

pub const DETAIL_COVER_WIDTH: u32 = 1400;
pub const DETAIL_COVER_HEIGHT: u32 = 800;

/// Resolves a project document and applies the redirect policy:
/// published site first, then repository, then the local fallback page.
pub struct GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    images: Arc<ImageUrlBuilder>,
}

impl<Q> GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q, images: Arc<ImageUrlBuilder>) -> Self {
        Self { query, images }
    }
}

#[async_trait]
impl<Q> GetProjectDetailUseCase for GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ProjectDetailOutcome, GetProjectDetailError> {
        let doc = self.query.get_by_slug(slug).await?;

        if let Some(url) = non_blank(doc.live_url.clone()) {
            return Ok(ProjectDetailOutcome::Redirect(url));
        }
        if let Some(url) = non_blank(doc.github_url.clone()) {
            return Ok(ProjectDetailOutcome::Redirect(url));
        }

        let title = doc.title.unwrap_or_default();
        let cover_url = doc.main_image.as_ref().and_then(|image| {
            self.images
                .image_url(image, DETAIL_COVER_WIDTH, DETAIL_COVER_HEIGHT, Fit::Crop)
        });
        let cover_alt = cover_url.is_some().then(|| {
            doc.main_image
                .as_ref()
                .and_then(|image| image.alt.clone())
                .unwrap_or_else(|| title.clone())
        });
        let body_html = doc
            .content
            .map(|blocks| portable_text::to_html(&blocks, &self.images))
            .filter(|html| !html.is_empty());

        Ok(ProjectDetailOutcome::Render(ProjectDetailView {
            title,
            summary: doc.summary,
            cover_url,
            cover_alt,
            tech_stack: doc.tech_stack.unwrap_or_default(),
            tags: doc.tags.unwrap_or_default(),
            published_label: doc
                .published_at
                .map(|at| at.format("%Y-%m-%d").to_string()),
            body_html,
        }))
    }
}
