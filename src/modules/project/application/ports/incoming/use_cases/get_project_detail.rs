// src/modules/project/application/ports/incoming/use_cases/get_project_detail.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;

//
// ──────────────────────────────────────────────────────────
// Presentation view
// ──────────────────────────────────────────────────────────
//

/// Fallback detail page, reached only when a project has neither external
/// URL. It therefore carries no external action row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailView {
    pub title: String,
    pub summary: Option<String>,
    pub cover_url: Option<String>,
    /// Always set when `cover_url` is; falls back to the title.
    pub cover_alt: Option<String>,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    pub published_label: Option<String>,
    pub body_html: Option<String>,
}

/// Terminal decision for a resolved project document.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectDetailOutcome {
    /// Send the visitor to the published site or the repository.
    Redirect(String),
    /// Neither external URL is set; render locally.
    Render(ProjectDetailView),
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectDetailError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetProjectDetailError::NotFound,
            ProjectQueryError::Upstream(msg) => GetProjectDetailError::QueryFailed(msg),
            ProjectQueryError::Decode(msg) => GetProjectDetailError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProjectDetailOutcome, GetProjectDetailError>;
}
