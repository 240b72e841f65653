// src/modules/home/application/ports/incoming/compose_home.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::blog::application::ports::incoming::list_posts::PostItemView;
use crate::modules::blog::application::ports::outgoing::post_query::PostQueryError;
use crate::modules::project::application::ports::incoming::use_cases::ProjectCardView;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::site::application::ports::outgoing::SettingsQueryError;

/// Fallbacks for a settings document that has not been filled in yet.
pub const DEFAULT_SITE_TITLE: &str = "Amandeep Singh";
pub const DEFAULT_HERO_HEADLINE: &str =
    "Statistical Science • Bayesian Methods • Scalable Modeling Systems";

//
// ──────────────────────────────────────────────────────────
// Presentation views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactView {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

/// One labeled line of the skills block. Lines exist only for non-empty
/// categories and keep the fixed category order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillLine {
    pub label: String,
    pub items: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceView {
    pub role_line: String,
    pub meta_line: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationView {
    pub heading: Option<String>,
    pub institution_line: Option<String>,
    pub years: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicationView {
    pub citation: String,
    pub year: Option<i32>,
    pub link: Option<String>,
}

/// Everything the homepage template needs, with optional regions absent
/// rather than placeholder-rendered.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub site_title: String,
    pub hero_headline: String,
    pub hero_subtext: Option<String>,
    pub portrait_url: Option<String>,
    /// Always set when `portrait_url` is.
    pub portrait_alt: Option<String>,
    pub summary: Option<String>,
    pub about_html: Option<String>,
    pub contact: ContactView,
    pub cv_link: Option<String>,
    pub featured_projects: Vec<ProjectCardView>,
    pub latest_posts: Vec<PostItemView>,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub publications: Vec<PublicationView>,
    pub awards: Vec<String>,
    pub memberships: Vec<String>,
    pub skills: Vec<SkillLine>,
    pub year: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ComposeHomeError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SettingsQueryError> for ComposeHomeError {
    fn from(err: SettingsQueryError) -> Self {
        ComposeHomeError::QueryFailed(err.to_string())
    }
}

impl From<ProjectQueryError> for ComposeHomeError {
    fn from(err: ProjectQueryError) -> Self {
        ComposeHomeError::QueryFailed(err.to_string())
    }
}

impl From<PostQueryError> for ComposeHomeError {
    fn from(err: PostQueryError) -> Self {
        ComposeHomeError::QueryFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ComposeHomeUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomeView, ComposeHomeError>;
}
