// src/tests/support/app_state_builder.rs

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use tera::Tera;

use crate::blog::application::ports::incoming::ListPostsUseCase;
use crate::home::application::ports::incoming::{ComposeHomeError, ComposeHomeUseCase};
use crate::project::application::ports::incoming::use_cases::{
    GetProjectDetailUseCase, ListProjectsUseCase,
};
use crate::shared::render_cache::RenderCache;
use crate::tests::support::stubs::*;
use crate::AppState;

pub fn test_templates() -> Arc<Tera> {
    let glob = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html");
    Arc::new(Tera::new(glob).expect("page templates must parse"))
}

pub struct TestAppStateBuilder {
    compose_home: Option<Arc<dyn ComposeHomeUseCase + Send + Sync>>,
    list_projects: Option<Arc<dyn ListProjectsUseCase + Send + Sync>>,
    get_project_detail: Option<Arc<dyn GetProjectDetailUseCase + Send + Sync>>,
    list_posts: Option<Arc<dyn ListPostsUseCase + Send + Sync>>,
    render_window: Duration,
    studio_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            compose_home: Some(Arc::new(StubComposeHomeUseCase::error(
                ComposeHomeError::QueryFailed("not used in this test".to_string()),
            ))),
            list_projects: Some(Arc::new(StubListProjectsUseCase::unused())),
            get_project_detail: Some(Arc::new(StubGetProjectDetailUseCase::not_found())),
            list_posts: Some(Arc::new(StubListPostsUseCase::unused())),
            // Inert by default so ordinary route tests never hit a stale
            // replay; cache tests opt in with a real window.
            render_window: Duration::ZERO,
            studio_url: "https://studio.example.com".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_compose_home(
        mut self,
        uc: impl ComposeHomeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.compose_home = Some(Arc::new(uc));
        self
    }

    pub fn with_list_projects(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_get_project_detail(
        mut self,
        uc: impl GetProjectDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_project_detail = Some(Arc::new(uc));
        self
    }

    pub fn with_list_posts(mut self, uc: impl ListPostsUseCase + Send + Sync + 'static) -> Self {
        self.list_posts = Some(Arc::new(uc));
        self
    }

    pub fn with_render_window(mut self, window: Duration) -> Self {
        self.render_window = window;
        self
    }

    pub fn with_studio_url(mut self, url: &str) -> Self {
        self.studio_url = url.to_string();
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            compose_home_use_case: self.compose_home.unwrap(),
            list_projects_use_case: self.list_projects.unwrap(),
            get_project_detail_use_case: self.get_project_detail.unwrap(),
            list_posts_use_case: self.list_posts.unwrap(),
            templates: test_templates(),
            render_cache: Arc::new(RenderCache::new(self.render_window)),
            studio_url: self.studio_url,
        })
    }
}
