// src/tests/support/stubs.rs
//
// Hand-rolled use-case stubs for route tests. Each stub counts its
// executions so cache-replay tests can assert how often the composer was
// actually consulted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::blog::application::ports::incoming::{BlogListView, ListPostsError, ListPostsUseCase};
use crate::home::application::ports::incoming::{ComposeHomeError, ComposeHomeUseCase, HomeView};
use crate::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase, ListProjectsError, ListProjectsUseCase,
    ProjectDetailOutcome, ProjectDetailView, ProjectListView,
};

pub struct StubComposeHomeUseCase {
    result: Result<HomeView, ComposeHomeError>,
    pub calls: Arc<AtomicUsize>,
}

impl StubComposeHomeUseCase {
    pub fn success(view: HomeView) -> Self {
        Self {
            result: Ok(view),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn error(err: ComposeHomeError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ComposeHomeUseCase for StubComposeHomeUseCase {
    async fn execute(&self) -> Result<HomeView, ComposeHomeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub struct StubListProjectsUseCase {
    result: Result<ProjectListView, ListProjectsError>,
    pub calls: Arc<AtomicUsize>,
}

impl StubListProjectsUseCase {
    pub fn success(view: ProjectListView) -> Self {
        Self {
            result: Ok(view),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn error(err: ListProjectsError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unused() -> Self {
        Self::error(ListProjectsError::QueryFailed(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self) -> Result<ProjectListView, ListProjectsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub struct StubGetProjectDetailUseCase {
    result: Result<ProjectDetailOutcome, GetProjectDetailError>,
    pub calls: Arc<AtomicUsize>,
}

impl StubGetProjectDetailUseCase {
    pub fn redirect(url: &str) -> Self {
        Self {
            result: Ok(ProjectDetailOutcome::Redirect(url.to_string())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn render(view: ProjectDetailView) -> Self {
        Self {
            result: Ok(ProjectDetailOutcome::Render(view)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetProjectDetailError::NotFound),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn error(err: GetProjectDetailError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl GetProjectDetailUseCase for StubGetProjectDetailUseCase {
    async fn execute(&self, _slug: &str) -> Result<ProjectDetailOutcome, GetProjectDetailError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub struct StubListPostsUseCase {
    result: Result<BlogListView, ListPostsError>,
    pub calls: Arc<AtomicUsize>,
}

impl StubListPostsUseCase {
    pub fn success(view: BlogListView) -> Self {
        Self {
            result: Ok(view),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn error(err: ListPostsError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unused() -> Self {
        Self::error(ListPostsError::QueryFailed(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl ListPostsUseCase for StubListPostsUseCase {
    async fn execute(&self) -> Result<BlogListView, ListPostsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
