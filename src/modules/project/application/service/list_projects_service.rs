// src/modules/project/application/service/list_projects_service.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase, ProjectCardView, ProjectListView,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::shared::content_store::ImageUrlBuilder;

pub struct ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
    images: Arc<ImageUrlBuilder>,
}

impl<Q> ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q, images: Arc<ImageUrlBuilder>) -> Self {
        Self { query, images }
    }
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<ProjectListView, ListProjectsError> {
        let cards = self.query.list_published().await?;

        Ok(ProjectListView {
            projects: cards
                .into_iter()
                .map(|card| ProjectCardView::internal(card, &self.images))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::project_query::{
        ProjectCard, ProjectDetailDoc, ProjectQueryError,
    };

    /* --------------------------------------------------
     * Mock ProjectQuery
     * -------------------------------------------------- */

    struct MockProjectQuery {
        result: Result<Vec<ProjectCard>, ProjectQueryError>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn featured(&self, _limit: usize) -> Result<Vec<ProjectCard>, ProjectQueryError> {
            unimplemented!("not used in ListProjectsService tests")
        }

        async fn list_published(&self) -> Result<Vec<ProjectCard>, ProjectQueryError> {
            self.result.clone()
        }

        async fn get_by_slug(&self, _slug: &str) -> Result<ProjectDetailDoc, ProjectQueryError> {
            unimplemented!("not used in ListProjectsService tests")
        }
    }

    fn images() -> Arc<ImageUrlBuilder> {
        Arc::new(ImageUrlBuilder::new(
            "https://cdn.example.com/images/site/production",
        ))
    }

    fn card(id: &str, slug: &str) -> ProjectCard {
        ProjectCard {
            id: id.to_string(),
            title: Some(format!("Project {id}")),
            slug: Some(slug.to_string()),
            ..ProjectCard::default()
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn maps_cards_in_store_order() {
        let service = ListProjectsService::new(
            MockProjectQuery {
                result: Ok(vec![card("p1", "newest"), card("p2", "older")]),
            },
            images(),
        );

        let view = service.execute().await.unwrap();
        let slugs: Vec<&str> = view.projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "older"]);
        assert_eq!(view.projects[0].href, "/projects/newest");
    }

    #[tokio::test]
    async fn empty_result_is_an_empty_view_not_an_error() {
        let service = ListProjectsService::new(MockProjectQuery { result: Ok(vec![]) }, images());
        let view = service.execute().await.unwrap();
        assert!(view.projects.is_empty());
    }

    #[tokio::test]
    async fn upstream_errors_map_to_query_failed() {
        let service = ListProjectsService::new(
            MockProjectQuery {
                result: Err(ProjectQueryError::Upstream("store down".to_string())),
            },
            images(),
        );

        let err = service.execute().await.unwrap_err();
        assert!(matches!(err, ListProjectsError::QueryFailed(msg) if msg == "store down"));
    }
}
