// src/modules/project/adapter/outgoing/project_query_http.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectCard, ProjectDetailDoc, ProjectQuery, ProjectQueryError,
};
use crate::shared::content_store::{ContentStoreError, QueryExecutor};
use crate::shared::slug;

/// Card projection shared by the featured and list queries.
const CARD_FIELDS: &str = r#"{
  _id,
  title,
  "slug": slug.current,
  summary,
  mainImage,
  techStack,
  githubUrl,
  liveUrl,
  featured
}"#;

/// Featured homepage window. Slices are inclusive, so a limit of 4 becomes
/// `[0..3]`.
pub fn featured_query(limit: usize) -> String {
    format!(
        r#"*[_type=="project" && featured==true && defined(slug.current)] | order(publishedAt desc, _createdAt desc)[0..{}]{}"#,
        limit.saturating_sub(1),
        CARD_FIELDS
    )
}

pub fn list_query() -> String {
    format!(
        r#"*[_type=="project" && defined(slug.current)] | order(publishedAt desc, _createdAt desc){}"#,
        CARD_FIELDS
    )
}

pub const PROJECT_DETAIL_QUERY: &str = r#"*[_type=="project" && slug.current==$slug][0]{
  title,
  summary,
  mainImage,
  content,
  techStack,
  tags,
  githubUrl,
  liveUrl,
  publishedAt
}"#;

#[derive(Clone)]
pub struct ProjectQueryHttp {
    store: Arc<dyn QueryExecutor>,
}

impl ProjectQueryHttp {
    pub fn new(store: Arc<dyn QueryExecutor>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryHttp {
    async fn featured(&self, limit: usize) -> Result<Vec<ProjectCard>, ProjectQueryError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let result = self
            .store
            .query(&featured_query(limit), &[])
            .await
            .map_err(map_store_err)?;

        decode_cards(result)
    }

    async fn list_published(&self) -> Result<Vec<ProjectCard>, ProjectQueryError> {
        let result = self
            .store
            .query(&list_query(), &[])
            .await
            .map_err(map_store_err)?;

        decode_cards(result)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectDetailDoc, ProjectQueryError> {
        let normalized = slug::normalize(slug);
        let result = self
            .store
            .query(
                PROJECT_DETAIL_QUERY,
                &[("slug", Value::String(normalized))],
            )
            .await
            .map_err(map_store_err)?;

        if result.is_null() {
            return Err(ProjectQueryError::NotFound);
        }

        serde_json::from_value(result).map_err(|err| ProjectQueryError::Decode(err.to_string()))
    }
}

fn decode_cards(result: Value) -> Result<Vec<ProjectCard>, ProjectQueryError> {
    if result.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(result).map_err(|err| ProjectQueryError::Decode(err.to_string()))
}

fn map_store_err(err: ContentStoreError) -> ProjectQueryError {
    match err {
        ContentStoreError::Decode(msg) => ProjectQueryError::Decode(msg),
        other => ProjectQueryError::Upstream(other.to_string()),
    }
}
