// src/modules/blog/adapter/outgoing/post_query_http.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::blog::application::ports::outgoing::post_query::{
    PostItem, PostQuery, PostQueryError,
};
use crate::shared::content_store::{ContentStoreError, QueryExecutor};

/// Homepage teaser window; slices are inclusive.
pub fn latest_query(limit: usize) -> String {
    format!(
        r#"*[_type=="post" && defined(slug.current)] | order(publishedAt desc)[0..{}]{{
  _id,
  title,
  "slug": slug.current,
  publishedAt
}}"#,
        limit.saturating_sub(1)
    )
}

/// Blog listing, with the author and category titles dereferenced.
pub const LIST_POSTS_QUERY: &str = r#"*[_type=="post" && defined(slug.current)] | order(publishedAt desc){
  _id,
  title,
  "slug": slug.current,
  publishedAt,
  "authorName": author->name,
  "categories": categories[]->title
}"#;

#[derive(Clone)]
pub struct PostQueryHttp {
    store: Arc<dyn QueryExecutor>,
}

impl PostQueryHttp {
    pub fn new(store: Arc<dyn QueryExecutor>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostQuery for PostQueryHttp {
    async fn latest(&self, limit: usize) -> Result<Vec<PostItem>, PostQueryError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let result = self
            .store
            .query(&latest_query(limit), &[])
            .await
            .map_err(map_store_err)?;

        decode_posts(result)
    }

    async fn list_published(&self) -> Result<Vec<PostItem>, PostQueryError> {
        let result = self
            .store
            .query(LIST_POSTS_QUERY, &[])
            .await
            .map_err(map_store_err)?;

        decode_posts(result)
    }
}

fn decode_posts(result: Value) -> Result<Vec<PostItem>, PostQueryError> {
    if result.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(result).map_err(|err| PostQueryError::Decode(err.to_string()))
}

fn map_store_err(err: ContentStoreError) -> PostQueryError {
    match err {
        ContentStoreError::Decode(msg) => PostQueryError::Decode(msg),
        other => PostQueryError::Upstream(other.to_string()),
    }
}
