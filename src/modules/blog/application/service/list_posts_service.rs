// src/modules/blog/application/service/list_posts_service.rs

use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::list_posts::{
    BlogListView, ListPostsError, ListPostsUseCase, PostItemView,
};
use crate::modules::blog::application::ports::outgoing::post_query::PostQuery;

pub struct ListPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> ListPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPostsUseCase for ListPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<BlogListView, ListPostsError> {
        let posts = self.query.list_published().await?;

        Ok(BlogListView {
            posts: posts.into_iter().map(PostItemView::from).collect(),
        })
    }
}
