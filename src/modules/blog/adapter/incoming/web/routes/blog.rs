// src/modules/blog/adapter/incoming/web/routes/blog.rs

use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::blog::application::ports::incoming::list_posts::ListPostsError;
use crate::shared::pages::{render_template, PageResponse};
use crate::shared::render_cache::CachedPage;
use crate::AppState;

const CACHE_KEY: &str = "/blog";

#[get("/blog")]
pub async fn blog_handler(data: web::Data<AppState>) -> impl Responder {
    if let Some(page) = data.render_cache.get(CACHE_KEY).await {
        return page.into_response();
    }

    match data.list_posts_use_case.execute().await {
        Ok(view) => match render_template(&data.templates, "blog.html", &view) {
            Ok(body) => {
                data.render_cache
                    .put(CACHE_KEY, CachedPage::Html(body.clone()))
                    .await;
                PageResponse::html(body)
            }
            Err(err) => {
                error!("Template error rendering the blog list: {err}");
                PageResponse::internal_error(&data.templates)
            }
        },

        Err(ListPostsError::QueryFailed(msg)) => {
            error!("Query error listing posts: {msg}");
            PageResponse::internal_error(&data.templates)
        }
    }
}
