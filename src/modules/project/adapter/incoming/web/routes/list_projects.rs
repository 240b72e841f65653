// src/modules/project/adapter/incoming/web/routes/list_projects.rs

use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsError;
use crate::shared::pages::{render_template, PageResponse};
use crate::shared::render_cache::CachedPage;
use crate::AppState;

const CACHE_KEY: &str = "/projects";

#[get("/projects")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    if let Some(page) = data.render_cache.get(CACHE_KEY).await {
        return page.into_response();
    }

    match data.list_projects_use_case.execute().await {
        Ok(view) => match render_template(&data.templates, "projects.html", &view) {
            Ok(body) => {
                data.render_cache
                    .put(CACHE_KEY, CachedPage::Html(body.clone()))
                    .await;
                PageResponse::html(body)
            }
            Err(err) => {
                error!("Template error rendering the project list: {err}");
                PageResponse::internal_error(&data.templates)
            }
        },

        Err(ListProjectsError::QueryFailed(msg)) => {
            error!("Query error listing projects: {msg}");
            PageResponse::internal_error(&data.templates)
        }
    }
}
