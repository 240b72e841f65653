// src/modules/project/adapter/incoming/web/routes/project_detail.rs

use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, ProjectDetailOutcome,
};
use crate::shared::pages::{render_template, PageResponse};
use crate::shared::render_cache::CachedPage;
use crate::shared::slug;
use crate::AppState;

#[get("/projects/{slug}")]
pub async fn project_detail_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let requested = path.into_inner();

    // Structural guard; the redirect policy is never evaluated for a slug
    // that cannot name a document.
    if !slug::is_valid(&requested) {
        return PageResponse::not_found(&data.templates);
    }

    let cache_key = format!("/projects/{requested}");
    if let Some(page) = data.render_cache.get(&cache_key).await {
        return page.into_response();
    }

    match data.get_project_detail_use_case.execute(&requested).await {
        Ok(ProjectDetailOutcome::Redirect(url)) => {
            data.render_cache
                .put(&cache_key, CachedPage::Redirect(url.clone()))
                .await;
            PageResponse::redirect(&url)
        }

        Ok(ProjectDetailOutcome::Render(view)) => {
            match render_template(&data.templates, "project_detail.html", &view) {
                Ok(body) => {
                    data.render_cache
                        .put(&cache_key, CachedPage::Html(body.clone()))
                        .await;
                    PageResponse::html(body)
                }
                Err(err) => {
                    error!("Template error rendering project {requested}: {err}");
                    PageResponse::internal_error(&data.templates)
                }
            }
        }

        Err(GetProjectDetailError::NotFound) => PageResponse::not_found(&data.templates),

        Err(GetProjectDetailError::QueryFailed(msg)) => {
            error!("Query error fetching project {requested}: {msg}");
            PageResponse::internal_error(&data.templates)
        }
    }
}
