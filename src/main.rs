pub mod health;
pub mod modules;
pub mod shared;

pub use modules::blog;
pub use modules::home;
pub use modules::project;
pub use modules::site;
pub use modules::studio;

use crate::blog::adapter::outgoing::PostQueryHttp;
use crate::blog::application::ports::incoming::ListPostsUseCase;
use crate::blog::application::service::ListPostsService;
use crate::home::application::ports::incoming::ComposeHomeUseCase;
use crate::home::application::service::ComposeHomeService;
use crate::project::adapter::outgoing::ProjectQueryHttp;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectDetailUseCase, ListProjectsUseCase,
};
use crate::project::application::service::{GetProjectDetailService, ListProjectsService};
use crate::shared::config::AppConfig;
use crate::shared::content_store::{
    ContentStoreConfig, HttpQueryExecutor, ImageUrlBuilder, QueryExecutor,
};
use crate::shared::render_cache::RenderCache;
use crate::site::adapter::outgoing::SettingsQueryHttp;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tera::Tera;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub compose_home_use_case: Arc<dyn ComposeHomeUseCase + Send + Sync>,
    pub list_projects_use_case: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get_project_detail_use_case: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
    pub list_posts_use_case: Arc<dyn ListPostsUseCase + Send + Sync>,
    pub templates: Arc<Tera>,
    pub render_cache: Arc<RenderCache>,
    pub studio_url: String,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    // Content store connection
    let store: Arc<dyn QueryExecutor> = Arc::new(HttpQueryExecutor::new(ContentStoreConfig {
        query_url: config.content_query_url.clone(),
        token: config.content_api_token.clone(),
    }));
    let images = Arc::new(ImageUrlBuilder::new(config.content_cdn_url.clone()));

    // Read-side adapters
    let settings_query = SettingsQueryHttp::new(Arc::clone(&store));
    let project_query = ProjectQueryHttp::new(Arc::clone(&store));
    let post_query = PostQueryHttp::new(Arc::clone(&store));

    // Page composers
    let compose_home = ComposeHomeService::new(
        settings_query,
        project_query.clone(),
        post_query.clone(),
        Arc::clone(&images),
    );
    let list_projects = ListProjectsService::new(project_query.clone(), Arc::clone(&images));
    let get_project_detail = GetProjectDetailService::new(project_query, Arc::clone(&images));
    let list_posts = ListPostsService::new(post_query);

    let templates = Arc::new(
        Tera::new("templates/**/*.html").context("Failed to load page templates")?,
    );
    let render_cache = Arc::new(RenderCache::new(config.revalidate_window));

    let state = AppState {
        compose_home_use_case: Arc::new(compose_home),
        list_projects_use_case: Arc::new(list_projects),
        get_project_detail_use_case: Arc::new(get_project_detail),
        list_posts_use_case: Arc::new(list_posts),
        templates,
        render_cache,
        studio_url: config.studio_url.clone(),
    };

    let store_for_server = Arc::clone(&store);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&store_for_server)))
            .configure(init_routes)
            .default_service(web::route().to(shared::pages::default_not_found))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::home::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::project_detail_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::blog_handler);
    // Admin delegation + schema contract
    cfg.service(crate::studio::adapter::incoming::web::routes::studio_root_handler);
    cfg.service(crate::studio::adapter::incoming::web::routes::studio_tail_handler);
    cfg.service(crate::modules::schema::routes::schema_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
