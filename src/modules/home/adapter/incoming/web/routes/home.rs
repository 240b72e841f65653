// src/modules/home/adapter/incoming/web/routes/home.rs

use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::home::application::ports::incoming::compose_home::ComposeHomeError;
use crate::shared::pages::{render_template, PageResponse};
use crate::shared::render_cache::CachedPage;
use crate::AppState;

const CACHE_KEY: &str = "/";

#[get("/")]
pub async fn home_handler(data: web::Data<AppState>) -> impl Responder {
    if let Some(page) = data.render_cache.get(CACHE_KEY).await {
        return page.into_response();
    }

    match data.compose_home_use_case.execute().await {
        Ok(view) => match render_template(&data.templates, "home.html", &view) {
            Ok(body) => {
                data.render_cache
                    .put(CACHE_KEY, CachedPage::Html(body.clone()))
                    .await;
                PageResponse::html(body)
            }
            Err(err) => {
                error!("Template error rendering the home page: {err}");
                PageResponse::internal_error(&data.templates)
            }
        },

        Err(ComposeHomeError::QueryFailed(msg)) => {
            error!("Query error composing the home page: {msg}");
            PageResponse::internal_error(&data.templates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::time::Duration;

    use crate::modules::blog::application::ports::incoming::list_posts::PostItemView;
    use crate::modules::home::application::ports::incoming::compose_home::{
        ContactView, EducationView, ExperienceView, HomeView, PublicationView, SkillLine,
    };
    use crate::modules::project::application::ports::incoming::use_cases::ProjectCardView;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubComposeHomeUseCase;

    fn full_view() -> HomeView {
        HomeView {
            site_title: "Amandeep Singh".to_string(),
            hero_headline: "Statistical Science".to_string(),
            hero_subtext: Some("Bayesian methods at scale".to_string()),
            portrait_url: Some("https://cdn.example.com/p.jpg?w=420&h=420&fit=crop".to_string()),
            portrait_alt: Some("Portrait".to_string()),
            summary: Some("Short summary".to_string()),
            about_html: Some("<p>About me</p>".to_string()),
            contact: ContactView {
                email: Some("a@example.com".to_string()),
                github_url: Some("https://github.com/a".to_string()),
                linkedin_url: Some("https://linkedin.com/in/a".to_string()),
                ..ContactView::default()
            },
            cv_link: Some("https://cdn.example.com/cv.pdf".to_string()),
            featured_projects: vec![ProjectCardView {
                id: "p1".to_string(),
                title: "Claims Model".to_string(),
                slug: "claims-model".to_string(),
                summary: Some("Reserving".to_string()),
                cover_url: None,
                cover_alt: None,
                tech_stack: vec!["Rust".to_string()],
                featured: true,
                href: "https://claims.example.com".to_string(),
                external: true,
            }],
            latest_posts: vec![PostItemView {
                id: "post1".to_string(),
                title: "On priors".to_string(),
                slug: "on-priors".to_string(),
                href: "/blog/on-priors".to_string(),
                published_label: Some("2025-06-01".to_string()),
                author: None,
                categories: vec![],
            }],
            experience: vec![ExperienceView {
                role_line: "Actuarial Analyst — Acme Insurance".to_string(),
                meta_line: Some("Toronto • 2019-01 → Present".to_string()),
                highlights: vec!["Built a reserving model".to_string()],
            }],
            education: vec![EducationView {
                heading: Some("Ph.D. in Statistics".to_string()),
                institution_line: Some("Somewhere University".to_string()),
                years: Some("2021–2025".to_string()),
                notes: vec![],
            }],
            publications: vec![PublicationView {
                citation: "A paper".to_string(),
                year: Some(2024),
                link: None,
            }],
            awards: vec!["Gold Medal".to_string()],
            memberships: vec!["SOA".to_string()],
            skills: vec![SkillLine {
                label: "Programming".to_string(),
                items: "Rust, R".to_string(),
            }],
            year: 2026,
        }
    }

    async fn render(view: HomeView) -> String {
        let stub = StubComposeHomeUseCase::success(view);
        let app_state = TestAppStateBuilder::default().with_compose_home(stub).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_home_renders_every_region_when_populated() {
        let body = render(full_view()).await;

        assert!(body.contains("Amandeep Singh"));
        assert!(body.contains("Statistical Science"));
        assert!(body.contains("id=\"summary\""));
        assert!(body.contains("id=\"featured-projects\""));
        assert!(body.contains("id=\"latest-posts\""));
        assert!(body.contains("id=\"experience\""));
        assert!(body.contains("id=\"skills\""));
        assert!(body.contains("id=\"education\""));
        assert!(body.contains("id=\"publications\""));
        assert!(body.contains("id=\"recognition\""));
        assert!(body.contains("id=\"about\""));
        assert!(body.contains("View CV"));
        assert!(body.contains("© 2026 Amandeep Singh"));
    }

    #[actix_web::test]
    async fn test_home_omits_only_the_region_of_a_missing_field() {
        let mut view = full_view();
        view.summary = None;
        let body = render(view).await;

        assert!(!body.contains("id=\"summary\""));
        // Neighbouring regions are untouched.
        assert!(body.contains("id=\"featured-projects\""));
        assert!(body.contains("id=\"skills\""));
    }

    #[actix_web::test]
    async fn test_home_omits_the_skills_block_when_all_categories_are_empty() {
        let mut view = full_view();
        view.skills = vec![];
        let body = render(view).await;

        assert!(!body.contains("id=\"skills\""));
        assert!(body.contains("id=\"experience\""));
    }

    #[actix_web::test]
    async fn test_home_omits_portrait_and_cv_when_absent() {
        let mut view = full_view();
        view.portrait_url = None;
        view.portrait_alt = None;
        view.cv_link = None;
        let body = render(view).await;

        assert!(!body.contains("<img"));
        assert!(!body.contains("View CV"));
    }

    #[actix_web::test]
    async fn test_home_external_cards_open_directly() {
        let body = render(full_view()).await;
        assert!(body.contains("href=\"https://claims.example.com\""));
        assert!(body.contains("rel=\"noreferrer\""));
    }

    #[actix_web::test]
    async fn test_home_failure_is_a_server_error() {
        let stub = StubComposeHomeUseCase::error(ComposeHomeError::QueryFailed(
            "store down".to_string(),
        ));
        let app_state = TestAppStateBuilder::default().with_compose_home(stub).build();
        let app =
            test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_home_replays_within_the_revalidation_window() {
        let stub = StubComposeHomeUseCase::success(full_view());
        let calls = stub.calls.clone();

        let app_state = TestAppStateBuilder::default()
            .with_render_window(Duration::from_secs(60))
            .with_compose_home(stub)
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(home_handler)).await;

        for _ in 0..3 {
            let resp =
                test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
