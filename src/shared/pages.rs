// src/shared/pages.rs

use actix_web::{http::header, web, HttpResponse};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::error;

use crate::AppState;

/// HTML response envelope used by every page route.
pub struct PageResponse;

impl PageResponse {
    pub fn html(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)
    }

    /// Editors can retarget or clear external URLs at any time, so
    /// redirects are temporary rather than permanent.
    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::TemporaryRedirect()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    pub fn not_found(templates: &Tera) -> HttpResponse {
        match templates.render("not_found.html", &Context::new()) {
            Ok(body) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(err) => {
                error!("Template error rendering the not-found page: {err}");
                HttpResponse::NotFound()
                    .content_type("text/plain; charset=utf-8")
                    .body("Not found")
            }
        }
    }

    pub fn internal_error(templates: &Tera) -> HttpResponse {
        match templates.render("error.html", &Context::new()) {
            Ok(body) => HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(err) => {
                error!("Template error rendering the failure page: {err}");
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Something went wrong")
            }
        }
    }
}

pub fn render_template<T: Serialize>(
    templates: &Tera,
    name: &str,
    view: &T,
) -> tera::Result<String> {
    let context = Context::from_serialize(view)?;
    templates.render(name, &context)
}

/// Catch-all for routes outside the page surface.
pub async fn default_not_found(data: web::Data<AppState>) -> HttpResponse {
    PageResponse::not_found(&data.templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    fn templates_with(name: &str, body: &str) -> Tera {
        let mut tera = Tera::default();
        tera.add_raw_template(name, body).unwrap();
        tera
    }

    #[test]
    fn render_template_serializes_the_view() {
        let tera = templates_with("greet.html", "Hello {{ name }}");
        let body = render_template(
            &tera,
            "greet.html",
            &Greeting {
                name: "Aman".to_string(),
            },
        )
        .unwrap();
        assert_eq!(body, "Hello Aman");
    }

    #[test]
    fn redirect_sets_location_and_temporary_status() {
        let resp = PageResponse::redirect("https://example.com/demo");
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://example.com/demo"
        );
    }

    #[test]
    fn not_found_renders_template_when_present() {
        let tera = templates_with("not_found.html", "missing page");
        let resp = PageResponse::not_found(&tera);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_found_falls_back_to_plain_text_without_template() {
        let resp = PageResponse::not_found(&Tera::default());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_falls_back_to_plain_text_without_template() {
        let resp = PageResponse::internal_error(&Tera::default());
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
