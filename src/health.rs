use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::shared::content_store::QueryExecutor;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content_store: &'static str,
}

/// Cheapest possible round-trip through the query endpoint.
const READINESS_QUERY: &str = r#"*[_type=="siteSettings"][0]._id"#;

/// LIVENESS PROBE
/// - No I/O
/// - No content store
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the content store round-trip
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<dyn QueryExecutor>>) -> impl Responder {
    let store_status = match store.query(READINESS_QUERY, &[]).await {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if store_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_store: store_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content_store: store_status,
        })
    }
}
