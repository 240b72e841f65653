// src/modules/schema/routes.rs

use actix_web::{get, HttpResponse, Responder};

use super::definitions::schema_types;

/// Machine-readable schema contract. The hosted studio deployment reads
/// this to keep its editing widgets in lock-step with the site.
#[get("/api/schema")]
pub async fn schema_handler() -> impl Responder {
    HttpResponse::Ok().json(schema_types())
}
