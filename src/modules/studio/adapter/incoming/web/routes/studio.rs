// src/modules/studio/adapter/incoming/web/routes/studio.rs
//
// The admin editing surface is a hosted, vendor-controlled application;
// this server only hands visitors over to it.

use actix_web::{get, web, Responder};

use crate::shared::pages::PageResponse;
use crate::AppState;

#[get("/studio")]
pub async fn studio_root_handler(data: web::Data<AppState>) -> impl Responder {
    PageResponse::redirect(data.studio_url.trim_end_matches('/'))
}

#[get("/studio/{tail:.*}")]
pub async fn studio_tail_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let tail = path.into_inner();
    let base = data.studio_url.trim_end_matches('/');
    let target = if tail.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{tail}")
    };
    PageResponse::redirect(&target)
}
