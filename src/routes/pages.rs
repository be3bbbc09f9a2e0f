use actix_web::{
    HttpRequest, HttpResponse, Responder, get,
    http::header::ContentType,
    web,
};
use chrono::Utc;

use crate::{
    handlers::{
        pages::{self, LandingQuery},
        preferences,
    },
    state::AppState,
};

/// Every failure redirect lands here, so a query that does not fit
/// `LandingQuery` still renders the page, just without a notice.
#[get("/")]
async fn landing(req: HttpRequest, query: Option<web::Query<LandingQuery>>) -> impl Responder {
    let prefs = preferences::load(&req);
    let query = query.map(web::Query::into_inner).unwrap_or_default();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::landing(&prefs, &query))
}

#[get("/terms")]
async fn terms(req: HttpRequest) -> impl Responder {
    let prefs = preferences::load(&req);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::terms(&prefs))
}

#[get("/sitemap.xml")]
async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::xml())
        .body(pages::sitemap(&state.config.public_url, Utc::now().date_naive()))
}

#[get("/manifest.webmanifest")]
async fn manifest() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/manifest+json")
        .body(pages::manifest().to_string())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(landing)
        .service(terms)
        .service(sitemap)
        .service(manifest);
}
