use actix_web::{HttpRequest, HttpResponse, Responder, get, post, put, web};
use serde_json::json;

use crate::{
    handlers::{
        preferences,
        shorten::{self, ShortenError},
    },
    models::{preferences::PreferencesUpdate, shorten::ShortenRequest},
    state::AppState,
};

#[post("/shorten")]
async fn shorten_url(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<ShortenRequest>,
) -> Result<HttpResponse, ShortenError> {
    let accepted = preferences::terms_accepted(&req);
    let response = shorten::shorten(&state.backend, accepted, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/preferences")]
async fn get_preferences(req: HttpRequest) -> impl Responder {
    HttpResponse::Ok().json(preferences::load(&req))
}

#[put("/preferences")]
async fn update_preferences(
    req: HttpRequest,
    update: web::Json<PreferencesUpdate>,
) -> impl Responder {
    let (prefs, cookies) = preferences::apply(preferences::load(&req), update.into_inner());

    let mut response = HttpResponse::Ok();
    for cookie in cookies {
        response.cookie(cookie);
    }
    response.json(prefs)
}

#[post("/preferences/terms")]
async fn accept_terms(req: HttpRequest) -> impl Responder {
    let mut prefs = preferences::load(&req);
    prefs.terms_accepted = true;

    HttpResponse::Ok()
        .cookie(preferences::accept_terms())
        .json(prefs)
}

#[post("/preferences/language/toggle")]
async fn toggle_language(req: HttpRequest) -> impl Responder {
    let mut prefs = preferences::load(&req);
    prefs.language = prefs.language.toggled();

    HttpResponse::Ok()
        .cookie(preferences::set_language(prefs.language))
        .json(prefs)
}

#[post("/preferences/theme/toggle")]
async fn toggle_theme(req: HttpRequest) -> impl Responder {
    let mut prefs = preferences::load(&req);
    prefs.theme = prefs.theme.toggled();

    HttpResponse::Ok()
        .cookie(preferences::set_theme(prefs.theme))
        .json(prefs)
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({ "success": false, "error": "not_found" }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(shorten_url)
        .service(get_preferences)
        .service(update_preferences)
        .service(accept_terms)
        .service(toggle_language)
        .service(toggle_theme);
}
