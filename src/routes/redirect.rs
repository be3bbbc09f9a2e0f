use actix_web::{
    HttpRequest, HttpResponse, Responder, get,
    http::header::{CACHE_CONTROL, LOCATION},
    web,
};
use tracing::debug;

use crate::state::AppState;

/// Catch-all for short codes. Registered last so static pages win. The
/// declared tail is read undecoded from the match info so an encoded `/`
/// does not split a code in two.
#[get("/{tail:.*}")]
async fn resolve(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let tail = req.match_info().get("tail").unwrap_or_default();
    let resolution = state.resolver.resolve(tail).await;

    // Reserved names that reach this route have no static page at this path.
    let Some(target) = resolution.redirect_target() else {
        return HttpResponse::NotFound().finish();
    };

    debug!("Redirecting /{tail} to {target}");
    HttpResponse::TemporaryRedirect()
        .insert_header((LOCATION, target))
        .insert_header((CACHE_CONTROL, "no-store"))
        .finish()
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(resolve);
}
