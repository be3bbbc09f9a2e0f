pub mod api;
pub mod health;
pub mod pages;
pub mod redirect;

use actix_web::web;

/// Order matters: the short-code catch-all must come after every static route.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(
            web::scope("/api")
                .configure(api::init)
                .default_service(web::to(api::not_found)),
        )
        .configure(pages::init)
        .configure(redirect::init);
}
