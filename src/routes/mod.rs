mod crypto_routes;
mod session_routes;

pub use crypto_routes::configure as configure_crypto_routes;
pub use session_routes::configure as configure_session_routes;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    configure_crypto_routes(cfg);
    configure_session_routes(cfg);
    cfg.route("/health", actix_web::web::get().to(crate::handlers::health_check));
}
