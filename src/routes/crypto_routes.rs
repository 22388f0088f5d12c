use actix_web::web;
use actix_web::middleware::Logger;
use crate::handlers::crypto_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/crypto")
            .wrap(Logger::default())
            .route("/keypair", web::post().to(crypto_handlers::create_key_pair))
            .route("/hash", web::post().to(crypto_handlers::hash_content))
            .route("/sign", web::post().to(crypto_handlers::sign))
            .route("/verify", web::post().to(crypto_handlers::verify))
            .route("/truncate", web::post().to(crypto_handlers::truncate))
    );
}
