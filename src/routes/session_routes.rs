use actix_web::web;
use actix_web::middleware::Logger;
use crate::handlers::session_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sessions")
            .wrap(Logger::default())
            .route("", web::post().to(session_handlers::create_session))
            .route("/{session_id}", web::get().to(session_handlers::get_session))
            .route("/{session_id}", web::delete().to(session_handlers::delete_session))

            // wallet generator panel
            .route("/{session_id}/wallet", web::post().to(session_handlers::generate_wallet))

            // document signer panel
            .route("/{session_id}/document", web::put().to(session_handlers::update_document))
            .route("/{session_id}/hash", web::post().to(session_handlers::hash_document))
            .route("/{session_id}/sign", web::post().to(session_handlers::sign_document))

            // signature verifier panel
            .route("/{session_id}/verifier", web::put().to(session_handlers::update_verifier))
            .route("/{session_id}/verifier/from-signer", web::post().to(session_handlers::use_signed_document))
            .route("/{session_id}/verify", web::post().to(session_handlers::verify))
    );
}
