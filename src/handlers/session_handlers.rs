use actix_web::{web, HttpResponse};
use log::info;
use uuid::Uuid;
use crate::models::{ApiError, SessionQuery, UpdateDocumentRequest, UpdateVerifierRequest};
use crate::services::SimulatorService;

pub async fn create_session(
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.create_session()?;
    Ok(HttpResponse::Created().json(session.view(false)))
}

pub async fn get_session(
    session_id: web::Path<Uuid>,
    query: web::Query<SessionQuery>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.get_session(*session_id)?;
    Ok(HttpResponse::Ok().json(session.view(query.reveal)))
}

pub async fn delete_session(
    session_id: web::Path<Uuid>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    simulator.delete_session(*session_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Generate (or replace) the session wallet
pub async fn generate_wallet(
    session_id: web::Path<Uuid>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.generate_wallet(*session_id)?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

pub async fn update_document(
    session_id: web::Path<Uuid>,
    payload: web::Json<UpdateDocumentRequest>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.update_document(*session_id, payload.into_inner().document)?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

pub async fn hash_document(
    session_id: web::Path<Uuid>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.hash_document(*session_id)?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

pub async fn sign_document(
    session_id: web::Path<Uuid>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.sign_document(*session_id)?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

pub async fn update_verifier(
    session_id: web::Path<Uuid>,
    payload: web::Json<UpdateVerifierRequest>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.update_verifier(*session_id, payload.into_inner())?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

/// Copy the signer output into the verifier inputs
pub async fn use_signed_document(
    session_id: web::Path<Uuid>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    let session = simulator.use_signed_document(*session_id)?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

pub async fn verify(
    session_id: web::Path<Uuid>,
    simulator: web::Data<SimulatorService>,
) -> Result<HttpResponse, ApiError> {
    info!("Verifying signature for session {}", session_id);
    let session = simulator.verify(*session_id)?;
    Ok(HttpResponse::Ok().json(session.view(false)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use crate::models::{SessionView, VerificationResult};
    use crate::services::SimulatorService;
    use crate::utils::crypto::SeededRandom;

    macro_rules! session_app {
        ($max:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(SimulatorService::with_random(
                        $max,
                        Box::new(SeededRandom::new(11)),
                    )))
                    .configure(crate::routes::configure_session_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_full_simulator_flow() {
        let app = session_app!(4);

        let req = test::TestRequest::post().uri("/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let session: SessionView = test::read_body_json(resp).await;
        let base = format!("/sessions/{}", session.id);

        let req = test::TestRequest::post().uri(&format!("{}/wallet", base)).to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;
        let wallet = session.wallet.unwrap();
        assert!(!wallet.private_key_revealed);
        assert!(wallet.address.contains("..."));

        let req = test::TestRequest::put()
            .uri(&format!("{}/document", base))
            .set_json(json!({ "document": "I agree to the terms." }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post().uri(&format!("{}/hash", base)).to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session.hash.unwrap().len(), 64);

        let req = test::TestRequest::post().uri(&format!("{}/sign", base)).to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session.signature.unwrap().len(), 68);

        let req = test::TestRequest::post()
            .uri(&format!("{}/verifier/from-signer", base))
            .to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session.verification, VerificationResult::Unknown);
        assert_eq!(session.received_document, "I agree to the terms.");

        let req = test::TestRequest::post().uri(&format!("{}/verify", base)).to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session.verification, VerificationResult::Valid);
    }

    #[actix_web::test]
    async fn test_reveal_private_key() {
        let app = session_app!(4);
        let req = test::TestRequest::post().uri("/sessions").to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/wallet", session.id))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/sessions/{}?reveal=true", session.id))
            .to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;
        let wallet = session.wallet.unwrap();
        assert!(wallet.private_key_revealed);
        assert!(wallet.private_key.starts_with("priv_"));
    }

    #[actix_web::test]
    async fn test_sign_without_wallet_is_validation_error() {
        let app = session_app!(4);
        let req = test::TestRequest::post().uri("/sessions").to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/sign", session.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_unknown_session_is_not_found() {
        let app = session_app!(4);
        let req = test::TestRequest::get()
            .uri(&format!("/sessions/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_session_limit_is_conflict() {
        let app = session_app!(1);
        let req = test::TestRequest::post().uri("/sessions").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post().uri("/sessions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_delete_session() {
        let app = session_app!(4);
        let req = test::TestRequest::post().uri("/sessions").to_request();
        let session: SessionView = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/sessions/{}", session.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/sessions/{}", session.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
