use actix_web::{web, HttpResponse};
use log::{info, debug};
use serde::{Deserialize, Serialize};
use crate::utils::crypto::{generate_hash, generate_key_pair, sign_document, verify_signature};
use crate::utils::display::{truncate_key, DEFAULT_END_CHARS, DEFAULT_START_CHARS};

#[derive(Debug, Serialize, Deserialize)]
pub struct HashRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HashResponse {
    pub hash: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub hash: String,
    pub private_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub document: String,
    pub public_key: String,
    pub signature: String,
    pub original_private_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruncateRequest {
    pub key: String,
    pub start_chars: Option<usize>,
    pub end_chars: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TruncateResponse {
    pub display: String,
}

/// Generate a fresh simulated wallet
pub async fn create_key_pair() -> HttpResponse {
    let key_pair = generate_key_pair();
    info!("Generated key pair for address {}", key_pair.address);
    HttpResponse::Ok().json(key_pair)
}

pub async fn hash_content(payload: web::Json<HashRequest>) -> HttpResponse {
    let hash = generate_hash(&payload.content);
    debug!("Hashed {} bytes: {}", payload.content.len(), hash);
    HttpResponse::Ok().json(HashResponse { hash })
}

pub async fn sign(payload: web::Json<SignRequest>) -> HttpResponse {
    let signature = sign_document(&payload.hash, &payload.private_key);
    info!("Signed hash {}", payload.hash);
    HttpResponse::Ok().json(SignResponse { signature })
}

pub async fn verify(payload: web::Json<VerifyRequest>) -> HttpResponse {
    let valid = verify_signature(
        &payload.document,
        &payload.public_key,
        &payload.signature,
        &payload.original_private_key,
    );
    info!("Verified signature {}: {}", payload.signature, if valid { "valid" } else { "invalid" });
    HttpResponse::Ok().json(VerifyResponse { valid })
}

pub async fn truncate(payload: web::Json<TruncateRequest>) -> HttpResponse {
    let display = truncate_key(
        &payload.key,
        payload.start_chars.unwrap_or(DEFAULT_START_CHARS),
        payload.end_chars.unwrap_or(DEFAULT_END_CHARS),
    );
    HttpResponse::Ok().json(TruncateResponse { display })
}
