use actix_web::{HttpResponse, Responder};
use log::debug;
use crate::models::Message;

pub async fn health_check() -> impl Responder {
    debug!("Health check");
    HttpResponse::Ok().json(Message {
        content: "Service is healthy".to_string(),
    })
}
